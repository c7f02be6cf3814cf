//! Session-scoped state for guided workflows.
//!
//! The shortlist workflow narrows the legal command grammar step by step:
//! company, then job offer, then candidate, then confirmation. Each state
//! variant carries exactly the selections valid at that stage, so an illegal
//! combination (confirmation without a selected job, say) cannot be
//! represented. Session state is process-lifetime-scoped and never persisted.

use crate::candidate::Candidate;
use crate::company::Company;

/// Identity key for a selected company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRef {
    pub name: String,
}

impl CompanyRef {
    pub fn of(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
        }
    }
}

/// Identity key for a selected job offer within the selected company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRef {
    pub title: String,
}

/// Identity key for a selected candidate.
///
/// Carries the full identity field subset (name plus both contact fields) so
/// resolution applies the same rule as duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRef {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl CandidateRef {
    pub fn of(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            phone: candidate.phone.clone(),
            email: candidate.email.clone(),
        }
    }

    /// Identity match against a live book entry.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.name == candidate.name
            && (self.phone == candidate.phone || self.email == candidate.email)
    }
}

/// Current stage of the in-progress guided workflow, if any.
///
/// A state advances only when the command legal for that state executes
/// successfully; a failed or illegal command leaves it unchanged. The session
/// holds identity keys into the books, never copies: if a referenced entity
/// is deleted mid-workflow, confirmation fails with a stale-reference error
/// and the session resets to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No workflow active; the full top-level grammar applies.
    #[default]
    Idle,
    AwaitCompanySelection,
    AwaitJobSelection {
        company: CompanyRef,
    },
    AwaitCandidateSelection {
        company: CompanyRef,
        job: JobRef,
    },
    AwaitConfirmation {
        company: CompanyRef,
        job: JobRef,
        candidate: CandidateRef,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Terminal transition back to `Idle`, on completion, cancellation or error.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// REPL prompt hint for the current stage.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Idle => ">> ",
            Self::AwaitCompanySelection
            | Self::AwaitJobSelection { .. }
            | Self::AwaitCandidateSelection { .. }
            | Self::AwaitConfirmation { .. } => "shortlist>> ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn default_is_idle() {
        assert!(SessionState::default().is_idle());
    }

    #[test]
    fn reset_returns_to_idle_from_any_stage() {
        let mut state = SessionState::AwaitCandidateSelection {
            company: CompanyRef {
                name: "KFC".to_string(),
            },
            job: JobRef {
                title: "Cook".to_string(),
            },
        };
        state.reset();
        assert!(state.is_idle());
    }

    #[test]
    fn candidate_ref_matches_identity_rule() {
        let alice = Candidate::new(
            "Alice",
            "91234567",
            "alice@example.com",
            "home",
            BTreeSet::new(),
        );
        let r = CandidateRef::of(&alice);

        let mut phone_changed = alice.clone();
        phone_changed.phone = "00000000".to_string();
        assert!(r.matches(&phone_changed));

        let mut renamed = alice.clone();
        renamed.name = "Bob".to_string();
        assert!(!r.matches(&renamed));
    }
}
