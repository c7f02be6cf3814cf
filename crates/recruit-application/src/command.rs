//! Validated command values produced by the parser.

use std::collections::BTreeSet;

use recruit_core::candidate::Candidate;
use recruit_core::company::{Company, JobOffer};

/// One-based index into the currently *displayed* filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Builds from a 1-based position. Callers validate positivity first.
    pub fn from_one_based(position: usize) -> Self {
        debug_assert!(position > 0);
        Self(position - 1)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// Optional field edits applied to an existing candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditCandidateDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

impl EditCandidateDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Produces the edited candidate, keeping unedited fields from `base`.
    pub fn apply(&self, base: &Candidate) -> Candidate {
        Candidate {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| base.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| base.email.clone()),
            address: self.address.clone().unwrap_or_else(|| base.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| base.tags.clone()),
        }
    }
}

/// A fully validated command, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddCandidate(Candidate),
    AddCompany(Company),
    AddJob { company: String, job: JobOffer },
    EditCandidate {
        index: Index,
        edits: EditCandidateDescriptor,
    },
    DeleteCandidate(Index),
    DeleteCompany(Index),
    DeleteJob { company: String, title: String },
    ListCandidates,
    ListCompanies,
    FindCandidates { keywords: Vec<String> },
    FindCompanies { keywords: Vec<String> },
    StartShortlist,
    SelectCompany(Index),
    SelectJob(Index),
    SelectCandidate(Index),
    ConfirmShortlist,
    CancelShortlist,
    Help,
    Exit,
}

/// What the caller (UI) should display after executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_converts_between_bases() {
        let index = Index::from_one_based(1);
        assert_eq!(index.zero_based(), 0);
        assert_eq!(index.one_based(), 1);
    }

    #[test]
    fn descriptor_apply_keeps_unedited_fields() {
        let base = Candidate::new(
            "Alice",
            "91234567",
            "alice@example.com",
            "home",
            BTreeSet::new(),
        );
        let edits = EditCandidateDescriptor {
            phone: Some("87654321".to_string()),
            ..Default::default()
        };

        let edited = edits.apply(&base);
        assert_eq!(edited.phone, "87654321");
        assert_eq!(edited.name, base.name);
        assert_eq!(edited.email, base.email);
    }

    #[test]
    fn empty_descriptor_edits_nothing() {
        assert!(!EditCandidateDescriptor::default().is_any_field_edited());
    }
}
