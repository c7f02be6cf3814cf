//! Company and job offer domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::Identity;
use crate::candidate::Candidate;
use crate::error::{RecruitError, Result};

/// A job posting owned by exactly one company.
///
/// A job offer does not outlive its owning company: removing the company
/// removes its offers with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    /// Job title
    pub title: String,
    /// Free-form requirement lines
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Number of openings for this posting
    pub headcount: u32,
    /// Candidates shortlisted against this posting, identity-unique
    #[serde(default)]
    pub shortlist: Vec<Candidate>,
}

impl JobOffer {
    pub fn new(title: impl Into<String>, requirements: Vec<String>, headcount: u32) -> Self {
        Self {
            title: title.into(),
            requirements,
            headcount,
            shortlist: Vec::new(),
        }
    }

    /// Returns true if a candidate with the same identity is already shortlisted.
    pub fn has_shortlisted(&self, candidate: &Candidate) -> bool {
        self.shortlist.iter().any(|c| c.same_identity(candidate))
    }

    /// Appends a candidate to the shortlist.
    ///
    /// Fails with `DuplicateEntity` if a candidate with the same identity is
    /// already on it.
    pub fn add_to_shortlist(&mut self, candidate: Candidate) -> Result<()> {
        if self.has_shortlisted(&candidate) {
            return Err(RecruitError::duplicate(Candidate::ENTITY_TYPE));
        }
        self.shortlist.push(candidate);
        Ok(())
    }
}

impl Identity for JobOffer {
    const ENTITY_TYPE: &'static str = "job offer";

    fn same_identity(&self, other: &Self) -> bool {
        self.title.eq_ignore_ascii_case(&other.title)
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl fmt::Display for JobOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Headcount: {}", self.title, self.headcount)?;
        if !self.requirements.is_empty() {
            write!(f, " Requirements: [{}]", self.requirements.join(", "))?;
        }
        Ok(())
    }
}

/// A company record owning its job offers exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name
    pub name: String,
    /// Job postings owned by this company, identity-unique by title
    #[serde(default)]
    pub job_offers: Vec<JobOffer>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_offers: Vec::new(),
        }
    }

    /// Returns true if a job offer with the same identity already exists.
    pub fn has_job_offer(&self, job: &JobOffer) -> bool {
        self.job_offers.iter().any(|j| j.same_identity(job))
    }

    /// Adds a job offer, failing with `DuplicateEntity` on a title collision.
    pub fn add_job_offer(&mut self, job: JobOffer) -> Result<()> {
        if self.has_job_offer(&job) {
            return Err(RecruitError::duplicate(JobOffer::ENTITY_TYPE));
        }
        self.job_offers.push(job);
        Ok(())
    }

    /// Removes the job offer with the given title.
    pub fn remove_job_offer(&mut self, title: &str) -> Result<JobOffer> {
        let pos = self
            .job_offers
            .iter()
            .position(|j| j.title.eq_ignore_ascii_case(title))
            .ok_or_else(|| RecruitError::not_found(JobOffer::ENTITY_TYPE, title))?;
        Ok(self.job_offers.remove(pos))
    }

    /// Looks up a job offer by title.
    pub fn find_job_offer(&self, title: &str) -> Option<&JobOffer> {
        self.job_offers
            .iter()
            .find(|j| j.title.eq_ignore_ascii_case(title))
    }

    pub(crate) fn find_job_offer_mut(&mut self, title: &str) -> Option<&mut JobOffer> {
        self.job_offers
            .iter_mut()
            .find(|j| j.title.eq_ignore_ascii_case(title))
    }
}

impl Identity for Company {
    const ENTITY_TYPE: &'static str = "company";

    fn same_identity(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} job offers)", self.name, self.job_offers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn mcdonalds() -> Company {
        let mut company = Company::new("McDonalds");
        company
            .add_job_offer(JobOffer::new("Cashier", vec!["O levels".to_string()], 3))
            .unwrap();
        company
    }

    #[test]
    fn company_identity_is_case_insensitive() {
        assert!(mcdonalds().same_identity(&Company::new("MCDONALDS")));
        assert!(!mcdonalds().same_identity(&Company::new("KFC")));
    }

    #[test]
    fn add_job_offer_rejects_duplicate_title() {
        let mut company = mcdonalds();
        let err = company
            .add_job_offer(JobOffer::new("cashier", vec![], 1))
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(company.job_offers.len(), 1);
    }

    #[test]
    fn remove_job_offer_unknown_title_fails() {
        let mut company = mcdonalds();
        assert!(company.remove_job_offer("Manager").unwrap_err().is_not_found());
    }

    #[test]
    fn shortlist_rejects_identity_duplicate() {
        let mut job = JobOffer::new("Cashier", vec![], 1);
        let alice = Candidate::new("Alice", "91234567", "a@b.com", "home", BTreeSet::new());
        let mut alice_edited = alice.clone();
        alice_edited.address = "elsewhere".to_string();

        job.add_to_shortlist(alice).unwrap();
        assert!(job.add_to_shortlist(alice_edited).unwrap_err().is_duplicate());
        assert_eq!(job.shortlist.len(), 1);
    }
}
