//! Document books: ordered, duplicate-free collections of domain entities.
//!
//! Both books share the same contract shape: `add` / `remove` / `replace` /
//! `has` / `reset_data`, plus a read-only slice view of their contents.
//! Duplicate detection consults *identity* equality (a subset of fields),
//! intentionally looser than full field equality.

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::company::{Company, JobOffer};
use crate::error::{RecruitError, Result};

/// Identity equality over a chosen subset of an entity's fields.
///
/// Decides "is this logically the same record" for duplicate prevention,
/// distinct from the full-field `PartialEq`.
pub trait Identity {
    /// Entity name used in error messages.
    const ENTITY_TYPE: &'static str;

    fn same_identity(&self, other: &Self) -> bool;

    /// Short human-readable handle for error messages.
    fn label(&self) -> String;
}

/// Ordered collection that enforces identity uniqueness on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity + Clone> UniqueList<T> {
    /// Pure predicate: does an identity-equal entity exist?
    pub fn contains(&self, entity: &T) -> bool {
        self.items.iter().any(|e| e.same_identity(entity))
    }

    /// Inserts at the end of the collection.
    pub fn add(&mut self, entity: T) -> Result<()> {
        if self.contains(&entity) {
            return Err(RecruitError::duplicate(T::ENTITY_TYPE));
        }
        self.items.push(entity);
        Ok(())
    }

    /// Removes the identity-equal entity.
    pub fn remove(&mut self, entity: &T) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|e| e.same_identity(entity))
            .ok_or_else(|| RecruitError::not_found(T::ENTITY_TYPE, entity.label()))?;
        self.items.remove(pos);
        Ok(())
    }

    /// Swaps `replacement` in at `target`'s position.
    ///
    /// Fails with `DuplicateEntity` if `replacement`'s identity collides with
    /// a *different* existing entity; replacing an entity with an
    /// identity-equal edit of itself is fine.
    pub fn replace(&mut self, target: &T, replacement: T) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|e| e.same_identity(target))
            .ok_or_else(|| RecruitError::not_found(T::ENTITY_TYPE, target.label()))?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, e)| i != pos && e.same_identity(&replacement));
        if collides {
            return Err(RecruitError::duplicate(T::ENTITY_TYPE));
        }
        self.items[pos] = replacement;
        Ok(())
    }

    /// Wholesale-replaces the contents.
    ///
    /// Fails with `DuplicateEntity` if the replacement state itself contains
    /// identity duplicates; the current contents are left untouched then.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<()> {
        Self::ensure_unique(&items)?;
        self.items = items;
        Ok(())
    }

    /// Checks the current contents for identity duplicates.
    ///
    /// Deserialization bypasses `add`, so freshly parsed lists must be
    /// validated before they are trusted.
    pub fn validate(&self) -> Result<()> {
        Self::ensure_unique(&self.items)
    }

    fn ensure_unique(items: &[T]) -> Result<()> {
        for (i, a) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|b| a.same_identity(b)) {
                return Err(RecruitError::duplicate(T::ENTITY_TYPE));
            }
        }
        Ok(())
    }

    /// Read-only view of the collection in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// The candidate book: owns an ordered, identity-unique list of candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CandidateBook {
    candidates: UniqueList<Candidate>,
}

impl CandidateBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only, always-current view of the candidates.
    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_slice()
    }

    pub fn has_candidate(&self, candidate: &Candidate) -> bool {
        self.candidates.contains(candidate)
    }

    pub fn add_candidate(&mut self, candidate: Candidate) -> Result<()> {
        self.candidates.add(candidate)
    }

    pub fn remove_candidate(&mut self, candidate: &Candidate) -> Result<()> {
        self.candidates.remove(candidate)
    }

    pub fn replace_candidate(&mut self, target: &Candidate, replacement: Candidate) -> Result<()> {
        self.candidates.replace(target, replacement)
    }

    /// Wholesale-replaces the book contents with `new_data`.
    pub fn reset_data(&mut self, new_data: CandidateBook) -> Result<()> {
        self.candidates.set_items(new_data.candidates.into_items())
    }

    /// Rejects deserialized data whose identity invariant does not hold.
    pub fn validate(&self) -> Result<()> {
        self.candidates.validate()
    }
}

/// The company book: owns companies, each owning its job offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanyBook {
    companies: UniqueList<Company>,
}

impl CompanyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only, always-current view of the companies.
    pub fn companies(&self) -> &[Company] {
        self.companies.as_slice()
    }

    pub fn has_company(&self, company: &Company) -> bool {
        self.companies.contains(company)
    }

    pub fn add_company(&mut self, company: Company) -> Result<()> {
        self.companies.add(company)
    }

    /// Removes a company together with the job offers it owns.
    pub fn remove_company(&mut self, company: &Company) -> Result<()> {
        self.companies.remove(company)
    }

    pub fn replace_company(&mut self, target: &Company, replacement: Company) -> Result<()> {
        self.companies.replace(target, replacement)
    }

    /// Wholesale-replaces the book contents with `new_data`.
    pub fn reset_data(&mut self, new_data: CompanyBook) -> Result<()> {
        self.companies.set_items(new_data.companies.into_items())
    }

    /// Looks up a company by its identity (case-insensitive name).
    pub fn find_company(&self, name: &str) -> Option<&Company> {
        self.companies
            .as_slice()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Adds a job offer to the named company.
    pub fn add_job_offer(&mut self, company_name: &str, job: JobOffer) -> Result<()> {
        self.find_company_mut(company_name)?.add_job_offer(job)
    }

    /// Removes a job offer from the named company.
    pub fn remove_job_offer(&mut self, company_name: &str, title: &str) -> Result<JobOffer> {
        self.find_company_mut(company_name)?.remove_job_offer(title)
    }

    /// Appends a candidate to the shortlist of the named company's job offer.
    pub fn shortlist_candidate(
        &mut self,
        company_name: &str,
        job_title: &str,
        candidate: Candidate,
    ) -> Result<()> {
        let company = self.find_company_mut(company_name)?;
        let job = company
            .find_job_offer_mut(job_title)
            .ok_or_else(|| RecruitError::not_found(JobOffer::ENTITY_TYPE, job_title))?;
        job.add_to_shortlist(candidate)
    }

    /// Rejects deserialized data whose identity invariants do not hold,
    /// including job-offer uniqueness within each company.
    pub fn validate(&self) -> Result<()> {
        self.companies.validate()?;
        for company in self.companies.as_slice() {
            for (i, a) in company.job_offers.iter().enumerate() {
                if company.job_offers[i + 1..].iter().any(|b| a.same_identity(b)) {
                    return Err(RecruitError::duplicate(JobOffer::ENTITY_TYPE));
                }
            }
        }
        Ok(())
    }

    fn find_company_mut(&mut self, name: &str) -> Result<&mut Company> {
        self.companies
            .items
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RecruitError::not_found(Company::ENTITY_TYPE, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn alice() -> Candidate {
        Candidate::new(
            "Alice Pauline",
            "94351253",
            "alice@example.com",
            "123, Jurong West Ave 6",
            BTreeSet::new(),
        )
    }

    fn bob() -> Candidate {
        Candidate::new(
            "Bob Choo",
            "87654321",
            "bob@example.com",
            "Block 123, Bobby Street 3",
            BTreeSet::new(),
        )
    }

    /// Alice with the same identity fields but different address and tags.
    fn edited_alice() -> Candidate {
        let mut tags = BTreeSet::new();
        tags.insert("husband".to_string());
        Candidate::new(
            "Alice Pauline",
            "94351253",
            "alice@example.com",
            "Block 123, Bobby Street 3",
            tags,
        )
    }

    fn typical_book() -> CandidateBook {
        let mut book = CandidateBook::new();
        book.add_candidate(alice()).unwrap();
        book.add_candidate(bob()).unwrap();
        book
    }

    #[test]
    fn constructor_starts_empty() {
        assert!(CandidateBook::new().candidates().is_empty());
    }

    #[test]
    fn reset_data_with_valid_book_replaces_data() {
        let mut book = CandidateBook::new();
        book.reset_data(typical_book()).unwrap();
        assert_eq!(book, typical_book());
    }

    #[test]
    fn reset_data_with_duplicate_candidates_fails() {
        let mut replacement = CandidateBook::new();
        replacement.candidates.items = vec![alice(), edited_alice()];

        let mut book = typical_book();
        let err = book.reset_data(replacement).unwrap_err();
        assert!(err.is_duplicate());
        // aborted atomically, original contents intact
        assert_eq!(book, typical_book());
    }

    #[test]
    fn has_candidate_not_in_book_returns_false() {
        assert!(!CandidateBook::new().has_candidate(&alice()));
    }

    #[test]
    fn has_candidate_in_book_returns_true() {
        assert!(typical_book().has_candidate(&alice()));
    }

    #[test]
    fn has_candidate_with_same_identity_fields_returns_true() {
        assert!(typical_book().has_candidate(&edited_alice()));
    }

    #[test]
    fn add_duplicate_identity_fails_and_keeps_book_unchanged() {
        let mut book = typical_book();
        assert!(book.add_candidate(edited_alice()).unwrap_err().is_duplicate());
        assert_eq!(book.candidates().len(), 2);
    }

    #[test]
    fn remove_missing_candidate_fails() {
        let mut book = CandidateBook::new();
        assert!(book.remove_candidate(&alice()).unwrap_err().is_not_found());
    }

    #[test]
    fn replace_preserves_position() {
        let mut book = typical_book();
        book.replace_candidate(&alice(), edited_alice()).unwrap();
        assert_eq!(book.candidates()[0], edited_alice());
        assert_eq!(book.candidates()[1], bob());
    }

    #[test]
    fn replace_colliding_with_other_entity_fails() {
        let mut book = typical_book();
        // editing Bob into Alice's identity must be rejected
        let err = book.replace_candidate(&bob(), edited_alice()).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(book, typical_book());
    }

    #[test]
    fn replace_missing_target_fails() {
        let mut book = CandidateBook::new();
        let err = book.replace_candidate(&alice(), edited_alice()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn uniqueness_holds_across_mutation_sequences() {
        let mut book = CandidateBook::new();
        book.add_candidate(alice()).unwrap();
        book.add_candidate(bob()).unwrap();
        book.remove_candidate(&alice()).unwrap();
        book.add_candidate(edited_alice()).unwrap();
        book.replace_candidate(&bob(), bob()).unwrap();

        let items = book.candidates();
        for (i, a) in items.iter().enumerate() {
            assert!(!items[i + 1..].iter().any(|b| a.same_identity(b)));
        }
    }

    #[test]
    fn company_book_remove_cascades_job_offers() {
        use crate::company::JobOffer;

        let mut book = CompanyBook::new();
        let mut company = Company::new("KFC");
        company.add_job_offer(JobOffer::new("Cook", vec![], 2)).unwrap();
        book.add_company(company.clone()).unwrap();

        book.remove_company(&company).unwrap();
        assert!(book.companies().is_empty());
        assert!(book.find_company("KFC").is_none());
    }

    #[test]
    fn company_book_validate_catches_duplicate_jobs_within_company() {
        use crate::company::JobOffer;

        let mut company = Company::new("KFC");
        company.job_offers = vec![
            JobOffer::new("Cook", vec![], 1),
            JobOffer::new("cook", vec![], 2),
        ];
        let mut book = CompanyBook::new();
        book.companies.items = vec![company];
        assert!(book.validate().unwrap_err().is_duplicate());
    }

    #[test]
    fn validate_catches_duplicates_introduced_by_deserialization() {
        let mut broken = CandidateBook::new();
        broken.candidates.items = vec![alice(), edited_alice()];
        let content = serde_json::to_string(&broken).unwrap();

        let reparsed: CandidateBook = serde_json::from_str(&content).unwrap();
        assert!(reparsed.validate().unwrap_err().is_duplicate());
    }
}
