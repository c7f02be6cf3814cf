//! Model facade: the books, the displayed (filtered) lists, and event
//! publication.
//!
//! All mutation goes through this facade so that every successful mutation
//! publishes exactly one change event carrying the post-mutation state, and a
//! failed mutation publishes none. The bus is injected at construction.

use std::sync::Arc;

use recruit_core::book::{CandidateBook, CompanyBook};
use recruit_core::candidate::Candidate;
use recruit_core::company::{Company, JobOffer};
use recruit_core::error::{RecruitError, Result};
use recruit_core::event::{AppEvent, EventBus};
use recruit_core::prefs::UserPrefs;

use crate::command::Index;

pub struct Model {
    candidate_book: CandidateBook,
    company_book: CompanyBook,
    prefs: UserPrefs,
    bus: Arc<EventBus>,
    candidate_filter: Option<Vec<String>>,
    company_filter: Option<Vec<String>>,
}

impl Model {
    pub fn new(
        candidate_book: CandidateBook,
        company_book: CompanyBook,
        prefs: UserPrefs,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            candidate_book,
            company_book,
            prefs,
            bus,
            candidate_filter: None,
            company_filter: None,
        }
    }

    pub fn candidate_book(&self) -> &CandidateBook {
        &self.candidate_book
    }

    pub fn company_book(&self) -> &CompanyBook {
        &self.company_book
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    // ============================================================================
    // Candidate mutations
    // ============================================================================

    pub fn add_candidate(&mut self, candidate: Candidate) -> Result<()> {
        self.candidate_book.add_candidate(candidate)?;
        self.publish_candidate_book_changed();
        Ok(())
    }

    pub fn delete_candidate(&mut self, candidate: &Candidate) -> Result<()> {
        self.candidate_book.remove_candidate(candidate)?;
        self.publish_candidate_book_changed();
        Ok(())
    }

    pub fn replace_candidate(&mut self, target: &Candidate, replacement: Candidate) -> Result<()> {
        self.candidate_book.replace_candidate(target, replacement)?;
        self.publish_candidate_book_changed();
        Ok(())
    }

    // ============================================================================
    // Company mutations
    // ============================================================================

    pub fn add_company(&mut self, company: Company) -> Result<()> {
        self.company_book.add_company(company)?;
        self.publish_company_book_changed();
        Ok(())
    }

    pub fn delete_company(&mut self, company: &Company) -> Result<()> {
        self.company_book.remove_company(company)?;
        self.publish_company_book_changed();
        Ok(())
    }

    pub fn add_job_offer(&mut self, company_name: &str, job: JobOffer) -> Result<()> {
        self.company_book.add_job_offer(company_name, job)?;
        self.publish_company_book_changed();
        Ok(())
    }

    pub fn delete_job_offer(&mut self, company_name: &str, title: &str) -> Result<JobOffer> {
        let removed = self.company_book.remove_job_offer(company_name, title)?;
        self.publish_company_book_changed();
        Ok(removed)
    }

    pub fn shortlist_candidate(
        &mut self,
        company_name: &str,
        job_title: &str,
        candidate: Candidate,
    ) -> Result<()> {
        self.company_book
            .shortlist_candidate(company_name, job_title, candidate)?;
        self.publish_company_book_changed();
        Ok(())
    }

    // ============================================================================
    // Wholesale replacement
    // ============================================================================

    pub fn reset_candidate_book(&mut self, new_data: CandidateBook) -> Result<()> {
        self.candidate_book.reset_data(new_data)?;
        self.publish_candidate_book_changed();
        Ok(())
    }

    pub fn reset_company_book(&mut self, new_data: CompanyBook) -> Result<()> {
        self.company_book.reset_data(new_data)?;
        self.publish_company_book_changed();
        Ok(())
    }

    // ============================================================================
    // Displayed lists
    // ============================================================================

    /// The candidates currently displayed, in book order, narrowed by the
    /// active find filter. Index arguments are 1-based into this list.
    pub fn filtered_candidates(&self) -> Vec<&Candidate> {
        self.candidate_book
            .candidates()
            .iter()
            .filter(|c| match &self.candidate_filter {
                None => true,
                Some(keywords) => name_matches(&c.name, keywords),
            })
            .collect()
    }

    pub fn filtered_companies(&self) -> Vec<&Company> {
        self.company_book
            .companies()
            .iter()
            .filter(|c| match &self.company_filter {
                None => true,
                Some(keywords) => name_matches(&c.name, keywords),
            })
            .collect()
    }

    pub fn set_candidate_filter(&mut self, keywords: Option<Vec<String>>) {
        self.candidate_filter = keywords;
    }

    pub fn set_company_filter(&mut self, keywords: Option<Vec<String>>) {
        self.company_filter = keywords;
    }

    /// Resolves a 1-based displayed-list index to a candidate.
    pub fn candidate_at(&self, index: Index) -> Result<&Candidate> {
        self.filtered_candidates()
            .get(index.zero_based())
            .copied()
            .ok_or_else(|| {
                RecruitError::not_found("candidate", format!("index {}", index.one_based()))
            })
    }

    /// Resolves a 1-based displayed-list index to a company.
    pub fn company_at(&self, index: Index) -> Result<&Company> {
        self.filtered_companies()
            .get(index.zero_based())
            .copied()
            .ok_or_else(|| {
                RecruitError::not_found("company", format!("index {}", index.one_based()))
            })
    }

    // ============================================================================
    // Event publication
    // ============================================================================

    fn publish_candidate_book_changed(&self) {
        self.bus
            .publish(&AppEvent::CandidateBookChanged(self.candidate_book.clone()));
    }

    fn publish_company_book_changed(&self) {
        self.bus
            .publish(&AppEvent::CompanyBookChanged(self.company_book.clone()));
    }

    pub fn publish_prefs_changed(&self) {
        self.bus
            .publish(&AppEvent::PreferencesChanged(self.prefs.clone()));
    }
}

/// Any keyword matching any whole word of the name, case-insensitively.
fn name_matches(name: &str, keywords: &[String]) -> bool {
    name.split_whitespace().any(|word| {
        keywords
            .iter()
            .any(|keyword| word.eq_ignore_ascii_case(keyword))
    })
}
