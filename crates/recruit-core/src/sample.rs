//! Seed data used when a data file is absent at startup.

use std::collections::BTreeSet;

use crate::book::{CandidateBook, CompanyBook};
use crate::candidate::Candidate;
use crate::company::{Company, JobOffer};

fn tags(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|t| t.to_string()).collect()
}

pub fn sample_candidate_book() -> CandidateBook {
    let mut book = CandidateBook::new();
    let candidates = [
        Candidate::new(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29, #06-40",
            tags(&["retail"]),
        ),
        Candidate::new(
            "Bernice Yu",
            "99272758",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
            tags(&["fnb", "parttime"]),
        ),
        Candidate::new(
            "Charlotte Oliveiro",
            "93210283",
            "charlotte@example.com",
            "Blk 11 Ang Mo Kio Street 74, #11-04",
            tags(&["logistics"]),
        ),
        Candidate::new(
            "David Li",
            "91031282",
            "lidavid@example.com",
            "Blk 436 Serangoon Gardens Street 26, #16-43",
            BTreeSet::new(),
        ),
    ];
    for candidate in candidates {
        // sample data is duplicate-free by construction
        book.add_candidate(candidate)
            .unwrap_or_else(|e| tracing::warn!("sample candidate skipped: {e}"));
    }
    book
}

pub fn sample_company_book() -> CompanyBook {
    let mut book = CompanyBook::new();

    let mut mcdonalds = Company::new("McDonalds");
    let _ = mcdonalds.add_job_offer(JobOffer::new(
        "Cashier",
        vec!["O levels".to_string()],
        3,
    ));
    let _ = mcdonalds.add_job_offer(JobOffer::new(
        "Shift Manager",
        vec!["2 years F&B experience".to_string()],
        1,
    ));

    let mut ntuc = Company::new("NTUC FairPrice");
    let _ = ntuc.add_job_offer(JobOffer::new(
        "Warehouse Assistant",
        vec!["Able to lift 20kg".to_string(), "Forklift license".to_string()],
        5,
    ));

    for company in [mcdonalds, ntuc] {
        book.add_company(company)
            .unwrap_or_else(|e| tracing::warn!("sample company skipped: {e}"));
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_books_satisfy_their_invariants() {
        assert!(sample_candidate_book().validate().is_ok());
        assert!(sample_company_book().validate().is_ok());
        assert!(!sample_candidate_book().candidates().is_empty());
        assert!(!sample_company_book().companies().is_empty());
    }
}
