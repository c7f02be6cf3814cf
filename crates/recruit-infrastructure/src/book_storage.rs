//! JSON file storage for the two document books.
//!
//! Read contract: an absent file is `Ok(None)`, a present but unparsable file
//! is a `Format` error (this includes parseable JSON that violates a book's
//! uniqueness invariant), a failed read is an `Io` error. Writes create the
//! parent directory if it is missing.

use std::fs;
use std::path::Path;

use recruit_core::book::{CandidateBook, CompanyBook};
use recruit_core::error::{RecruitError, Result};

/// Reads the candidate book, returning `None` if no file exists.
pub fn read_candidate_book(path: &Path) -> Result<Option<CandidateBook>> {
    let Some(content) = read_if_present(path)? else {
        return Ok(None);
    };
    let book: CandidateBook = serde_json::from_str(&content)?;
    book.validate()
        .map_err(|e| RecruitError::format_error("JSON", e.to_string()))?;
    Ok(Some(book))
}

/// Reads the company book, returning `None` if no file exists.
pub fn read_company_book(path: &Path) -> Result<Option<CompanyBook>> {
    let Some(content) = read_if_present(path)? else {
        return Ok(None);
    };
    let book: CompanyBook = serde_json::from_str(&content)?;
    book.validate()
        .map_err(|e| RecruitError::format_error("JSON", e.to_string()))?;
    Ok(Some(book))
}

pub fn save_candidate_book(book: &CandidateBook, path: &Path) -> Result<()> {
    write_json(path, serde_json::to_string_pretty(book)?)
}

pub fn save_company_book(book: &CompanyBook, path: &Path) -> Result<()> {
    write_json(path, serde_json::to_string_pretty(book)?)
}

fn read_if_present(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| RecruitError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(Some(content))
}

fn write_json(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                RecruitError::io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    fs::write(path, content)
        .map_err(|e| RecruitError::io(format!("Failed to write {}: {}", path.display(), e)))
}
