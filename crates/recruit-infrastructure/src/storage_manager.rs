//! Manages storage of the document books and preferences in local files.
//!
//! `StorageManager` is the persistence synchronizer: it subscribes to the
//! change events the model publishes and writes the carried state to disk on
//! each one. A failed write is reported back over the bus as a
//! `DataSavingFailed` event; it is not retried and the in-memory mutation is
//! not rolled back, so the in-memory state stays authoritative for the rest
//! of the session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use recruit_core::book::{CandidateBook, CompanyBook};
use recruit_core::error::Result;
use recruit_core::event::{AppEvent, EventBus, EventKind};
use recruit_core::prefs::UserPrefs;

use crate::{book_storage, prefs_storage};

pub struct StorageManager {
    candidate_book_path: PathBuf,
    company_book_path: PathBuf,
    user_prefs_path: PathBuf,
}

impl StorageManager {
    pub fn new(
        candidate_book_path: PathBuf,
        company_book_path: PathBuf,
        user_prefs_path: PathBuf,
    ) -> Self {
        Self {
            candidate_book_path,
            company_book_path,
            user_prefs_path,
        }
    }

    /// Builds a manager from loaded preferences plus the preferences file's
    /// own location.
    pub fn from_prefs(prefs: &UserPrefs, user_prefs_path: PathBuf) -> Self {
        Self::new(
            prefs.candidate_book_file_path.clone(),
            prefs.company_book_file_path.clone(),
            user_prefs_path,
        )
    }

    pub fn candidate_book_path(&self) -> &Path {
        &self.candidate_book_path
    }

    pub fn company_book_path(&self) -> &Path {
        &self.company_book_path
    }

    // ============================================================================
    // Read operations (startup)
    // ============================================================================

    pub fn read_candidate_book(&self) -> Result<Option<CandidateBook>> {
        tracing::debug!(path = %self.candidate_book_path.display(), "reading candidate book");
        book_storage::read_candidate_book(&self.candidate_book_path)
    }

    pub fn read_company_book(&self) -> Result<Option<CompanyBook>> {
        tracing::debug!(path = %self.company_book_path.display(), "reading company book");
        book_storage::read_company_book(&self.company_book_path)
    }

    pub fn read_user_prefs(&self) -> Result<Option<UserPrefs>> {
        tracing::debug!(path = %self.user_prefs_path.display(), "reading user prefs");
        prefs_storage::read_user_prefs(&self.user_prefs_path)
    }

    // ============================================================================
    // Save operations
    // ============================================================================

    pub fn save_candidate_book(&self, book: &CandidateBook) -> Result<()> {
        tracing::debug!(path = %self.candidate_book_path.display(), "saving candidate book");
        book_storage::save_candidate_book(book, &self.candidate_book_path)
    }

    pub fn save_company_book(&self, book: &CompanyBook) -> Result<()> {
        tracing::debug!(path = %self.company_book_path.display(), "saving company book");
        book_storage::save_company_book(book, &self.company_book_path)
    }

    pub fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        tracing::debug!(path = %self.user_prefs_path.display(), "saving user prefs");
        prefs_storage::save_user_prefs(prefs, &self.user_prefs_path)
    }

    // ============================================================================
    // Event subscription
    // ============================================================================

    /// Registers persistence handlers for the three changed-event kinds.
    ///
    /// Handlers return their write errors to the bus, which converts them
    /// into `DataSavingFailed` events at the dispatch boundary.
    pub fn subscribe(self: &Arc<Self>, bus: &EventBus) {
        let storage = Arc::clone(self);
        bus.register(EventKind::CandidateBookChanged, move |event| {
            if let AppEvent::CandidateBookChanged(book) = event {
                tracing::info!("Local candidate book changed, saving to file");
                storage.save_candidate_book(book)?;
            }
            Ok(())
        });

        let storage = Arc::clone(self);
        bus.register(EventKind::CompanyBookChanged, move |event| {
            if let AppEvent::CompanyBookChanged(book) = event {
                tracing::info!("Local company book changed, saving to file");
                storage.save_company_book(book)?;
            }
            Ok(())
        });

        let storage = Arc::clone(self);
        bus.register(EventKind::PreferencesChanged, move |event| {
            if let AppEvent::PreferencesChanged(prefs) = event {
                tracing::info!("User preferences changed, saving to file");
                storage.save_user_prefs(prefs)?;
            }
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_core::candidate::Candidate;
    use std::collections::BTreeSet;
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn manager(dir: &Path) -> Arc<StorageManager> {
        Arc::new(StorageManager::new(
            dir.join("candidatebook.json"),
            dir.join("companybook.json"),
            dir.join("preferences.toml"),
        ))
    }

    fn one_candidate_book() -> CandidateBook {
        let mut book = CandidateBook::new();
        book.add_candidate(Candidate::new(
            "Alice",
            "91234567",
            "alice@example.com",
            "home",
            BTreeSet::new(),
        ))
        .unwrap();
        book
    }

    #[test]
    fn candidate_book_changed_event_persists_to_disk() {
        let dir = tempdir().unwrap();
        let storage = manager(dir.path());
        let bus = EventBus::new();
        storage.subscribe(&bus);

        let book = one_candidate_book();
        bus.publish(&AppEvent::CandidateBookChanged(book.clone()));

        assert_eq!(storage.read_candidate_book().unwrap(), Some(book));
    }

    #[test]
    fn preferences_changed_event_persists_to_disk() {
        let dir = tempdir().unwrap();
        let storage = manager(dir.path());
        let bus = EventBus::new();
        storage.subscribe(&bus);

        let prefs = UserPrefs::default();
        bus.publish(&AppEvent::PreferencesChanged(prefs.clone()));

        assert_eq!(storage.read_user_prefs().unwrap(), Some(prefs));
    }

    #[test]
    fn failed_save_surfaces_as_data_saving_failed() {
        let dir = tempdir().unwrap();
        // the candidate book path is a directory, so the write must fail
        let blocked = dir.path().join("candidatebook.json");
        std::fs::create_dir_all(&blocked).unwrap();
        let storage = Arc::new(StorageManager::new(
            blocked,
            dir.path().join("companybook.json"),
            dir.path().join("preferences.toml"),
        ));

        let bus = EventBus::new();
        storage.subscribe(&bus);

        let reported = Arc::new(Mutex::new(Vec::new()));
        let r = Arc::clone(&reported);
        bus.register(EventKind::DataSavingFailed, move |event| {
            if let AppEvent::DataSavingFailed { operation, .. } = event {
                r.lock().unwrap().push(operation.clone());
            }
            Ok(())
        });

        bus.publish(&AppEvent::CandidateBookChanged(one_candidate_book()));

        assert_eq!(
            *reported.lock().unwrap(),
            vec!["candidate book changed".to_string()]
        );
    }
}
