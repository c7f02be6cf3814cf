pub mod book_storage;
pub mod paths;
pub mod prefs_storage;
pub mod storage_manager;

pub use crate::paths::RecruitPaths;
pub use crate::storage_manager::StorageManager;
