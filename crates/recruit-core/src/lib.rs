pub mod book;
pub mod candidate;
pub mod company;
pub mod config;
pub mod error;
pub mod event;
pub mod prefs;
pub mod sample;
pub mod session;

// Re-export common error type
pub use error::RecruitError;
