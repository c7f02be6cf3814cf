//! Change events and the synchronous publish/subscribe bus.
//!
//! Every successful book mutation publishes exactly one change event carrying
//! a snapshot of the post-mutation state. Subscribers (storage, UI refresh)
//! are registered once at startup; dispatch is synchronous, in registration
//! order, on the publishing call's own thread. The bus is passed explicitly
//! through construction; there is no global registry.

use std::sync::RwLock;

use crate::book::{CandidateBook, CompanyBook};
use crate::error::Result;
use crate::prefs::UserPrefs;

/// An immutable notification of a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The candidate book mutated; carries the post-mutation state.
    CandidateBookChanged(CandidateBook),
    /// The company book mutated; carries the post-mutation state.
    CompanyBookChanged(CompanyBook),
    /// User preferences changed; carries the new preferences.
    PreferencesChanged(UserPrefs),
    /// A subscriber failed while persisting; surfaced for the UI to display.
    DataSavingFailed { operation: String, cause: String },
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::CandidateBookChanged(_) => EventKind::CandidateBookChanged,
            Self::CompanyBookChanged(_) => EventKind::CompanyBookChanged,
            Self::PreferencesChanged(_) => EventKind::PreferencesChanged,
            Self::DataSavingFailed { .. } => EventKind::DataSavingFailed,
        }
    }

    /// Originating operation name used when reporting handler failures.
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::CandidateBookChanged(_) => "candidate book changed",
            Self::CompanyBookChanged(_) => "company book changed",
            Self::PreferencesChanged(_) => "preferences changed",
            Self::DataSavingFailed { .. } => "data saving failed",
        }
    }
}

/// Discriminant used to key handler registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CandidateBookChanged,
    CompanyBookChanged,
    PreferencesChanged,
    DataSavingFailed,
}

type Handler = Box<dyn Fn(&AppEvent) -> Result<()> + Send + Sync>;

/// Single-threaded synchronous publish/subscribe registry.
///
/// Handlers for an event run in registration order; a handler error never
/// prevents the remaining handlers from running. Handler errors are caught at
/// the dispatch boundary and converted into a secondary `DataSavingFailed`
/// event instead of propagating to the publisher.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<Vec<(EventKind, Handler)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a handler for one event kind.
    pub fn register<F>(&self, kind: EventKind, handler: F)
    where
        F: Fn(&AppEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.handlers
            .write()
            .unwrap()
            .push((kind, Box::new(handler)));
    }

    /// Dispatches `event` to every handler registered for its kind.
    pub fn publish(&self, event: &AppEvent) {
        let mut failures = Vec::new();
        {
            let handlers = self.handlers.read().unwrap();
            for (kind, handler) in handlers.iter() {
                if *kind != event.kind() {
                    continue;
                }
                if let Err(e) = handler(event) {
                    failures.push(e);
                }
            }
        }

        for cause in failures {
            if event.kind() == EventKind::DataSavingFailed {
                // Failure handlers must not feed the bus again.
                tracing::warn!("handler failed while reporting a saving failure: {cause}");
                continue;
            }
            tracing::warn!(
                operation = event.operation_name(),
                "event handler failed: {cause}"
            );
            self.publish(&AppEvent::DataSavingFailed {
                operation: event.operation_name().to_string(),
                cause: cause.to_string(),
            });
        }
    }
}
