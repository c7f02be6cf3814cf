//! Ties parsing and execution into the single entry point the UI calls.

use recruit_core::error::Result;
use recruit_core::session::SessionState;

use crate::command::CommandResult;
use crate::model::Model;
use crate::{executor, parser};

/// Processes commands one at a time, strictly sequentially: parsing consults
/// the current session state, execution mutates the model and advances it.
pub struct Logic {
    model: Model,
    session: SessionState,
}

impl Logic {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            session: SessionState::Idle,
        }
    }

    /// Parses and executes one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        tracing::debug!(input, "executing command");
        let command = parser::parse_command(input, &self.session)?;
        executor::execute(command, &mut self.model, &mut self.session)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_core::RecruitError;
    use recruit_core::book::{CandidateBook, CompanyBook};
    use recruit_core::event::EventBus;
    use recruit_core::prefs::UserPrefs;
    use recruit_core::sample::{sample_candidate_book, sample_company_book};
    use std::sync::Arc;

    fn logic_with(candidates: CandidateBook, companies: CompanyBook) -> Logic {
        Logic::new(Model::new(
            candidates,
            companies,
            UserPrefs::default(),
            Arc::new(EventBus::new()),
        ))
    }

    #[test]
    fn select_while_idle_is_an_unknown_command() {
        let mut logic = logic_with(sample_candidate_book(), sample_company_book());
        let err = logic.execute("select company 1").unwrap_err();
        assert_eq!(err, RecruitError::UnknownCommand);
        assert!(logic.session().is_idle());
    }

    #[test]
    fn parse_failure_leaves_session_unchanged() {
        let mut logic = logic_with(sample_candidate_book(), sample_company_book());
        logic.execute("shortlist").unwrap();

        let err = logic.execute("select company one").unwrap_err();
        assert!(err.is_parse());
        assert!(!logic.session().is_idle());
    }

    #[test]
    fn end_to_end_shortlist_via_text_commands() {
        let mut logic = logic_with(sample_candidate_book(), sample_company_book());

        logic.execute("shortlist").unwrap();
        logic.execute("select company 1").unwrap();
        logic.execute("select job 1").unwrap();
        logic.execute("select candidate 2").unwrap();
        let result = logic.execute("confirm").unwrap();

        assert!(result.message.contains("Successfully shortlisted"));
        assert!(logic.session().is_idle());

        let shortlisted = &logic.model().company_book().companies()[0].job_offers[0].shortlist;
        assert_eq!(shortlisted.len(), 1);
    }

    #[test]
    fn find_then_delete_uses_displayed_index() {
        let mut logic = logic_with(sample_candidate_book(), sample_company_book());
        let total = logic.model().candidate_book().candidates().len();

        logic.execute("find candidates bernice").unwrap();
        let result = logic.execute("delete candidate 1").unwrap();
        assert!(result.message.contains("Bernice"));
        assert_eq!(
            logic.model().candidate_book().candidates().len(),
            total - 1
        );
    }

    #[test]
    fn exit_sets_the_exit_flag() {
        let mut logic = logic_with(CandidateBook::new(), CompanyBook::new());
        assert!(logic.execute("exit").unwrap().exit);
    }
}
