//! Stage-narrowed grammar for the shortlist workflow.
//!
//! Mid-workflow the grammar recognizes only the keyword legal for the current
//! step, plus `cancel`. Any other keyword, including otherwise-valid
//! top-level commands, is an unknown command: the narrowing forces linear
//! progression rather than merely hinting at it.

use recruit_core::error::{RecruitError, Result};
use recruit_core::session::SessionState;

use super::util;
use crate::command::{Command, Index};

pub(crate) fn parse_command(
    keyword: &str,
    arguments: &str,
    state: &SessionState,
) -> Result<Command> {
    // cancellation is legal at every stage; arguments are ignored
    if keyword == "cancel" {
        return Ok(Command::CancelShortlist);
    }

    match state {
        SessionState::AwaitCompanySelection => {
            expect_select("company", keyword, arguments).map(Command::SelectCompany)
        }
        SessionState::AwaitJobSelection { .. } => {
            expect_select("job", keyword, arguments).map(Command::SelectJob)
        }
        SessionState::AwaitCandidateSelection { .. } => {
            expect_select("candidate", keyword, arguments).map(Command::SelectCandidate)
        }
        SessionState::AwaitConfirmation { .. } => {
            if keyword == "confirm" {
                Ok(Command::ConfirmShortlist)
            } else {
                Err(RecruitError::UnknownCommand)
            }
        }
        // the dispatcher only delegates here mid-workflow
        SessionState::Idle => Err(RecruitError::UnknownCommand),
    }
}

/// Accepts exactly `select <target> INDEX`; a wrong keyword or wrong target
/// is an unknown command, a malformed index is a parse error.
fn expect_select(target: &str, keyword: &str, arguments: &str) -> Result<Index> {
    if keyword != "select" {
        return Err(RecruitError::UnknownCommand);
    }
    let (entity, rest) = arguments
        .split_once(char::is_whitespace)
        .unwrap_or((arguments, ""));
    if entity != target {
        return Err(RecruitError::UnknownCommand);
    }
    util::parse_index(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_core::session::{CompanyRef, JobRef};

    fn await_job() -> SessionState {
        SessionState::AwaitJobSelection {
            company: CompanyRef {
                name: "KFC".to_string(),
            },
        }
    }

    #[test]
    fn stage_keyword_parses() {
        let cmd = parse_command("select", "job 2", &await_job()).unwrap();
        assert_eq!(cmd, Command::SelectJob(Index::from_one_based(2)));
    }

    #[test]
    fn top_level_keywords_are_unknown_mid_workflow() {
        for input in [("add", "candidate n/Alice"), ("list", "candidates"), ("exit", "")] {
            let err = parse_command(input.0, input.1, &await_job()).unwrap_err();
            assert_eq!(err, RecruitError::UnknownCommand);
        }
    }

    #[test]
    fn wrong_selection_target_is_unknown() {
        let err = parse_command("select", "company 1", &await_job()).unwrap_err();
        assert_eq!(err, RecruitError::UnknownCommand);
    }

    #[test]
    fn malformed_index_is_a_parse_error() {
        let err = parse_command("select", "job zero", &await_job()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn cancel_is_legal_at_every_stage() {
        let states = [
            SessionState::AwaitCompanySelection,
            await_job(),
            SessionState::AwaitCandidateSelection {
                company: CompanyRef {
                    name: "KFC".to_string(),
                },
                job: JobRef {
                    title: "Cook".to_string(),
                },
            },
        ];
        for state in states {
            assert_eq!(
                parse_command("cancel", "", &state).unwrap(),
                Command::CancelShortlist
            );
        }
    }

    #[test]
    fn confirmation_stage_accepts_only_confirm() {
        let state = SessionState::AwaitConfirmation {
            company: CompanyRef {
                name: "KFC".to_string(),
            },
            job: JobRef {
                title: "Cook".to_string(),
            },
            candidate: recruit_core::session::CandidateRef {
                name: "Alice".to_string(),
                phone: "91234567".to_string(),
                email: "a@b.com".to_string(),
            },
        };
        assert_eq!(
            parse_command("confirm", "", &state).unwrap(),
            Command::ConfirmShortlist
        );
        assert_eq!(
            parse_command("select", "candidate 1", &state).unwrap_err(),
            RecruitError::UnknownCommand
        );
    }
}
