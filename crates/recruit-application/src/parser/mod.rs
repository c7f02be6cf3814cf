//! Command parser / dispatcher.
//!
//! Given a command keyword, a raw argument string, and the current session
//! state, produces either a validated [`Command`] or a parse failure. When a
//! guided workflow is active the dispatcher delegates to the workflow's
//! narrowed sub-grammar; otherwise the full top-level grammar applies. A
//! malformed argument fails the whole parse, nothing is partially applied.

mod shortlist;
mod util;

use std::collections::BTreeSet;

use recruit_core::candidate::Candidate;
use recruit_core::company::{Company, JobOffer};
use recruit_core::error::{RecruitError, Result};
use recruit_core::session::SessionState;

use crate::command::{Command, EditCandidateDescriptor};

const MESSAGE_ADD_USAGE: &str = "add expects: add candidate n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]... | add company n/NAME | add job c/COMPANY j/TITLE [r/REQUIREMENT]... [h/HEADCOUNT]";
const MESSAGE_EDIT_USAGE: &str =
    "edit expects: edit candidate INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...";
const MESSAGE_DELETE_USAGE: &str =
    "delete expects: delete candidate INDEX | delete company INDEX | delete job c/COMPANY j/TITLE";
const MESSAGE_LIST_USAGE: &str = "list expects: list candidates | list companies";
const MESSAGE_FIND_USAGE: &str =
    "find expects: find candidates KEYWORD... | find companies KEYWORD...";

/// Parses raw input against the grammar legal for the current session state.
pub fn parse_command(input: &str, state: &SessionState) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RecruitError::parse("Empty command"));
    }
    let (keyword, arguments) = trimmed
        .split_once(char::is_whitespace)
        .map(|(k, a)| (k, a.trim()))
        .unwrap_or((trimmed, ""));

    if !state.is_idle() {
        return shortlist::parse_command(keyword, arguments, state);
    }

    match keyword {
        "add" => parse_add(arguments),
        "edit" => parse_edit(arguments),
        "delete" => parse_delete(arguments),
        "list" => parse_list(arguments),
        "find" => parse_find(arguments),
        "shortlist" => Ok(Command::StartShortlist),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        // selection keywords are only legal inside the shortlist workflow
        _ => Err(RecruitError::UnknownCommand),
    }
}

fn parse_add(arguments: &str) -> Result<Command> {
    let (entity, rest) = arguments
        .split_once(char::is_whitespace)
        .unwrap_or((arguments, ""));
    match entity {
        "candidate" => {
            let map = util::tokenize(rest, &["n/", "p/", "e/", "a/", "t/"]);
            let name = map
                .value("n/")
                .ok_or_else(|| RecruitError::parse(MESSAGE_ADD_USAGE))?;
            let candidate = Candidate::new(
                util::parse_name(name)?,
                optional_field(&map, "p/", util::parse_phone)?,
                optional_field(&map, "e/", util::parse_email)?,
                map.value("a/").unwrap_or_default().to_string(),
                parse_tags(&map),
            );
            Ok(Command::AddCandidate(candidate))
        }
        "company" => {
            let map = util::tokenize(rest, &["n/"]);
            let name = map
                .value("n/")
                .ok_or_else(|| RecruitError::parse(MESSAGE_ADD_USAGE))?;
            Ok(Command::AddCompany(Company::new(util::parse_name(name)?)))
        }
        "job" => {
            let map = util::tokenize(rest, &["c/", "j/", "r/", "h/"]);
            let company = map
                .value("c/")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RecruitError::parse(MESSAGE_ADD_USAGE))?;
            let title = map
                .value("j/")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RecruitError::parse(MESSAGE_ADD_USAGE))?;
            let requirements = map
                .all_values("r/")
                .into_iter()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            let headcount = match map.value("h/") {
                Some(value) => util::parse_headcount(value)?,
                None => 1,
            };
            Ok(Command::AddJob {
                company: company.to_string(),
                job: JobOffer::new(title, requirements, headcount),
            })
        }
        _ => Err(RecruitError::parse(MESSAGE_ADD_USAGE)),
    }
}

fn parse_edit(arguments: &str) -> Result<Command> {
    let map = util::tokenize(arguments, &["n/", "p/", "e/", "a/", "t/"]);
    let preamble: Vec<&str> = map.preamble().split_whitespace().collect();
    let ["candidate", index_token] = preamble.as_slice() else {
        return Err(RecruitError::parse(MESSAGE_EDIT_USAGE));
    };
    let index = util::parse_index(index_token)?;

    let edits = EditCandidateDescriptor {
        name: map.value("n/").map(util::parse_name).transpose()?,
        phone: map.value("p/").map(util::parse_phone).transpose()?,
        email: map.value("e/").map(util::parse_email).transpose()?,
        address: map.value("a/").map(str::to_string),
        // a bare t/ clears all tags
        tags: map.has("t/").then(|| parse_tags(&map)),
    };
    if !edits.is_any_field_edited() {
        return Err(RecruitError::parse(
            "At least one field to edit must be provided",
        ));
    }
    Ok(Command::EditCandidate { index, edits })
}

fn parse_delete(arguments: &str) -> Result<Command> {
    let (entity, rest) = arguments
        .split_once(char::is_whitespace)
        .map(|(e, r)| (e, r.trim()))
        .unwrap_or((arguments, ""));
    match entity {
        "candidate" => Ok(Command::DeleteCandidate(util::parse_index(rest)?)),
        "company" => Ok(Command::DeleteCompany(util::parse_index(rest)?)),
        "job" => {
            let map = util::tokenize(rest, &["c/", "j/"]);
            let company = map
                .value("c/")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RecruitError::parse(MESSAGE_DELETE_USAGE))?;
            let title = map
                .value("j/")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RecruitError::parse(MESSAGE_DELETE_USAGE))?;
            Ok(Command::DeleteJob {
                company: company.to_string(),
                title: title.to_string(),
            })
        }
        _ => Err(RecruitError::parse(MESSAGE_DELETE_USAGE)),
    }
}

fn parse_list(arguments: &str) -> Result<Command> {
    match arguments {
        "candidates" => Ok(Command::ListCandidates),
        "companies" => Ok(Command::ListCompanies),
        _ => Err(RecruitError::parse(MESSAGE_LIST_USAGE)),
    }
}

fn parse_find(arguments: &str) -> Result<Command> {
    let mut parts = arguments.split_whitespace();
    let entity = parts.next().unwrap_or_default();
    let keywords: Vec<String> = parts.map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(RecruitError::parse(MESSAGE_FIND_USAGE));
    }
    match entity {
        "candidates" => Ok(Command::FindCandidates { keywords }),
        "companies" => Ok(Command::FindCompanies { keywords }),
        _ => Err(RecruitError::parse(MESSAGE_FIND_USAGE)),
    }
}

fn optional_field(
    map: &util::ArgumentMap,
    prefix: &str,
    parse: impl Fn(&str) -> Result<String>,
) -> Result<String> {
    match map.value(prefix) {
        Some(value) if !value.is_empty() => parse(value),
        _ => Ok(String::new()),
    }
}

fn parse_tags(map: &util::ArgumentMap) -> BTreeSet<String> {
    map.all_values("t/")
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
