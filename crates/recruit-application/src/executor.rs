//! Command execution: mutates the model, advances the session, and produces
//! a result for the caller to render.
//!
//! A failed command leaves both the model and the session state unchanged,
//! with one deliberate exception: a stale session reference detected at
//! resolution time resets the session to idle, and a confirmation attempt
//! ends the workflow whether it shortlists or reports a duplicate.

use once_cell::sync::Lazy;
use recruit_core::candidate::Candidate;
use recruit_core::company::{Company, JobOffer};
use recruit_core::error::{RecruitError, Result};
use recruit_core::session::{CandidateRef, CompanyRef, JobRef, SessionState};

use crate::command::{Command, CommandResult, Index};
use crate::model::Model;

static HELP: Lazy<String> = Lazy::new(|| {
    [
        "Available commands:",
        "  add candidate n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...",
        "  add company n/NAME",
        "  add job c/COMPANY j/TITLE [r/REQUIREMENT]... [h/HEADCOUNT]",
        "  edit candidate INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...",
        "  delete candidate INDEX | delete company INDEX | delete job c/COMPANY j/TITLE",
        "  list candidates | list companies",
        "  find candidates KEYWORD... | find companies KEYWORD...",
        "  shortlist             start the guided shortlist workflow",
        "  help | exit",
        "",
        "Inside the shortlist workflow only the current step's selection",
        "command is accepted: select company INDEX, then select job INDEX,",
        "then select candidate INDEX, then confirm. 'cancel' aborts.",
    ]
    .join("\n")
});

pub fn execute(
    command: Command,
    model: &mut Model,
    session: &mut SessionState,
) -> Result<CommandResult> {
    match command {
        Command::AddCandidate(candidate) => {
            model.add_candidate(candidate.clone())?;
            Ok(CommandResult::new(format!("New candidate added: {candidate}")))
        }
        Command::AddCompany(company) => {
            model.add_company(company.clone())?;
            Ok(CommandResult::new(format!("New company added: {company}")))
        }
        Command::AddJob { company, job } => {
            model.add_job_offer(&company, job.clone())?;
            Ok(CommandResult::new(format!(
                "New job offer added to {company}: {job}"
            )))
        }
        Command::EditCandidate { index, edits } => {
            let target = model.candidate_at(index)?.clone();
            let edited = edits.apply(&target);
            model.replace_candidate(&target, edited.clone())?;
            Ok(CommandResult::new(format!("Edited candidate: {edited}")))
        }
        Command::DeleteCandidate(index) => {
            let target = model.candidate_at(index)?.clone();
            model.delete_candidate(&target)?;
            Ok(CommandResult::new(format!("Deleted candidate: {target}")))
        }
        Command::DeleteCompany(index) => {
            let target = model.company_at(index)?.clone();
            model.delete_company(&target)?;
            Ok(CommandResult::new(format!("Deleted company: {target}")))
        }
        Command::DeleteJob { company, title } => {
            let removed = model.delete_job_offer(&company, &title)?;
            Ok(CommandResult::new(format!(
                "Deleted job offer from {company}: {removed}"
            )))
        }
        Command::ListCandidates => {
            model.set_candidate_filter(None);
            Ok(CommandResult::new(format!(
                "Listed all candidates\n{}",
                render_candidates(&model.filtered_candidates())
            )))
        }
        Command::ListCompanies => {
            model.set_company_filter(None);
            Ok(CommandResult::new(format!(
                "Listed all companies\n{}",
                render_companies(&model.filtered_companies())
            )))
        }
        Command::FindCandidates { keywords } => {
            model.set_candidate_filter(Some(keywords));
            let shown = model.filtered_candidates();
            Ok(CommandResult::new(format!(
                "{} candidates listed!\n{}",
                shown.len(),
                render_candidates(&shown)
            )))
        }
        Command::FindCompanies { keywords } => {
            model.set_company_filter(Some(keywords));
            let shown = model.filtered_companies();
            Ok(CommandResult::new(format!(
                "{} companies listed!\n{}",
                shown.len(),
                render_companies(&shown)
            )))
        }
        Command::StartShortlist => {
            let companies = model.filtered_companies();
            if companies.is_empty() {
                return Err(RecruitError::not_found("company", "no companies to select"));
            }
            let listing = render_companies(&companies);
            *session = SessionState::AwaitCompanySelection;
            Ok(CommandResult::new(format!(
                "Shortlist process started. Please select a company.\n{listing}"
            )))
        }
        Command::SelectCompany(index) => select_company(index, model, session),
        Command::SelectJob(index) => select_job(index, model, session),
        Command::SelectCandidate(index) => select_candidate(index, model, session),
        Command::ConfirmShortlist => confirm_shortlist(model, session),
        Command::CancelShortlist => {
            session.reset();
            Ok(CommandResult::new("Shortlist process cancelled."))
        }
        Command::Help => Ok(CommandResult::new(HELP.as_str())),
        Command::Exit => Ok(CommandResult::exit("Exiting RecruitBook...")),
    }
}

fn select_company(
    index: Index,
    model: &Model,
    session: &mut SessionState,
) -> Result<CommandResult> {
    let company = model.company_at(index)?;
    let selected = CompanyRef::of(company);
    let listing = render_jobs(&company.job_offers);
    let message = format!(
        "Selected company: {}. Please select a job offer.\n{listing}",
        selected.name
    );
    *session = SessionState::AwaitJobSelection { company: selected };
    Ok(CommandResult::new(message))
}

fn select_job(index: Index, model: &Model, session: &mut SessionState) -> Result<CommandResult> {
    let SessionState::AwaitJobSelection { company } = &*session else {
        return Err(RecruitError::UnknownCommand);
    };
    let company_name = company.name.clone();
    let Some(live_company) = model.company_book().find_company(&company_name) else {
        session.reset();
        return Err(RecruitError::stale("company", company_name));
    };
    let job = live_company
        .job_offers
        .get(index.zero_based())
        .ok_or_else(|| {
            RecruitError::not_found("job offer", format!("index {}", index.one_based()))
        })?;
    let selected = JobRef {
        title: job.title.clone(),
    };
    let listing = render_candidates(&model.filtered_candidates());
    let message = format!(
        "Selected job offer: {}. Please select a candidate.\n{listing}",
        selected.title
    );
    *session = SessionState::AwaitCandidateSelection {
        company: CompanyRef { name: company_name },
        job: selected,
    };
    Ok(CommandResult::new(message))
}

fn select_candidate(
    index: Index,
    model: &Model,
    session: &mut SessionState,
) -> Result<CommandResult> {
    let SessionState::AwaitCandidateSelection { company, job } = &*session else {
        return Err(RecruitError::UnknownCommand);
    };
    let candidate = model.candidate_at(index)?;
    let selected = CandidateRef::of(candidate);
    let message = format!(
        "Selected candidate: {}. Type 'confirm' to shortlist this candidate for {} at {}, or 'cancel' to abort.",
        selected.name, job.title, company.name
    );
    *session = SessionState::AwaitConfirmation {
        company: company.clone(),
        job: job.clone(),
        candidate: selected,
    };
    Ok(CommandResult::new(message))
}

fn confirm_shortlist(model: &mut Model, session: &mut SessionState) -> Result<CommandResult> {
    let SessionState::AwaitConfirmation {
        company,
        job,
        candidate,
    } = &*session
    else {
        return Err(RecruitError::UnknownCommand);
    };
    let company = company.clone();
    let job = job.clone();
    let candidate_ref = candidate.clone();

    // every reference must still resolve; deletion mid-workflow leaves the
    // session holding dangling keys
    let Some(live_company) = model.company_book().find_company(&company.name) else {
        session.reset();
        return Err(RecruitError::stale("company", company.name));
    };
    if live_company.find_job_offer(&job.title).is_none() {
        session.reset();
        return Err(RecruitError::stale("job offer", job.title));
    }
    let Some(live_candidate) = model
        .candidate_book()
        .candidates()
        .iter()
        .find(|c| candidate_ref.matches(c))
        .cloned()
    else {
        session.reset();
        return Err(RecruitError::stale("candidate", candidate_ref.name));
    };

    // the workflow is over either way: reset before reporting the outcome
    let outcome = model.shortlist_candidate(&company.name, &job.title, live_candidate.clone());
    session.reset();
    outcome?;
    Ok(CommandResult::new(format!(
        "Successfully shortlisted {} for {} at {}",
        live_candidate.name, job.title, company.name
    )))
}

// ============================================================================
// List rendering
// ============================================================================

fn render_candidates(candidates: &[&Candidate]) -> String {
    if candidates.is_empty() {
        return "  (no candidates)".to_string();
    }
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_companies(companies: &[&Company]) -> String {
    if companies.is_empty() {
        return "  (no companies)".to_string();
    }
    companies
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_jobs(jobs: &[JobOffer]) -> String {
    if jobs.is_empty() {
        return "  (no job offers)".to_string();
    }
    jobs.iter()
        .enumerate()
        .map(|(i, j)| format!("  {}. {}", i + 1, j))
        .collect::<Vec<_>>()
        .join("\n")
}
