use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use recruit_application::{Logic, Model};
use recruit_core::book::{CandidateBook, CompanyBook};
use recruit_core::config::AppConfig;
use recruit_core::event::{AppEvent, EventBus, EventKind};
use recruit_core::prefs::UserPrefs;
use recruit_core::sample::{sample_candidate_book, sample_company_book};
use recruit_infrastructure::{RecruitPaths, StorageManager};
use recruit_infrastructure::prefs_storage;

#[derive(Parser)]
#[command(name = "recruit")]
#[command(about = "RecruitBook - record management for recruiters", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// REPL helper providing completion and hints for the top-level keywords.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let commands = [
            "add", "edit", "delete", "list", "find", "shortlist", "select", "confirm", "cancel",
            "help", "exit",
        ];
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for CliHelper {}
impl Validator for CliHelper {}

/// Reads the config file, falling back to defaults on a missing or malformed
/// file, and re-saves so a missing file (or new fields) are filled in.
fn init_config(path_override: Option<PathBuf>) -> AppConfig {
    let path = match path_override {
        Some(path) => path,
        None => match RecruitPaths::config_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{e}; using default config");
                return AppConfig::default();
            }
        },
    };

    let config = match prefs_storage::read_config(&path) {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            tracing::warn!("Config file at {} is not usable: {e}. Using default config", path.display());
            AppConfig::default()
        }
    };

    if let Err(e) = prefs_storage::save_config(&config, &path) {
        tracing::warn!("Failed to save config file: {e}");
    }
    config
}

/// Reads the preferences file the same way: default on absence or error,
/// then re-save.
fn init_prefs(path: &PathBuf) -> UserPrefs {
    let prefs = match prefs_storage::read_user_prefs(path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => UserPrefs::default(),
        Err(e) => {
            tracing::warn!("Prefs file at {} is not usable: {e}. Using default prefs", path.display());
            UserPrefs::default()
        }
    };
    if let Err(e) = prefs_storage::save_user_prefs(&prefs, path) {
        tracing::warn!("Failed to save prefs file: {e}");
    }
    prefs
}

/// Absent data file starts with sample data; a malformed or unreadable file
/// starts with an empty book so a typo in the file never loses the session.
fn init_books(storage: &StorageManager) -> (CandidateBook, CompanyBook) {
    let candidate_book = match storage.read_candidate_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            tracing::info!("Candidate data file not found. Starting with a sample candidate book");
            sample_candidate_book()
        }
        Err(e) => {
            tracing::warn!("Problem reading candidate data: {e}. Starting with an empty candidate book");
            CandidateBook::new()
        }
    };
    let company_book = match storage.read_company_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            tracing::info!("Company data file not found. Starting with a sample company book");
            sample_company_book()
        }
        Err(e) => {
            tracing::warn!("Problem reading company data: {e}. Starting with an empty company book");
            CompanyBook::new()
        }
    };
    (candidate_book, company_book)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Startup wiring =====
    let config = init_config(cli.config);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone())),
        )
        .init();
    tracing::info!("=============== [ Initializing {} ] ===============", config.app_title);

    let prefs = init_prefs(&config.user_prefs_file_path);
    let storage = Arc::new(StorageManager::from_prefs(
        &prefs,
        config.user_prefs_file_path.clone(),
    ));

    let bus = Arc::new(EventBus::new());
    storage.subscribe(&bus);
    bus.register(EventKind::DataSavingFailed, |event| {
        if let AppEvent::DataSavingFailed { operation, cause } = event {
            eprintln!(
                "{}",
                format!("Could not save data ({operation}): {cause}").red()
            );
        }
        Ok(())
    });

    let (candidate_book, company_book) = init_books(&storage);
    let model = Model::new(candidate_book, company_book, prefs.clone(), Arc::clone(&bus));
    let mut logic = Logic::new(model);

    // ===== REPL =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", format!("=== {} ===", config.app_title).bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for the command list, 'shortlist' to start a guided shortlist, or 'exit' to quit."
            .bright_black()
    );
    println!();

    loop {
        let readline = rl.readline(logic.session().prompt());

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match logic.execute(trimmed) {
                    Ok(result) => {
                        println!("{}", result.message.bright_blue());
                        if result.exit {
                            break;
                        }
                    }
                    Err(e) => {
                        println!("{}", e.to_string().red());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'exit' to quit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // persist preferences on the way out, through the same bus path as the books
    tracing::info!("=============== [ Stopping {} ] ===============", config.app_title);
    bus.publish(&AppEvent::PreferencesChanged(logic.model().prefs().clone()));

    Ok(())
}
