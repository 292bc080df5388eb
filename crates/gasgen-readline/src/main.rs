use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gasgen_application::{AssistantSession, CredentialGate, GenerationClient};
use gasgen_core::config::RootConfig;
use gasgen_core::secret::CredentialStore;
use gasgen_infrastructure::{ConfigService, FileCredentialStore, GasgenPaths};
use gasgen_interaction::GeminiApiAgent;

mod command;
mod helper;
mod render;
mod repl;

use helper::CliHelper;
use repl::Flow;

const DEFAULT_LOG_FILTER: &str = "gasgen=info";

/// Interactive Google Apps Script generator backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "gasgen", version, long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gemini model to use, overriding the config file
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Natural language for generated messages and explanations
    #[arg(long, value_name = "NAME")]
    language: Option<String>,

    /// Keep the API key in memory only
    #[arg(long)]
    no_persist: bool,
}

impl Args {
    fn apply(&self, mut config: RootConfig) -> RootConfig {
        if let Some(model) = &self.model {
            config.model_name = model.clone();
        }
        if let Some(language) = &self.language {
            config.output_language = language.clone();
        }
        if self.no_persist {
            config.persist_credential = false;
        }
        config
    }
}

/// Routes `tracing` output to a daily log file so the terminal stays clean.
fn init_logging(logs_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("cannot create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, "gasgen.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

fn build_session(paths: &GasgenPaths, config: &RootConfig) -> AssistantSession {
    let store: Option<Arc<dyn CredentialStore>> = if config.persist_credential {
        Some(Arc::new(FileCredentialStore::new(paths)))
    } else {
        None
    };
    let backend = Arc::new(GeminiApiAgent::from_config(config));
    let client = GenerationClient::new(backend, config.output_language.clone());
    AssistantSession::new(CredentialGate::new(store), client)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ===== Bootstrap =====
    let paths = GasgenPaths::platform_default().context("cannot resolve config directory")?;
    let _log_guard = match init_logging(&paths.logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", format!("Logging disabled: {e:#}").yellow());
            None
        }
    };

    let config_service = match &args.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new(&paths),
    };
    let config = args.apply(config_service.get_config());
    tracing::info!(
        "[Bootstrap] config={}, model={}, language={}, persist_credential={}",
        config_service.path().display(),
        config.model_name,
        config.output_language,
        config.persist_credential
    );

    let mut session = build_session(&paths, &config);
    let restored = session.restore_credential().await;

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::banner();
    if restored.valid {
        println!("{}", "Using the saved API key.".bright_black());
    }
    render::screen(&session);

    // ===== Main REPL Loop =====
    loop {
        let prompt = format!("{}> ", session.view().screen().title().to_lowercase());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Keep the API key out of the line history.
                if !trimmed.starts_with("/key") {
                    let _ = rl.add_history_entry(trimmed);
                }

                let command = match command::parse(trimmed) {
                    Ok(command) => command,
                    Err(message) => {
                        render::error(message);
                        continue;
                    }
                };

                if let Flow::Quit = repl::dispatch(&mut session, command).await {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!("Session ended after {} rounds", session.history().len());
    Ok(())
}
