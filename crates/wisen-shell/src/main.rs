//! wisen - interactive shell for the Wisen portfolio site.
//!
//! Each line typed at the prompt is one user event, handled to completion
//! before the next one is read.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use wisen_application::Site;
use wisen_core::generation::DescriptionGenerator;
use wisen_core::storage::DurableStorage;
use wisen_infrastructure::{ConfigService, FileStorage, SecretService, WisenPaths};
use wisen_interaction::GeminiDescriptionGenerator;

mod command;
mod handler;
mod helper;

use handler::Flow;
use helper::ShellHelper;

#[derive(Parser)]
#[command(name = "wisen")]
#[command(about = "Wisen portfolio site shell", long_about = None)]
struct Cli {
    /// Directory holding config.toml, secret.json, state.toml and logs/
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = WisenPaths::new(cli.config_dir.as_deref());

    let _guard = init_tracing(&paths, &cli.log_level)?;
    tracing::info!("[Bootstrap] Starting wisen shell");

    let config = ConfigService::new(paths.config_file()?).load();
    let storage: Arc<dyn DurableStorage> = Arc::new(FileStorage::new(paths.state_file()?));

    let fallback_model = config.generation.model.clone();
    let generator: Option<Arc<dyn DescriptionGenerator>> =
        SecretService::new(paths.secret_file()?)
            .gemini_credentials()
            .map(|credentials| {
                let generator = GeminiDescriptionGenerator::from_config(
                    credentials,
                    Some(fallback_model.as_str()),
                );
                tracing::info!("[Bootstrap] Gemini generator enabled ({})", generator.model());
                Arc::new(generator) as Arc<dyn DescriptionGenerator>
            });
    if generator.is_none() {
        tracing::info!("[Bootstrap] No Gemini API key, descriptions use the fallback text");
    }

    let mut site = Site::start(config, storage, generator).await;
    run_repl(&mut site).await
}

/// Sends log output to a daily rolling file so it does not interleave with
/// the prompt.
fn init_tracing(paths: &WisenPaths, level: &str) -> Result<WorkerGuard> {
    let logs_dir = paths.logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "wisen.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}

async fn run_repl(site: &mut Site) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", "=== Wisen ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/home', '/portfolio', '/help' for all commands, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let outcome = match command::parse(trimmed) {
                    Ok(command) => handler::handle(site, command).await,
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(Flow::Quit) => {
                        println!("{}", "Até logo!".bright_green());
                        break;
                    }
                    Ok(Flow::Continue) => {}
                    Err(e) => {
                        tracing::debug!("[Shell] Command failed: {}", e);
                        eprintln!("{}", format!("Error: {e}").red());
                    }
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
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
