use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;

mod app;
mod config;
mod directory;
mod logging;
mod notifications;
mod scheduling;
mod types;
mod ui;

use app::App;
use config::Config;
use directory::{Directory, FileDirectory, MockDirectory};
use types::filter_candidates;

#[derive(Parser)]
#[command(name = "hirepipe")]
#[command(about = "Terminal dashboard for the candidate recruiting pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Roster file (TOML, JSON or YAML) to use instead of the built-in data
    #[arg(long)]
    roster: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates, optionally filtered
    Candidates {
        /// Case-insensitive match on name, email or position
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List team members with availability
    Team,

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(roster) = cli.roster {
        config.data.roster = Some(roster);
    }

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let directory = open_directory(&config)?;

    match cli.command {
        Some(Commands::Candidates { query }) => {
            cmd_candidates(directory.as_ref(), query.as_deref().unwrap_or(""))?;
        }
        Some(Commands::Team) => {
            cmd_team(directory.as_ref())?;
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        None => {
            run_tui(config, directory.as_ref(), logging_handle.log_file_path)?;
        }
    }

    Ok(())
}

/// Roster file when configured, built-in fixtures otherwise
fn open_directory(config: &Config) -> Result<Box<dyn Directory>> {
    match config.roster_path() {
        Some(path) => {
            let directory = FileDirectory::load(&path)
                .with_context(|| format!("Failed to open roster {}", path.display()))?;
            Ok(Box::new(directory))
        }
        None => Ok(Box::new(MockDirectory::new())),
    }
}

fn run_tui(config: Config, directory: &dyn Directory, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config, directory)?;
    let result = app.run();

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_candidates(directory: &dyn Directory, query: &str) -> Result<()> {
    print!("{}", format_candidates(directory, query)?);
    Ok(())
}

fn format_candidates(directory: &dyn Directory, query: &str) -> Result<String> {
    let candidates = directory.list_candidates()?;
    let matches = filter_candidates(&candidates, query);

    let mut out = String::new();
    if matches.is_empty() {
        writeln!(out, "No candidates found matching your search.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "Candidates ({} of {}, source: {})",
        matches.len(),
        candidates.len(),
        directory.source_name()
    )?;
    writeln!(out, "{}", "─".repeat(96))?;

    for c in matches {
        writeln!(
            out,
            "{:>3}  {:<18} {:<28} {:<17} {:<19} {}",
            c.id,
            c.name,
            c.position,
            c.status.label(),
            c.stage.label(),
            c.location
        )?;
    }

    Ok(out)
}

fn cmd_team(directory: &dyn Directory) -> Result<()> {
    print!("{}", format_team(directory)?);
    Ok(())
}

fn format_team(directory: &dyn Directory) -> Result<String> {
    let team = directory.list_team_members()?;

    let mut out = String::new();
    writeln!(out, "Team ({} members)", team.len())?;
    writeln!(out, "{}", "─".repeat(72))?;

    for m in &team {
        let availability = if m.available { "available" } else { "busy" };
        let calendar = if m.calendar_access {
            ""
        } else {
            "  (no calendar access)"
        };
        writeln!(
            out,
            "{:>3}  {:<16} {:<28} {}{}",
            m.id, m.name, m.designation, availability, calendar
        )?;
    }

    Ok(out)
}
