use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::catalog::Archive;
use crate::render::timestamps::format_list_date;
use crate::server::{DEFAULT_PORT, run_server};
use crate::utils::{format_path_with_tilde, get_claude_dir};

#[derive(Parser)]
#[command(name = "claude-history-viewer")]
#[command(version = "0.1.0")]
#[command(about = "View Claude Code conversation history in the browser", long_about = None)]
pub struct Cli {
    /// Port to run the server on; the next free port is used if it is taken
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Claude directory to read (defaults to ~/.claude)
    #[arg(long, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the history viewer (default)
    Serve,
    /// Show statistics about the history
    Stats,
}

/// Settings for one run, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub claude_dir: PathBuf,
    pub port: u16,
}

impl ViewerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let claude_dir = match &cli.claude_dir {
            Some(dir) => dir.clone(),
            None => get_claude_dir()?,
        };
        Ok(Self { claude_dir, port: cli.port })
    }

    pub fn archive(&self) -> Archive {
        Archive::from_claude_dir(&self.claude_dir)
    }
}

/// Priority: `--verbose` > `RUST_LOG` > default (info)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("claude_history_viewer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ViewerConfig::from_cli(&cli)?;

    match &cli.command {
        Some(Commands::Stats) => show_stats(&config)?,
        Some(Commands::Serve) | None => run_server(config.archive(), config.port)?,
    }

    Ok(())
}

fn show_stats(config: &ViewerConfig) -> Result<()> {
    let archive = config.archive();
    let projects = archive.list_projects()?;

    let mut conversation_count = 0;
    let mut message_count = 0;
    let mut newest: Option<String> = None;

    for project in &projects {
        let conversations = archive.list_conversations(&project.folder)?;
        for conversation in &conversations {
            match archive.count_messages(&project.folder, &conversation.file_id) {
                Ok(count) => message_count += count,
                Err(e) => warn!(file = %conversation.file, error = %e, "skipping unreadable transcript"),
            }
            if newest.as_deref().is_none_or(|n| conversation.sort_timestamp.as_str() > n) {
                newest = Some(conversation.sort_timestamp.clone());
            }
        }
        conversation_count += conversations.len();
    }

    println!("Claude Code History Statistics");
    println!("================================");
    println!("Projects: {}", projects.len());
    println!("Conversations: {}", conversation_count);
    println!("Messages: {}", message_count);
    println!();
    println!("Claude directory: {}", format_path_with_tilde(&config.claude_dir));

    if let Some(newest) = newest.filter(|n| !n.is_empty()) {
        println!("Newest conversation: {}", format_list_date(&newest));
    }

    Ok(())
}
