//! CLI for ADL, the build artifact downloader.

mod commands;
mod prompt;

use adl_core::config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_completions, run_download, run_list};

/// Top-level CLI for ADL.
#[derive(Debug, Parser)]
#[command(name = "adl")]
#[command(about = "ADL: download artifacts generated by a workflow run", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download artifacts generated by a workflow run.
    ///
    /// Each artifact is extracted into its own directory named after the artifact.
    /// If exactly one name is given, it is extracted straight into the destination
    /// directory. Without a run ID, names, or patterns, artifacts are picked
    /// interactively when running in a terminal.
    Download {
        /// Workflow run ID; omit to use the repository's latest artifacts.
        run_id: Option<String>,

        /// The directory to download artifacts into.
        #[arg(short = 'D', long = "dir", value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Download artifacts that match any of the given names.
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Download artifacts that match a glob pattern.
        #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
        patterns: Vec<String>,

        /// Repository as OWNER/REPO (overrides `repo` in config.toml).
        #[arg(short = 'R', long, value_name = "OWNER/REPO")]
        repo: Option<String>,
    },

    /// List artifacts of a workflow run.
    List {
        /// Workflow run ID; omit to list the repository's latest artifacts.
        run_id: Option<String>,

        /// Repository as OWNER/REPO (overrides `repo` in config.toml).
        #[arg(short = 'R', long, value_name = "OWNER/REPO")]
        repo: Option<String>,

        /// Include expired artifacts.
        #[arg(long)]
        all: bool,
    },

    /// Print a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download {
                run_id,
                dir,
                names,
                patterns,
                repo,
            } => run_download(&cfg, run_id, dir, names, patterns, repo.as_deref()).await?,
            CliCommand::List { run_id, repo, all } => {
                run_list(&cfg, run_id, repo.as_deref(), all).await?
            }
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
