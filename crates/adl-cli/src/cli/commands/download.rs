//! `adl download [run-id]` – select artifacts and extract them under a directory.

use adl_core::artifact::SelectionCriteria;
use adl_core::config::AdlConfig;
use adl_core::platform::Chooser;
use adl_core::remote::HttpPlatform;
use adl_core::run::{self, DownloadOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;

use super::resolve_repo;
use crate::cli::prompt::{self, TerminalChooser};

/// Prompting happens only when nothing narrows the selection and a terminal is attached.
fn wants_prompt(run_id: Option<&str>, criteria: &SelectionCriteria, terminal: bool) -> bool {
    run_id.is_none() && criteria.is_empty() && terminal
}

pub async fn run_download(
    cfg: &AdlConfig,
    run_id: Option<String>,
    dir: Option<PathBuf>,
    names: Vec<String>,
    patterns: Vec<String>,
    repo: Option<&str>,
) -> Result<()> {
    let repo = resolve_repo(cfg, repo)?;
    let criteria = SelectionCriteria::new(names, patterns);
    let interactive = wants_prompt(run_id.as_deref(), &criteria, prompt::can_prompt());
    let opts = DownloadOptions {
        run_id,
        destination_dir: dir
            .or_else(|| cfg.download_dir.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        criteria,
    };
    tracing::info!(
        repo = %repo,
        run_id = opts.run_id.as_deref().unwrap_or("<latest>"),
        dir = %opts.destination_dir.display(),
        interactive,
        "download requested"
    );

    let platform = HttpPlatform::new(cfg, repo);
    let destination = opts.destination_dir.clone();
    let count = tokio::task::spawn_blocking(move || {
        let terminal = TerminalChooser;
        let chooser: Option<&dyn Chooser> = if interactive { Some(&terminal) } else { None };
        run::run_download(&platform, &opts, chooser)
    })
    .await
    .context("download task join")??;

    println!(
        "Downloaded {} artifact(s) to {}",
        count,
        destination.display()
    );
    Ok(())
}
