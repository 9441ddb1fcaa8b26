//! `adl list [run-id]` – show the artifacts of a run.

use adl_core::artifact::ArtifactDescriptor;
use adl_core::config::AdlConfig;
use adl_core::platform::Platform;
use adl_core::remote::HttpPlatform;
use anyhow::{Context, Result};

use super::resolve_repo;

fn format_rows(artifacts: &[ArtifactDescriptor], all: bool) -> Vec<String> {
    artifacts
        .iter()
        .filter(|a| all || !a.expired)
        .map(|a| {
            let state = if a.expired { "expired" } else { "" };
            format!("{:<40} {:>12} {}", a.name, a.size_in_bytes, state)
                .trim_end()
                .to_string()
        })
        .collect()
}

pub async fn run_list(
    cfg: &AdlConfig,
    run_id: Option<String>,
    repo: Option<&str>,
    all: bool,
) -> Result<()> {
    let platform = HttpPlatform::new(cfg, resolve_repo(cfg, repo)?);
    let artifacts = tokio::task::spawn_blocking(move || platform.list(run_id.as_deref()))
        .await
        .context("list task join")?
        .context("error fetching artifacts")?;

    let rows = format_rows(&artifacts, all);
    if rows.is_empty() {
        println!("No artifacts found.");
    } else {
        println!("{:<40} {:>12} {}", "NAME", "SIZE", "STATE");
        for row in rows {
            println!("{}", row);
        }
    }
    Ok(())
}
