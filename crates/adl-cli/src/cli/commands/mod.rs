//! CLI command handlers, one per file.

mod completions;
mod download;
mod list;

pub use completions::run_completions;
pub use download::run_download;
pub use list::run_list;

use adl_core::config::AdlConfig;
use adl_core::remote::RepoRef;
use anyhow::{Context, Result};

/// Repository from `--repo`, else from config.
pub(crate) fn resolve_repo(cfg: &AdlConfig, flag: Option<&str>) -> Result<RepoRef> {
    let raw = flag.or(cfg.repo.as_deref()).context(
        "no repository given; pass --repo OWNER/REPO or set `repo` in config.toml",
    )?;
    raw.parse()
}
