//! Entry points for a full download pass: (list →) resolve → fetch.

use std::path::{Path, PathBuf};

use crate::artifact::{ArtifactDescriptor, SelectionCriteria};
use crate::error::DownloadError;
use crate::orchestrator::fetch_all;
use crate::platform::{Chooser, Platform};
use crate::select::resolve;

/// What to download and where.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Run to list artifacts for; `None` lists the repository's latest artifacts.
    pub run_id: Option<String>,
    pub destination_dir: PathBuf,
    pub criteria: SelectionCriteria,
}

/// Resolves an already-obtained listing and fetches the result.
///
/// Returns the number of artifacts placed. Resolution finishes before the first
/// fetch, so a resolution error means nothing was transferred.
pub fn download_artifacts(
    platform: &dyn Platform,
    artifacts: &[ArtifactDescriptor],
    criteria: &SelectionCriteria,
    destination_dir: &Path,
    chooser: Option<&dyn Chooser>,
) -> Result<usize, DownloadError> {
    let targets = resolve(artifacts, criteria, destination_dir, chooser)?;
    let fetched = fetch_all(platform, &targets)?;
    tracing::info!(
        count = fetched,
        dir = %destination_dir.display(),
        "download pass complete"
    );
    Ok(fetched)
}

/// Lists artifacts through `platform`, then runs [`download_artifacts`].
pub fn run_download(
    platform: &dyn Platform,
    opts: &DownloadOptions,
    chooser: Option<&dyn Chooser>,
) -> Result<usize, DownloadError> {
    let artifacts = platform
        .list(opts.run_id.as_deref())
        .map_err(DownloadError::ListingFailed)?;
    tracing::debug!(
        run_id = opts.run_id.as_deref().unwrap_or("<latest>"),
        count = artifacts.len(),
        "listed artifacts"
    );
    download_artifacts(
        platform,
        &artifacts,
        &opts.criteria,
        &opts.destination_dir,
        chooser,
    )
}
