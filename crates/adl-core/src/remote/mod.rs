//! HTTP listing and fetch service for GitHub-style artifact APIs.
//!
//! Lists `/repos/{owner}/{repo}/actions/[runs/{id}/]artifacts` page by page and
//! fetches each artifact's ZIP archive into its destination directory, verifying
//! the listed digest and extracting the archive in place. Runs on the calling
//! thread; call from `spawn_blocking` if used from async code.

mod archive;
mod http;
mod listing;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::artifact::ArtifactDescriptor;
use crate::checksum;
use crate::config::AdlConfig;
use crate::platform::Platform;

pub use archive::extract_zip;
pub use listing::listing_url;

use http::HttpClient;

/// Repository coordinates, written `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepoRef {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => anyhow::bail!("expected repository as OWNER/REPO, got {:?}", s),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Prefix of the temporary archive written next to the extracted files.
pub const ARCHIVE_PREFIX: &str = ".adl-";

/// [`Platform`] backed by the artifacts REST API.
pub struct HttpPlatform {
    api_url: String,
    repo: RepoRef,
    per_page: u32,
    http: HttpClient,
}

impl HttpPlatform {
    pub fn new(cfg: &AdlConfig, repo: RepoRef) -> Self {
        Self {
            api_url: cfg.api_url.clone(),
            repo,
            per_page: cfg.per_page.max(1),
            http: HttpClient {
                token: cfg.token(),
                connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                timeout: Duration::from_secs(cfg.timeout_secs),
            },
        }
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    fn fetch_and_extract(&self, artifact: &ArtifactDescriptor, archive: &Path, dir: &Path) -> Result<()> {
        let bytes = self.http.get_to_file(&artifact.download_url, archive)?;
        tracing::debug!(name = %artifact.name, bytes, "archive received");

        if let Some(digest) = &artifact.digest {
            checksum::verify_digest(archive, digest)?;
        }

        let files = extract_zip(archive, dir)?;
        tracing::debug!(name = %artifact.name, files, dir = %dir.display(), "archive extracted");
        Ok(())
    }
}

impl Platform for HttpPlatform {
    fn list(&self, run_id: Option<&str>) -> Result<Vec<ArtifactDescriptor>> {
        let mut artifacts = Vec::new();
        for page in 1u32.. {
            let url = listing_url(&self.api_url, &self.repo, run_id, self.per_page, page)?;
            let body = self.http.get_bytes(url.as_str())?;
            let parsed = listing::parse_page(&body)
                .with_context(|| format!("parse artifact listing from {}", url))?;

            let received = parsed.artifacts.len();
            artifacts.extend(parsed.artifacts);
            if received == 0 || artifacts.len() as u64 >= parsed.total_count {
                break;
            }
        }
        Ok(artifacts)
    }

    fn download(&self, artifact: &ArtifactDescriptor, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
        // Unique per call; never an existing file or an archive entry name.
        let archive = tempfile::Builder::new()
            .prefix(ARCHIVE_PREFIX)
            .suffix(".zip.part")
            .tempfile_in(dir)
            .with_context(|| format!("create temporary archive in {}", dir.display()))?
            .into_temp_path();

        let result = self.fetch_and_extract(artifact, &archive, dir);
        let path = archive.to_path_buf();
        match archive.close() {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), "could not remove archive: {}", e),
        }
        result
    }
}
