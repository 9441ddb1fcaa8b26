//! Errors surfaced by a download pass. All are terminal; none are retried here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// The listing service failed.
    #[error("error fetching artifacts: {0:#}")]
    ListingFailed(#[source] anyhow::Error),

    /// Every listed artifact was expired (or the listing was empty).
    #[error("no valid artifacts found to download")]
    NoValidArtifacts,

    /// The interactive chooser returned an empty selection.
    #[error("no artifacts selected")]
    NoArtifactsSelected,

    /// The interactive chooser failed or returned an index it was not offered.
    #[error("could not prompt for artifacts: {0:#}")]
    PromptFailed(#[source] anyhow::Error),

    /// A destination computed from an artifact name escaped the destination root.
    #[error("error downloading {name}: would result in path traversal")]
    PathTraversal { name: String },

    /// The fetch service failed for one artifact; remaining fetches were not attempted.
    #[error("error downloading {name}: {source:#}")]
    FetchFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Valid artifacts existed but none satisfied the names or patterns.
    #[error("no artifact matches any of the names or patterns provided")]
    NoArtifactsMatched,
}

impl DownloadError {
    /// Artifact the error is about, for the kinds that name one.
    pub fn artifact_name(&self) -> Option<&str> {
        match self {
            DownloadError::PathTraversal { name } | DownloadError::FetchFailed { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}
