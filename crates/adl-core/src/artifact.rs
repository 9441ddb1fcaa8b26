//! Artifact descriptors as reported by the listing service, the user's
//! selection criteria, and the resolved (artifact, destination) pairs.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One artifact entry from a listing response. Several entries may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDescriptor {
    pub name: String,
    #[serde(default)]
    pub expired: bool,
    /// Opaque handle passed back to the fetch service (an archive URL for the HTTP platform).
    #[serde(rename = "archive_download_url")]
    pub download_url: String,
    #[serde(default)]
    pub size_in_bytes: u64,
    /// Optional content digest, e.g. `sha256:<hex>`.
    #[serde(default)]
    pub digest: Option<String>,
}

impl ArtifactDescriptor {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expired: false,
            download_url: download_url.into(),
            size_in_bytes: 0,
            digest: None,
        }
    }

    pub fn expired(mut self, expired: bool) -> Self {
        self.expired = expired;
        self
    }
}

/// Names and glob patterns requested by the user (or derived from the prompt).
///
/// Both empty means "every non-expired artifact". Duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub names: IndexSet<String>,
    pub patterns: IndexSet<String>,
}

impl SelectionCriteria {
    pub fn new<N, P>(names: N, patterns: P) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names<N>(names: N) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self::new(names, std::iter::empty::<String>())
    }

    pub fn patterns<P>(patterns: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self::new(std::iter::empty::<String>(), patterns)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}

/// An artifact bound to the directory it will be materialized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub descriptor: ArtifactDescriptor,
    pub destination: PathBuf,
}
