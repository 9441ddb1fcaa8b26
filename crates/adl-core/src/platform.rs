//! Capabilities the engine consumes. The engine never knows how artifacts are
//! listed, transferred, or chosen; it only depends on these traits.

use anyhow::Result;
use std::path::Path;

use crate::artifact::ArtifactDescriptor;

/// Listing and fetch service for build artifacts.
pub trait Platform {
    /// Lists artifacts for `run_id`, or the repository's latest artifacts when `None`.
    /// May include expired entries.
    fn list(&self, run_id: Option<&str>) -> Result<Vec<ArtifactDescriptor>>;

    /// Materializes the artifact's contents under `dir`, creating it as needed.
    fn download(&self, artifact: &ArtifactDescriptor, dir: &Path) -> Result<()>;
}

/// Interactive multi-choice prompt.
pub trait Chooser {
    /// Returns the indices (into `options`) the user picked; may be empty.
    fn choose(&self, label: &str, options: &[String]) -> Result<Vec<usize>>;
}
