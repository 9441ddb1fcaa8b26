//! Listing endpoint URLs and response pages.

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use super::RepoRef;
use crate::artifact::ArtifactDescriptor;

/// One page of an artifact listing.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingPage {
    #[serde(default)]
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) artifacts: Vec<ArtifactDescriptor>,
}

pub(crate) fn parse_page(body: &[u8]) -> Result<ListingPage> {
    Ok(serde_json::from_slice(body)?)
}

/// Builds the listing URL for `page` (1-based). Without `run_id` the URL lists
/// the repository's artifacts across runs, newest first.
///
/// Path segments are percent-encoded, so a run id can't reshape the path.
pub fn listing_url(
    api_url: &str,
    repo: &RepoRef,
    run_id: Option<&str>,
    per_page: u32,
    page: u32,
) -> Result<Url> {
    let mut url = Url::parse(api_url).with_context(|| format!("invalid api_url {:?}", api_url))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("api_url cannot be a base URL: {}", api_url))?;
        segments
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.name.as_str(), "actions"]);
        if let Some(run_id) = run_id {
            segments.extend(["runs", run_id]);
        }
        segments.push("artifacts");
    }
    url.query_pairs_mut()
        .append_pair("per_page", &per_page.to_string())
        .append_pair("page", &page.to_string());
    Ok(url)
}
