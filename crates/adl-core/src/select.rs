//! Selection resolver: turns a listing plus criteria (or a prompt answer) into
//! the ordered list of artifacts to fetch and where each one goes.

use indexmap::IndexSet;
use std::collections::HashSet;
use std::path::Path;

use crate::artifact::{ArtifactDescriptor, ResolvedTarget, SelectionCriteria};
use crate::error::DownloadError;
use crate::matcher::{matches_name, matches_pattern};
use crate::path_guard::is_descendant;
use crate::placement::requires_isolation;
use crate::platform::Chooser;

/// Most names offered by the interactive prompt. Names past the cap cannot be
/// picked interactively; pass `--name`/`--pattern` to reach them.
pub const MAX_PROMPT_OPTIONS: usize = 10;

pub const PROMPT_LABEL: &str = "Select artifacts to download:";

/// Distinct names of `artifacts` in first-appearance order, capped at [`MAX_PROMPT_OPTIONS`].
pub fn prompt_candidates<'a, I>(artifacts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ArtifactDescriptor>,
{
    let names: IndexSet<&str> = artifacts.into_iter().map(|a| a.name.as_str()).collect();
    if names.len() > MAX_PROMPT_OPTIONS {
        tracing::debug!(
            total = names.len(),
            "offering only the first {} artifact names",
            MAX_PROMPT_OPTIONS
        );
    }
    names
        .into_iter()
        .take(MAX_PROMPT_OPTIONS)
        .map(str::to_string)
        .collect()
}

/// Asks `chooser` to pick among `candidates` and returns the picks as explicit names.
pub fn prompt_selection(
    chooser: &dyn Chooser,
    candidates: &[String],
) -> Result<SelectionCriteria, DownloadError> {
    let picked = chooser
        .choose(PROMPT_LABEL, candidates)
        .map_err(DownloadError::PromptFailed)?;

    let mut names = IndexSet::with_capacity(picked.len());
    for index in picked {
        let name = candidates.get(index).ok_or_else(|| {
            DownloadError::PromptFailed(anyhow::anyhow!(
                "selection index {} out of range ({} options)",
                index,
                candidates.len()
            ))
        })?;
        names.insert(name.clone());
    }
    if names.is_empty() {
        return Err(DownloadError::NoArtifactsSelected);
    }
    Ok(SelectionCriteria {
        names,
        patterns: IndexSet::new(),
    })
}

/// True if `name` is wanted under `criteria`. Empty criteria want everything.
pub fn is_wanted(criteria: &SelectionCriteria, name: &str) -> bool {
    criteria.is_empty()
        || matches_name(&criteria.names, name)
        || matches_pattern(&criteria.patterns, name)
}

/// Resolves which artifacts to fetch and their destinations, in listing order.
///
/// Expired artifacts are dropped first. When `chooser` is given and `criteria`
/// is empty, the user's picks become the criteria. The first non-expired
/// descriptor for each name wins; later ones with the same name are skipped.
/// Any destination outside `destination_root` aborts the whole pass.
pub fn resolve(
    artifacts: &[ArtifactDescriptor],
    criteria: &SelectionCriteria,
    destination_root: &Path,
    chooser: Option<&dyn Chooser>,
) -> Result<Vec<ResolvedTarget>, DownloadError> {
    let valid: Vec<&ArtifactDescriptor> = artifacts.iter().filter(|a| !a.expired).collect();
    if valid.is_empty() {
        return Err(DownloadError::NoValidArtifacts);
    }

    let prompted;
    let criteria = match chooser {
        Some(chooser) if criteria.is_empty() => {
            let candidates = prompt_candidates(valid.iter().copied());
            prompted = prompt_selection(chooser, &candidates)?;
            &prompted
        }
        _ => criteria,
    };

    let isolate = requires_isolation(criteria);
    let mut downloaded: HashSet<&str> = HashSet::new();
    let mut targets = Vec::new();

    for artifact in valid {
        if downloaded.contains(artifact.name.as_str()) {
            tracing::debug!(name = %artifact.name, "skipping duplicate artifact name");
            continue;
        }
        if !is_wanted(criteria, &artifact.name) {
            continue;
        }

        let destination = if isolate {
            destination_root.join(&artifact.name)
        } else {
            destination_root.to_path_buf()
        };
        if !is_descendant(&destination, destination_root) {
            return Err(DownloadError::PathTraversal {
                name: artifact.name.clone(),
            });
        }

        tracing::debug!(
            name = %artifact.name,
            destination = %destination.display(),
            "artifact selected"
        );
        downloaded.insert(artifact.name.as_str());
        targets.push(ResolvedTarget {
            descriptor: artifact.clone(),
            destination,
        });
    }

    if targets.is_empty() {
        return Err(DownloadError::NoArtifactsMatched);
    }
    Ok(targets)
}
