//! Sequential fetch of resolved targets. All or nothing: the first failure stops the run.

use crate::artifact::ResolvedTarget;
use crate::error::DownloadError;
use crate::platform::Platform;

/// Fetches each target in order and returns how many were retrieved.
///
/// Stops at the first failure; later targets are not attempted and nothing is retried.
pub fn fetch_all(platform: &dyn Platform, targets: &[ResolvedTarget]) -> Result<usize, DownloadError> {
    let mut fetched = 0;
    for target in targets {
        let name = &target.descriptor.name;
        tracing::debug!(name = %name, dir = %target.destination.display(), "fetching artifact");
        platform
            .download(&target.descriptor, &target.destination)
            .map_err(|source| DownloadError::FetchFailed {
                name: name.clone(),
                source,
            })?;
        tracing::info!(name = %name, dir = %target.destination.display(), "artifact downloaded");
        fetched += 1;
    }
    Ok(fetched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{artifact, FakePlatform};
    use std::path::PathBuf;

    fn target(name: &str, dir: &str) -> ResolvedTarget {
        ResolvedTarget {
            descriptor: artifact(name),
            destination: PathBuf::from(dir),
        }
    }

    #[test]
    fn fetches_in_order() {
        let platform = FakePlatform::new(vec![]);
        let targets = [target("a", "/dl/a"), target("c", "/dl/c")];
        assert_eq!(fetch_all(&platform, &targets).unwrap(), 2);
        assert_eq!(
            platform.downloads(),
            [
                ("a".to_string(), PathBuf::from("/dl/a")),
                ("c".to_string(), PathBuf::from("/dl/c")),
            ]
        );
    }

    #[test]
    fn first_failure_stops_the_run() {
        let platform = FakePlatform::new(vec![]).failing_on("b");
        let targets = [target("a", "/dl/a"), target("b", "/dl/b"), target("c", "/dl/c")];
        let err = fetch_all(&platform, &targets).unwrap_err();
        assert_eq!(err.to_string(), "error downloading b: HTTP 404");
        assert_eq!(err.artifact_name(), Some("b"));
        let attempted: Vec<String> = platform.downloads().into_iter().map(|(n, _)| n).collect();
        assert_eq!(attempted, ["a", "b"]);
    }

    #[test]
    fn nothing_to_fetch() {
        let platform = FakePlatform::new(vec![]);
        assert_eq!(fetch_all(&platform, &[]).unwrap(), 0);
    }
}
