//! Placement policy: one directory per artifact, or flatten into the root.

use crate::artifact::SelectionCriteria;

/// Returns true when each artifact must land in its own `<root>/<name>` directory.
///
/// Only a single explicit name with no patterns may be flattened into the root;
/// patterns, download-everything, and multiple names can all yield several
/// artifacts whose files would collide.
pub fn requires_isolation(criteria: &SelectionCriteria) -> bool {
    if !criteria.patterns.is_empty() {
        return true;
    }
    criteria.names.len() != 1
}
