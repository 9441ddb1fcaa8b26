//! Destination containment check.
//!
//! Artifact names come from a remote service and end up joined onto the
//! destination root, so every computed destination is checked lexically
//! before any bytes are written.

use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path: drops `.` segments and folds `name/..` pairs.
///
/// `..` directly under the filesystem root is discarded; a leading `..` on a
/// relative path is kept. The filesystem is never consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// True if `candidate` equals `root` or is nested under it, after normalizing both.
pub fn is_descendant(candidate: &Path, root: &Path) -> bool {
    let candidate = normalize(candidate);
    let root = normalize(root);
    match candidate.strip_prefix(&root) {
        Ok(rest) => !rest
            .components()
            .any(|c| matches!(c, Component::ParentDir)),
        Err(_) => false,
    }
}
