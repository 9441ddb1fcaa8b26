//! ZIP extraction for downloaded artifact archives.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Extracts every entry of the ZIP at `archive_path` under `dest`.
///
/// Entries whose path would leave `dest` (absolute or `..`) are skipped.
/// Returns the number of files written.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path)
        .with_context(|| format!("open {}", archive_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("read ZIP archive {}", archive_path.display()))?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("read entry {} of {}", index, archive_path.display()))?;
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            tracing::warn!(entry = entry.name(), "skipping archive entry with unsafe path");
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("create directory {}", out_path.display()))?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let mut out = File::create(&out_path)
            .with_context(|| format!("create {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("extract {}", out_path.display()))?;
        apply_mode(&out, entry.unix_mode(), &out_path)?;
        written += 1;
    }
    Ok(written)
}

/// Restores the permission bits stored in the archive (setuid/setgid dropped).
#[cfg(unix)]
fn apply_mode(out: &File, mode: Option<u32>, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return Ok(());
    };
    out.set_permissions(fs::Permissions::from_mode(mode & 0o777))
        .with_context(|| format!("set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn apply_mode(_out: &File, _mode: Option<u32>, _path: &Path) -> Result<()> {
    Ok(())
}
