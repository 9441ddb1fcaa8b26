//! Artifact digest verification.
//!
//! Listings may carry a `sha256:<hex>` digest for each archive. The archive is
//! hashed after the transfer completes, before it is extracted.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Checks `path` against a digest of the form `sha256:<hex>`.
///
/// Digests using any other algorithm are not checked and pass with a debug log.
pub fn verify_digest(path: &Path, digest: &str) -> Result<()> {
    let Some((algo, expected)) = digest.split_once(':') else {
        anyhow::bail!("malformed digest {:?}", digest);
    };
    if !algo.eq_ignore_ascii_case("sha256") {
        tracing::debug!(algo, "skipping verification for unsupported digest");
        return Ok(());
    }
    let actual = sha256_path(path)?;
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        anyhow::bail!(
            "digest mismatch for {}: expected sha256:{}, got sha256:{}",
            path.display(),
            expected.trim(),
            actual
        );
    }
    Ok(())
}
