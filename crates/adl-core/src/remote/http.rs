//! Blocking GET via libcurl (the `curl` crate).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

const USER_AGENT: &str = concat!("adl/", env!("CARGO_PKG_VERSION"));
const API_ACCEPT: &str = "application/vnd.github+json";

pub(crate) struct HttpClient {
    pub(crate) token: Option<String>,
    pub(crate) connect_timeout: Duration,
    pub(crate) timeout: Duration,
}

impl HttpClient {
    fn easy(&self, url: &str, accept: &str) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        // Archive URLs redirect to blob storage; libcurl drops Authorization on cross-host hops.
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(USER_AGENT)?;

        let mut list = curl::easy::List::new();
        list.append(&format!("Accept: {}", accept))?;
        if let Some(token) = &self.token {
            list.append(&format!("Authorization: Bearer {}", token))?;
        }
        easy.http_headers(list)?;
        Ok(easy)
    }

    /// GETs `url` and returns the whole body.
    pub(crate) fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut easy = self.easy(url, API_ACCEPT)?;
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer
                .perform()
                .with_context(|| format!("GET {} failed", url))?;
        }
        check_status(&mut easy, url)?;
        Ok(body)
    }

    /// GETs `url` into a new file at `path`. Returns the number of bytes written.
    pub(crate) fn get_to_file(&self, url: &str, path: &Path) -> Result<u64> {
        let mut file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut easy = self.easy(url, "*/*")?;
        let mut written = 0u64;
        let mut write_err: Option<std::io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = write_err {
            return Err(e).with_context(|| format!("write {}", path.display()));
        }
        performed.with_context(|| format!("GET {} failed", url))?;
        check_status(&mut easy, url)?;
        file.flush()
            .with_context(|| format!("flush {}", path.display()))?;
        Ok(written)
    }
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    Ok(())
}
