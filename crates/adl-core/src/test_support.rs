//! In-memory fakes for the platform and chooser capabilities.

use anyhow::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactDescriptor;
use crate::platform::{Chooser, Platform};

pub(crate) fn artifact(name: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::new(name, format!("https://artifacts.test/{name}/zip"))
}

pub(crate) fn expired(name: &str) -> ArtifactDescriptor {
    artifact(name).expired(true)
}

/// Chooser that returns a fixed answer and records every prompt it was shown.
pub(crate) struct FakeChooser {
    answer: std::result::Result<Vec<usize>, String>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeChooser {
    pub(crate) fn picking(indices: Vec<usize>) -> Self {
        Self {
            answer: Ok(indices),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl Chooser for FakeChooser {
    fn choose(&self, label: &str, options: &[String]) -> Result<Vec<usize>> {
        self.calls
            .borrow_mut()
            .push((label.to_string(), options.to_vec()));
        match &self.answer {
            Ok(indices) => Ok(indices.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

/// Platform serving a fixed listing and recording each download as (name, dir).
pub(crate) struct FakePlatform {
    listing: std::result::Result<Vec<ArtifactDescriptor>, String>,
    fail_on: Option<String>,
    downloads: RefCell<Vec<(String, PathBuf)>>,
}

impl FakePlatform {
    pub(crate) fn new(listing: Vec<ArtifactDescriptor>) -> Self {
        Self {
            listing: Ok(listing),
            fail_on: None,
            downloads: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn listing_error(message: &str) -> Self {
        Self {
            listing: Err(message.to_string()),
            fail_on: None,
            downloads: RefCell::new(Vec::new()),
        }
    }

    /// Makes the download of `name` fail.
    pub(crate) fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    pub(crate) fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.borrow().clone()
    }
}

impl Platform for FakePlatform {
    fn list(&self, _run_id: Option<&str>) -> Result<Vec<ArtifactDescriptor>> {
        match &self.listing {
            Ok(list) => Ok(list.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }

    fn download(&self, artifact: &ArtifactDescriptor, dir: &Path) -> Result<()> {
        self.downloads
            .borrow_mut()
            .push((artifact.name.clone(), dir.to_path_buf()));
        if self.fail_on.as_deref() == Some(artifact.name.as_str()) {
            anyhow::bail!("HTTP 404");
        }
        Ok(())
    }
}
