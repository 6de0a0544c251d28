//! Run configuration assembled once from command-line arguments.

use std::path::{Path, PathBuf};

use crate::domain::model::Version;

/// Immutable inputs for one update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    root: PathBuf,
    recursive: bool,
    set_version: Option<Version>,
}

impl UpdateConfig {
    /// Recursive scan of `root` without rewriting anything.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            set_version: None,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_set_version(mut self, version: Option<Version>) -> Self {
        self.set_version = version;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Version to write, when a rewrite was requested.
    pub fn set_version(&self) -> Option<&Version> {
        self.set_version.as_ref()
    }
}
