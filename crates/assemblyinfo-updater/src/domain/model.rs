//! Domain models for versions and assembly declarations.

use std::fmt;
use std::path::PathBuf;

/// File name the locator selects.
pub const METADATA_FILE_NAME: &str = "AssemblyInfo.cs";

/// Opaque version token inserted verbatim into declaration lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version(String);

impl Version {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Assembly attribute lines the rewriter knows how to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    AssemblyVersion,
    AssemblyFileVersion,
}

impl Declaration {
    /// Classification order; the first matching prefix wins.
    pub const ALL: [Declaration; 2] = [
        Declaration::AssemblyVersion,
        Declaration::AssemblyFileVersion,
    ];

    pub fn attribute(&self) -> &'static str {
        match self {
            Declaration::AssemblyVersion => "AssemblyVersion",
            Declaration::AssemblyFileVersion => "AssemblyFileVersion",
        }
    }

    /// Prefix a line must start with (after leading whitespace) to match.
    pub fn prefix(&self) -> &'static str {
        match self {
            Declaration::AssemblyVersion => "[assembly: AssemblyVersion(",
            Declaration::AssemblyFileVersion => "[assembly: AssemblyFileVersion(",
        }
    }

    /// Classify a single line, if it is a declaration line.
    pub fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        Self::ALL
            .into_iter()
            .find(|decl| trimmed.starts_with(decl.prefix()))
    }

    /// Canonical declaration line carrying `version`.
    pub fn render(&self, version: &Version) -> String {
        format!("[assembly: {}(\"{}\")]", self.attribute(), version)
    }
}

/// Outcome of rewriting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub assembly_version_lines: usize,
    pub file_version_lines: usize,
}

impl RewriteReport {
    pub fn replaced(&self) -> usize {
        self.assembly_version_lines + self.file_version_lines
    }
}
