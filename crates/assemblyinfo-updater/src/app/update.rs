//! Update runs: locate metadata files, then rewrite them one at a time.

use std::path::PathBuf;

use tracing::info;

use crate::app::locate::find_metadata_files;
use crate::app::rewrite::set_version;
use crate::domain::errors::UpdaterError;
use crate::domain::model::RewriteReport;
use crate::infra::config::UpdateConfig;

/// What a run located and rewrote.
#[derive(Debug, Default)]
pub struct UpdateSummary {
    pub files: Vec<PathBuf>,
    pub rewrites: Vec<RewriteReport>,
}

/// Locate every metadata file under the configured root and, when a version
/// was requested, rewrite each of them in traversal order.
///
/// Locating fails before anything is modified. A rewrite failure stops the
/// run; files rewritten before it keep their new content.
pub fn run(config: &UpdateConfig) -> Result<UpdateSummary, UpdaterError> {
    info!("Finding AssemblyInfo.cs files...");
    let files = find_metadata_files(config.root(), config.recursive())?;
    info!("Found {} AssemblyInfo.cs file(s).", files.len());

    let mut rewrites = Vec::new();
    if let Some(version) = config.set_version() {
        for path in &files {
            info!("Updating {}...", path.display());
            rewrites.push(set_version(path, version)?);
        }
    }

    info!("AssemblyInfo.cs files updated successfully.");
    Ok(UpdateSummary { files, rewrites })
}
