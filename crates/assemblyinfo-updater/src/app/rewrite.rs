//! Rewriting version declarations inside a single `AssemblyInfo.cs` file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::errors::UpdaterError;
use crate::domain::model::{Declaration, RewriteReport, Version};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Replace every `AssemblyVersion` and `AssemblyFileVersion` declaration in
/// `path` with the canonical line for `version`, then rewrite the file.
///
/// The file is truncated and written in place. A failure part way through the
/// write can leave it truncated; nothing is backed up.
pub fn set_version(path: &Path, version: &Version) -> Result<RewriteReport, UpdaterError> {
    let original = fs::read_to_string(path).map_err(|err| UpdaterError::io(path, err))?;

    let mut report = RewriteReport {
        path: path.to_path_buf(),
        assembly_version_lines: 0,
        file_version_lines: 0,
    };
    let lines: Vec<String> = split_lines(&original)
        .into_iter()
        .map(|line| match Declaration::classify(line) {
            Some(decl) => {
                match decl {
                    Declaration::AssemblyVersion => report.assembly_version_lines += 1,
                    Declaration::AssemblyFileVersion => report.file_version_lines += 1,
                }
                decl.render(version)
            }
            None => line.to_owned(),
        })
        .collect();

    write_lines(path, &lines).map_err(|err| UpdaterError::io(path, err))?;

    tracing::debug!(
        path = %path.display(),
        replaced = report.replaced(),
        "rewrote declarations"
    );
    Ok(report)
}

/// Split on `\r\n`, `\n`, or a lone `\r`. A trailing terminator does not
/// produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}
