//! Command-line argument handling.
//!
//! Raw arguments follow a loose `<folder> [--flag value]...` convention: flag
//! names are matched case-insensitively and unknown flags are ignored. They
//! are normalized into a canonical argument vector which `clap` then parses
//! into [`Cli`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::domain::errors::UpdaterError;
use crate::domain::model::Version;
use crate::infra::config::UpdateConfig;

const SET_VERSION_FLAG: &str = "--setversion";

const EXAMPLES: &str = "\
Examples:
  assemblyinfo-updater ./src/MyApp --setversion 0.7.0.0
  assemblyinfo-updater C:\\Code\\MyApp --setversion 0.7.0.0";

#[derive(Debug, Parser)]
#[command(
    name = "assemblyinfo-updater",
    version,
    about = "Updates the AssemblyInfo.cs files located in the specified directory and its children.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Sets AssemblyVersion and AssemblyFileVersion in every AssemblyInfo.cs found.
    #[arg(long = "setversion", value_name = "VERSION", allow_hyphen_values = true)]
    pub set_version: Option<String>,

    /// Folder to search for AssemblyInfo.cs files.
    #[arg(value_name = "FOLDER_PATH")]
    pub folder_path: PathBuf,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(UpdateConfig),
    Help,
    Version,
}

impl Cli {
    /// Parse a full argument vector (program name first).
    pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, UpdaterError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().skip(1).map(Into::into).collect();

        match raw.first().map(|arg| arg.to_str()) {
            None => {
                return Err(UpdaterError::InvalidArgument(
                    "The first parameter must be the folder path!".into(),
                ));
            }
            Some(Some("-h" | "--help")) => return Ok(Invocation::Help),
            Some(Some("-V" | "--version")) => return Ok(Invocation::Version),
            Some(_) => {}
        }

        let cli = Cli::try_parse_from(normalize(&raw)?)
            .map_err(|err| UpdaterError::InvalidArgument(err.to_string()))?;
        cli.into_config().map(Invocation::Run)
    }

    /// Validate the folder and build the run configuration.
    pub fn into_config(self) -> Result<UpdateConfig, UpdaterError> {
        if !self.folder_path.is_dir() {
            return Err(UpdaterError::PathNotFound(self.folder_path));
        }
        Ok(UpdateConfig::new(self.folder_path)
            .with_set_version(self.set_version.map(Version::from)))
    }

    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }

    pub fn version_text() -> String {
        Cli::command().render_version().to_string()
    }
}

/// Rebuild `raw` as `[program, --setversion <v>, --, <folder>]`.
///
/// Options are read in pairs after the folder path. A pair whose first token
/// does not start with `--` is skipped whole; the first `--setversion` wins.
/// The folder path is passed through untouched so non-UTF-8 names survive.
fn normalize(raw: &[OsString]) -> Result<Vec<OsString>, UpdaterError> {
    let mut set_version: Option<String> = None;
    for pair in raw[1..].chunks(2) {
        let Some(flag) = pair[0].to_str() else {
            continue;
        };
        if !flag.starts_with("--") {
            continue;
        }
        if !flag.eq_ignore_ascii_case(SET_VERSION_FLAG) {
            continue;
        }
        match pair.get(1) {
            Some(value) => {
                set_version.get_or_insert_with(|| value.to_string_lossy().into_owned());
            }
            None if set_version.is_none() => {
                return Err(UpdaterError::InvalidArgument(format!(
                    "{SET_VERSION_FLAG} requires a value"
                )));
            }
            None => {}
        }
    }

    let mut argv = vec![OsString::from(Cli::command().get_name())];
    if let Some(value) = set_version {
        argv.push(SET_VERSION_FLAG.into());
        argv.push(value.into());
    }
    argv.push("--".into());
    argv.push(raw[0].clone());
    Ok(argv)
}
