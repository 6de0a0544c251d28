use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use assemblyinfo_updater::app::update;
use assemblyinfo_updater::cli::{Cli, Invocation};
use assemblyinfo_updater::domain::errors::UpdaterError;

fn main() -> Result<ExitCode> {
    assemblyinfo_updater::init();

    let config = match Cli::parse_invocation(std::env::args_os()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_plain(&Cli::help_text())?;
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Invocation::Version) => {
            print_plain(&Cli::version_text())?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            print_plain(&format!("Error: {err}\n\n{}", Cli::help_text()))?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    match update::run(&config) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err @ UpdaterError::Filesystem { .. }) => {
            tracing::error!("An error occurred while trying to find AssemblyInfo.cs files: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            tracing::error!(
                "An error occurred while trying to update version in AssemblyInfo.cs files: {err}"
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_plain(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end()).context("failed to write to stdout")?;
    Ok(())
}
