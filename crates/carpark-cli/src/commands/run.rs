//! `carpark run`: execute a command file.

use std::fs::File;
use std::io::{BufReader, ErrorKind};

use tracing::info;

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    session::{Session, build_service},
};

/// Execute every line of `args.file` as a lot command.
///
/// A failing command does not stop the run; a missing file does.
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let file = File::open(&args.file).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::InputNotFound {
            path: args.file.clone(),
        },
        _ => CliError::IoError {
            message: format!("Failed to open '{}'", args.file.display()),
            source: e,
        },
    })?;

    info!(file = %args.file.display(), "Running command file");

    let service = build_service(&args.session, &config)?;
    let mut session = Session::new(service, &output);
    session.drive(BufReader::new(file), None)
}
