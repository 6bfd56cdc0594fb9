//! `carpark shell`: the interactive prompt.

use std::io::{self, IsTerminal};

use tracing::info;

use crate::{
    cli::SessionArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    session::{Session, build_service},
};

/// Read lot commands from stdin until EOF or `exit`.
///
/// The banner and prompt are only shown when stdin is a terminal, so piped
/// input produces nothing but replies.
pub fn execute(args: SessionArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_service(&args, &config)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !output.is_json();

    if interactive && !output.is_quiet() {
        output.header("Welcome to the Parking Lot System!")?;
        output.print("Type 'help' for commands, 'exit' to quit.")?;
    }

    let prompt = interactive.then_some(config.output.prompt.as_str());
    let mut session = Session::new(service, &output);
    session.drive(stdin.lock(), prompt)?;

    info!(
        occupied = ?session.service().occupied().ok(),
        "Shell session ended"
    );
    Ok(())
}
