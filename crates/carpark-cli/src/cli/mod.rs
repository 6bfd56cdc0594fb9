//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No lot logic lives here.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub mod line;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "carpark",
    bin_name = "carpark",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Parking lot manager with first-fit slot allocation",
    long_about = "carpark keeps a fixed-capacity parking lot in memory and \
                  answers commands from an interactive prompt or a file.",
    after_help = "EXAMPLES:\n\
        \x20 carpark                       # interactive prompt\n\
        \x20 carpark shell --capacity 6\n\
        \x20 carpark run commands.txt --output-format json\n\
        \x20 carpark completions bash > /usr/share/bash-completion/completions/carpark",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.  Defaults to `shell`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read lot commands interactively from stdin.
    #[command(
        visible_alias = "sh",
        about = "Start the interactive prompt (default)",
        after_help = "EXAMPLES:\n\
            \x20 carpark shell\n\
            \x20 carpark shell --capacity 6 --vehicle-type Mobil --vehicle-type Motor"
    )]
    Shell(SessionArgs),

    /// Execute lot commands from a file.
    #[command(
        about = "Run the commands in a file",
        after_help = "EXAMPLES:\n\
            \x20 carpark run commands.txt\n\
            \x20 carpark run commands.txt --output-format json"
    )]
    Run(RunArgs),

    /// Initialise a carpark configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 carpark init                       # default location\n\
            \x20 carpark init --path ./carpark.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 carpark completions bash > ~/.local/share/bash-completion/completions/carpark\n\
            \x20 carpark completions zsh  > ~/.zfunc/_carpark\n\
            \x20 carpark completions fish > ~/.config/fish/completions/carpark.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 carpark config get lot.vehicle_types\n\
            \x20 carpark config list\n\
            \x20 carpark config path"
    )]
    Config(ConfigCommands),
}

// ── shell / run ───────────────────────────────────────────────────────────────

/// Lot settings that override the config file for one session.
#[derive(Debug, Default, Args)]
pub struct SessionArgs {
    /// Create the lot with this many slots before reading commands.
    #[arg(
        long = "capacity",
        value_name = "SLOTS",
        help = "Create a lot with this many slots at startup"
    )]
    pub capacity: Option<NonZeroUsize>,

    /// Allowed vehicle type; repeat to allow several.
    #[arg(
        long = "vehicle-type",
        value_name = "TYPE",
        help = "Allowed vehicle type (repeatable)"
    )]
    pub vehicle_types: Vec<String>,
}

/// Arguments for `carpark run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// File with one lot command per line.
    #[arg(value_name = "FILE", help = "Command file to execute")]
    pub file: PathBuf,

    #[command(flatten)]
    pub session: SessionArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `carpark init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write here instead of the default config location.
    #[arg(long = "path", value_name = "FILE", help = "Where to write the config")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `carpark completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `carpark config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `lot.vehicle_types`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::global::OutputFormat;
    use clap::Parser;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::parse_from(["carpark"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_shell_with_overrides() {
        let cli = Cli::parse_from([
            "carpark",
            "shell",
            "--capacity",
            "6",
            "--vehicle-type",
            "Mobil",
            "--vehicle-type",
            "Bus",
        ]);
        let Some(Commands::Shell(args)) = cli.command else {
            panic!("expected Shell command");
        };
        assert_eq!(args.capacity.map(NonZeroUsize::get), Some(6));
        assert_eq!(args.vehicle_types, ["Mobil", "Bus"]);
    }

    #[test]
    fn zero_capacity_rejected() {
        let result = Cli::try_parse_from(["carpark", "shell", "--capacity", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_run_command() {
        let cli = Cli::parse_from(["carpark", "run", "cmds.txt", "--output-format", "json"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected Run command");
        };
        assert_eq!(args.file, PathBuf::from("cmds.txt"));
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["carpark", "--quiet", "--verbose", "shell"]);
        assert!(result.is_err());
    }
}
