//! Grammar for one line of lot input.
//!
//! Each line is parsed with clap as if it were its own command line, with the
//! first word as the subcommand.  Command names are matched case-insensitively
//! by lowercasing the first word before clap sees it.

use std::num::NonZeroUsize;

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};

/// A single line of REPL input.
#[derive(Debug, Parser)]
#[command(
    name = "carpark",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true,
    help_template = "Commands:\n{subcommands}\n\nType 'exit' to quit."
)]
pub struct LotLine {
    #[command(subcommand)]
    pub command: LotCommand,
}

/// Commands understood at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum LotCommand {
    /// Create the lot, discarding any existing one.
    #[command(
        name = "create_parking_lot",
        override_usage = "create_parking_lot [CAPACITY]",
        after_help = "Example: create_parking_lot 6"
    )]
    CreateParkingLot { capacity: NonZeroUsize },

    /// Park a vehicle in the lowest free slot.
    #[command(
        name = "park",
        override_usage = "park [REGISTRATION_NUMBER] [COLOUR] [TYPE]",
        after_help = "Example: park B-1234-XYZ Putih Mobil"
    )]
    Park {
        registration: String,
        colour: String,
        kind: String,
    },

    /// Free a slot.
    #[command(
        name = "leave",
        override_usage = "leave [SLOT_NUMBER]",
        after_help = "Example: leave 3"
    )]
    Leave {
        #[arg(allow_negative_numbers = true)]
        slot: i64,
    },

    /// Show occupied slots.
    #[command(name = "status", override_usage = "status")]
    Status,

    /// Count vehicles of a type.
    #[command(
        name = "type_of_vehicles",
        override_usage = "type_of_vehicles [TYPE]",
        after_help = "Example: type_of_vehicles Mobil"
    )]
    TypeOfVehicles { kind: String },

    /// Registrations whose last digit is odd.
    #[command(
        name = "registration_numbers_for_vehicles_with_odd_plate",
        override_usage = "registration_numbers_for_vehicles_with_odd_plate"
    )]
    OddPlates,

    /// Registrations whose last digit is even (or that have no digits).
    #[command(
        name = "registration_numbers_for_vehicles_with_even_plate",
        override_usage = "registration_numbers_for_vehicles_with_even_plate"
    )]
    EvenPlates,

    /// Registrations of vehicles with a colour.
    #[command(
        name = "registration_numbers_for_vehicles_with_colour",
        override_usage = "registration_numbers_for_vehicles_with_colour [COLOUR]",
        after_help = "Example: registration_numbers_for_vehicles_with_colour Putih"
    )]
    RegistrationsByColour { colour: String },

    /// Slots holding vehicles with a colour.
    #[command(
        name = "slot_numbers_for_vehicles_with_colour",
        override_usage = "slot_numbers_for_vehicles_with_colour [COLOUR]",
        after_help = "Example: slot_numbers_for_vehicles_with_colour Merah"
    )]
    SlotsByColour { colour: String },

    /// Slot holding a registration.
    #[command(
        name = "slot_number_for_registration_number",
        override_usage = "slot_number_for_registration_number [REGISTRATION_NUMBER]",
        after_help = "Example: slot_number_for_registration_number B-1234-XYZ"
    )]
    SlotForRegistration { registration: String },
}

/// What a non-blank line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Exit,
    Lot(LotCommand),
}

/// Why a line could not be turned into a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// `help`, or `-h` on a command.
    Help(String),
    /// A known command with missing or malformed arguments.
    Usage {
        usage: String,
        example: Option<String>,
    },
    /// The first word names no command.
    Unknown { line: String },
}

/// Parse one line of input.  Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Request>, LineError> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    let Some(first) = words.first_mut() else {
        return Ok(None);
    };
    *first = first.to_lowercase();
    let name = first.clone();

    if words.len() == 1 && name == "exit" {
        return Ok(Some(Request::Exit));
    }

    let mut cmd = LotLine::command();
    if name != "help" && cmd.find_subcommand(&name).is_none() {
        return Err(LineError::Unknown {
            line: line.trim().to_owned(),
        });
    }

    match LotLine::try_parse_from(&words) {
        Ok(parsed) => Ok(Some(Request::Lot(parsed.command))),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
            Err(LineError::Help(e.render().to_string()))
        }
        Err(_) => {
            let Some(sub) = cmd.find_subcommand_mut(&name) else {
                return Err(LineError::Unknown {
                    line: line.trim().to_owned(),
                });
            };
            Err(LineError::Usage {
                usage: sub.render_usage().to_string().trim().to_owned(),
                example: sub.get_after_help().map(|h| h.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(line: &str) -> LotCommand {
        match parse_line(line) {
            Ok(Some(Request::Lot(cmd))) => cmd,
            other => panic!("expected lot command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn line_grammar_is_valid() {
        LotLine::command().debug_assert();
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
    }

    #[test]
    fn exit_in_any_case() {
        assert_eq!(parse_line("exit"), Ok(Some(Request::Exit)));
        assert_eq!(parse_line("  EXIT "), Ok(Some(Request::Exit)));
    }

    #[test]
    fn command_names_ignore_case() {
        assert_eq!(
            lot("CREATE_PARKING_LOT 6"),
            LotCommand::CreateParkingLot {
                capacity: NonZeroUsize::new(6).unwrap()
            }
        );
        assert_eq!(lot("Status"), LotCommand::Status);
    }

    #[test]
    fn park_keeps_argument_case() {
        assert_eq!(
            lot("park B-1234-XYZ Putih MOBIL"),
            LotCommand::Park {
                registration: "B-1234-XYZ".into(),
                colour: "Putih".into(),
                kind: "MOBIL".into(),
            }
        );
    }

    #[test]
    fn query_commands_parse() {
        assert_eq!(
            lot("registration_numbers_for_vehicles_with_odd_plate"),
            LotCommand::OddPlates
        );
        assert_eq!(
            lot("slot_number_for_registration_number b-1234-xyz"),
            LotCommand::SlotForRegistration {
                registration: "b-1234-xyz".into()
            }
        );
        assert_eq!(lot("leave 3"), LotCommand::Leave { slot: 3 });
        assert_eq!(lot("leave -1"), LotCommand::Leave { slot: -1 });
    }

    #[test]
    fn park_with_wrong_arity_shows_usage() {
        for line in ["park B-1 Putih", "park B-1 Putih Mobil extra"] {
            let Err(LineError::Usage { usage, example }) = parse_line(line) else {
                panic!("expected usage for {line:?}");
            };
            assert!(usage.contains("park [REGISTRATION_NUMBER] [COLOUR] [TYPE]"));
            assert_eq!(
                example.as_deref(),
                Some("Example: park B-1234-XYZ Putih Mobil")
            );
        }
    }

    #[test]
    fn bad_capacity_shows_usage() {
        for line in ["create_parking_lot", "create_parking_lot 0", "create_parking_lot six"] {
            assert!(
                matches!(parse_line(line), Err(LineError::Usage { .. })),
                "expected usage for {line:?}"
            );
        }
    }

    #[test]
    fn non_numeric_slot_shows_usage() {
        assert!(matches!(
            parse_line("leave three"),
            Err(LineError::Usage { .. })
        ));
    }

    #[test]
    fn unknown_command_echoes_line() {
        assert_eq!(
            parse_line("  fly away "),
            Err(LineError::Unknown {
                line: "fly away".into()
            })
        );
    }

    #[test]
    fn help_lists_commands() {
        let Err(LineError::Help(text)) = parse_line("help") else {
            panic!("expected help");
        };
        assert!(text.contains("create_parking_lot"));
        assert!(text.contains("slot_number_for_registration_number"));
    }
}
