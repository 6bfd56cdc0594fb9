//! The command dispatcher: turns input lines into [`LotService`] calls and
//! renders what comes back.
//!
//! A session owns the lot for its whole lifetime.  Lot errors and malformed
//! lines are rendered and the session keeps reading; only I/O failures end
//! it early.

use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, instrument};

use carpark_core::prelude::{CarparkError, LotError, LotService, Parity};

use crate::{
    cli::{
        SessionArgs,
        line::{LineError, LotCommand, Request, parse_line},
    },
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::{OutputManager, Tone},
    reply::{self, Reply, STATUS_HEADER},
};

/// Whether to keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Error payload for `--output-format json`.
#[derive(Debug, Serialize)]
struct JsonError<'a> {
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<&'a str>,
}

/// Build the lot service for a session.
///
/// `--vehicle-type` flags replace the configured types; `--capacity`
/// overrides `lot.initial_capacity`.
pub fn build_service(args: &SessionArgs, config: &AppConfig) -> CliResult<LotService> {
    let types = if args.vehicle_types.is_empty() {
        &config.lot.vehicle_types
    } else {
        &args.vehicle_types
    };
    let mut service = LotService::from_type_names(types.iter().cloned())?;

    if let Some(capacity) = args.capacity.or(config.lot.initial_capacity) {
        service.create(capacity);
    }

    debug!(
        vehicle_types = %service.vehicle_types(),
        capacity = ?service.capacity(),
        "Session service ready"
    );
    Ok(service)
}

/// A running dispatcher over one lot.
pub struct Session<'a> {
    service: LotService,
    output: &'a OutputManager,
}

impl<'a> Session<'a> {
    pub fn new(service: LotService, output: &'a OutputManager) -> Self {
        Self { service, output }
    }

    /// The lot as it stands.
    pub fn service(&self) -> &LotService {
        &self.service
    }

    /// Read lines until EOF or `exit`, showing `prompt` before each one.
    pub fn drive<R: BufRead>(&mut self, reader: R, prompt: Option<&str>) -> CliResult<()> {
        let mut lines = reader.lines();
        loop {
            if let Some(prompt) = prompt {
                self.output.prompt(prompt)?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.with_cli_context(|| "Failed to read command input")?;
            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Parse, execute and render one line.
    #[instrument(skip(self), level = "debug")]
    pub fn handle_line(&mut self, line: &str) -> CliResult<Flow> {
        match parse_line(line) {
            Ok(None) => Ok(Flow::Continue),
            Ok(Some(Request::Exit)) => Ok(Flow::Exit),
            Ok(Some(Request::Lot(command))) => {
                match self.execute(command) {
                    Ok(reply) => self.render_reply(&reply)?,
                    Err(err) => self.render_core_error(&err)?,
                }
                Ok(Flow::Continue)
            }
            Err(err) => {
                self.render_line_error(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one command against the lot.
    pub fn execute(&mut self, command: LotCommand) -> Result<Reply, CarparkError> {
        let service = &mut self.service;
        let reply = match command {
            LotCommand::CreateParkingLot { capacity } => Reply::from(service.create(capacity)),
            LotCommand::Park {
                registration,
                colour,
                kind,
            } => Reply::Parked {
                slot: service.park(&registration, &colour, &kind)?,
            },
            LotCommand::Leave { slot } => Reply::Left {
                slot: service.leave(slot)?,
            },
            LotCommand::Status => Reply::Status {
                slots: service.status()?,
            },
            LotCommand::TypeOfVehicles { kind } => Reply::Count {
                count: service.count_by_type(&kind)?,
                kind,
            },
            LotCommand::OddPlates => plates(service, Parity::Odd)?,
            LotCommand::EvenPlates => plates(service, Parity::Even)?,
            LotCommand::RegistrationsByColour { colour } => Reply::Registrations {
                registrations: service.registrations_by_colour(&colour)?,
                colour,
            },
            LotCommand::SlotsByColour { colour } => Reply::Slots {
                slots: service.slots_by_colour(&colour)?,
                colour,
            },
            LotCommand::SlotForRegistration { registration } => Reply::Slot {
                slot: service.slot_for_registration(&registration)?,
                registration,
            },
        };
        Ok(reply)
    }

    // ── rendering ─────────────────────────────────────────────────────────

    fn render_reply(&self, reply: &Reply) -> CliResult<()> {
        let out = self.output;
        if out.is_json() {
            out.json(reply)?;
            return Ok(());
        }

        match reply {
            Reply::Created {
                capacity,
                discarded,
            } => {
                if *discarded > 0 {
                    out.reply(
                        Tone::Warning,
                        &format!("Discarded {discarded} parked vehicle(s) from the previous lot"),
                    )?;
                }
                out.reply(
                    Tone::Success,
                    &format!("Created a parking lot with {capacity} slots"),
                )?;
            }
            Reply::Parked { slot } => {
                out.reply(Tone::Success, &format!("Allocated slot number: {slot}"))?
            }
            Reply::Left { slot } => {
                out.reply(Tone::Success, &format!("Slot number {slot} is free"))?
            }
            Reply::Status { slots } => {
                out.answer(STATUS_HEADER)?;
                if slots.is_empty() {
                    out.reply(Tone::Info, "Parking lot is empty.")?;
                }
                for row in slots {
                    out.answer(&reply::status_row(row))?;
                }
            }
            Reply::Count { count, .. } => out.answer(&count.to_string())?,
            Reply::Plates { registrations, .. } | Reply::Registrations { registrations, .. } => {
                out.answer(&reply::join(registrations))?
            }
            Reply::Slots { slots, .. } => out.answer(&reply::join(slots))?,
            Reply::Slot { slot, .. } => out.answer(&slot.to_string())?,
        }
        Ok(())
    }

    fn render_core_error(&self, err: &CarparkError) -> CliResult<()> {
        debug!(error = %err, "Command rejected");
        let out = self.output;
        let Some(lot_err) = err.as_lot() else {
            out.reply(Tone::Error, &err.to_string())?;
            return Ok(());
        };

        if out.is_json() {
            out.json(&JsonError {
                error: lot_err.code(),
                message: lot_err.to_string(),
                usage: None,
            })?;
            return Ok(());
        }

        match lot_err {
            LotError::AlreadyEmpty { .. } => out.reply(Tone::Info, &lot_err.to_string())?,
            LotError::NotFound { .. } => out.answer(&lot_err.to_string())?,
            _ => out.reply(Tone::Error, &lot_err.to_string())?,
        }
        Ok(())
    }

    fn render_line_error(&self, err: &LineError) -> CliResult<()> {
        let out = self.output;
        match err {
            LineError::Help(text) => {
                if out.is_json() {
                    out.json(&JsonError {
                        error: "help",
                        message: text.trim().to_owned(),
                        usage: None,
                    })?;
                } else {
                    out.answer(text.trim_end())?;
                }
            }
            LineError::Usage { usage, example } => {
                if out.is_json() {
                    out.json(&JsonError {
                        error: "usage",
                        message: "Invalid arguments".into(),
                        usage: Some(usage),
                    })?;
                } else {
                    out.reply(Tone::Error, usage)?;
                    if let Some(example) = example {
                        out.reply(Tone::Info, example)?;
                    }
                }
            }
            LineError::Unknown { line } => {
                let message = format!("Unknown command: '{line}'");
                if out.is_json() {
                    out.json(&JsonError {
                        error: "unknown_command",
                        message,
                        usage: None,
                    })?;
                } else {
                    out.reply(Tone::Error, &message)?;
                }
            }
        }
        Ok(())
    }
}

fn plates(service: &LotService, parity: Parity) -> Result<Reply, CarparkError> {
    Ok(Reply::Plates {
        registrations: service.plates_with_parity(parity)?,
        parity,
    })
}
