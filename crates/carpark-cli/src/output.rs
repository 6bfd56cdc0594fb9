//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// How a line is styled in human output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    fn glyph(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}", // ✓
            Tone::Info => "\u{2139}",    // ℹ
            Tone::Warning => "\u{26a0}", // ⚠
            Tone::Error => "\u{2717}",   // ✗
        }
    }
}

/// Manages CLI output based on configuration.
///
/// Quiet mode suppresses chatter (banners, confirmations, hints) but never
/// lot replies written with [`OutputManager::reply`] or
/// [`OutputManager::answer`], and never errors.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// The answer to a query.  Written even in quiet mode.
    pub fn answer(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// One compact JSON document per line.  Written even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    /// A lot reply.  Written even in quiet mode.
    ///
    /// Human output carries the tone's glyph; plain output is the bare text.
    pub fn reply(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let line = if self.resolved_format == OutputFormat::Human {
            self.decorate(tone, msg)
        } else {
            msg.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Prompt text without a trailing newline.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate(Tone::Success, msg))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate(Tone::Warning, msg))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `<glyph> <msg>`, coloured by tone unless colour is off.
    fn decorate(&self, tone: Tone, msg: &str) -> String {
        let glyph = tone.glyph();
        if self.no_color {
            return format!("{glyph} {msg}");
        }
        match tone {
            Tone::Success => format!("{} {}", glyph.green().bold(), msg.green()),
            Tone::Info => format!("{} {}", glyph.blue().bold(), msg.blue()),
            Tone::Warning => format!("{} {}", glyph.yellow().bold(), msg.yellow()),
            Tone::Error => format!("{} {}", glyph.red().bold(), msg.red()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// `true` when replies are JSON documents.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
