//! Terminal output. Listings and results go to stdout; warnings, row
//! problems and errors go to stderr so `show --json` stays parseable.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }

    fn on_stderr(self) -> bool {
        matches!(self, Tone::Warning | Tone::Error)
    }
}

/// `msg` prefixed with the tone's colored icon.
pub fn styled(tone: Tone, msg: impl Display) -> String {
    format!("{}{BOLD}{} {RESET}{msg}", tone.color(), tone.icon())
}

pub fn say(tone: Tone, msg: impl Display) {
    if tone.on_stderr() {
        eprintln!("{}", styled(tone, msg));
    } else {
        println!("{}", styled(tone, msg));
    }
}

pub fn info(msg: impl Display) {
    say(Tone::Info, msg);
}

pub fn success(msg: impl Display) {
    say(Tone::Success, msg);
}

pub fn warning(msg: impl Display) {
    say(Tone::Warning, msg);
}

pub fn error(msg: impl Display) {
    say(Tone::Error, msg);
}

/// Text of a per-row problem; `index` is 1-based.
pub fn row_line(index: usize, problem: impl Display) -> String {
    format!("row {index}: {problem}")
}

pub fn row_problem(index: usize, problem: impl Display) {
    error(row_line(index, problem));
}

/// Title line above a cell listing.
pub fn banner(title: impl Display) {
    println!("{}{BOLD}── {title} ──{RESET}\n", Tone::Info.color());
}
