//! Tagged console reporting.
//!
//! Output lines carry a right-aligned tag column (`Converting`, `Wrote`,
//! `Warning`, …), bold-colored when the stream is a terminal and plain when
//! redirected.

use std::io::IsTerminal;

use crossterm::style::Stylize;

const TAG_WIDTH: usize = 12;

/// Informational line on stdout (green tag).
pub fn info(tag: &str, msg: &str) {
    let tag = format!("{tag:>TAG_WIDTH$}");
    if std::io::stdout().is_terminal() {
        println!("{} {msg}", tag.bold().green());
    } else {
        println!("{tag} {msg}");
    }
}

/// Warning line on stdout (yellow tag).
pub fn warn(tag: &str, msg: &str) {
    let tag = format!("{tag:>TAG_WIDTH$}");
    if std::io::stdout().is_terminal() {
        println!("{} {msg}", tag.bold().yellow());
    } else {
        println!("{tag} {msg}");
    }
}

/// Error line on stderr (red tag).
pub fn error(msg: &str) {
    let tag = format!("{:>TAG_WIDTH$}", "error");
    if std::io::stderr().is_terminal() {
        eprintln!("{} {msg}", tag.bold().red());
    } else {
        eprintln!("{tag} {msg}");
    }
}
