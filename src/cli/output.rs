//! Terminal output with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically; the `color`
//! setting can switch colors off on top of that.

use std::fmt::Display;

use colored::Colorize;

use crate::domain::Command;

/// Red bold "error:" line on stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Yellow "Warning:" line on stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Outcome of one executed line: green check or red cross
pub fn outcome(ok: bool, msg: &(impl Display + ?Sized)) {
    if ok {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("{} {}", "✗".red(), msg);
    }
}

/// Parsed command, prefixed with its command word
pub fn command(command: &Command) {
    match command.word() {
        Some(word) => println!("{}: {}", word.as_str().green().bold(), command),
        None => println!("{}", command.to_string().red()),
    }
}

/// Indented record line
pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {}", msg);
}

/// Plain data output
pub fn plain(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
