//! Centralized prompts and messages for CLI output.
//!
//! The length prompt, results and fatal errors go to stdout. Warnings go
//! to stderr and are suppressed in quiet mode.

use std::io::{BufRead, Write};

use crossterm::style::{Stylize, style};

use super::parse::parse_int;
use super::quiet;
use crate::error::Result;

/// Print `Length: ` and read one integer from `input`.
pub fn read_length<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i64> {
    write!(out, "Length: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_int(&line)
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

pub fn clipboard_unavailable() {
    warn("Clipboard unavailable, printing to terminal instead");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    warn(&format!("Clipboard error: {err}, printing to terminal instead"));
}

pub fn print_help() {
    println!(
        "\
passgen {version}
Generate a password with at least one digit, lowercase, uppercase and symbol.

Usage: passgen [OPTIONS]

Without --length the length is read from standard input.

Options:
  -l, --length <N>   Password length (>= 4)
  -n, --number <N>   Number of passwords [default: 1]
  -b, --board        Copy to clipboard instead of printing
  -q, --quiet        Suppress warnings and logging
      --naive        Full-range swap shuffle [default]
      --unbiased     Fisher-Yates shuffle
      --save         Save number, shuffle and quiet as defaults
  -d, --default      Ignore saved defaults
  -h, --help         Print help
  -v, --version      Print version

Not a cryptographically secure generator.",
        version = env!("CARGO_PKG_VERSION")
    );
}
