//! Password output: stdout lines or the system clipboard.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::Password;
use crate::cli::prompts;
use crate::error::Result;

/// Write one `Password: <value>` line per password.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> Result<()> {
    for pass in passwords {
        writeln!(out, "Password: {}", pass)?;
    }
    out.flush()?;
    Ok(())
}

pub fn to_stdout(passwords: &[Password]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, passwords)
}

/// Copy the batch to the clipboard, falling back to stdout when no
/// clipboard is reachable.
pub fn to_clipboard(passwords: &[Password]) -> Result<()> {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::debug!("clipboard init failed: {}", e);
            prompts::clipboard_unavailable();
            return to_stdout(passwords);
        }
    };

    let mut joined = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let result = ctx.set_contents(joined.clone());
    joined.zeroize();

    match result {
        Ok(()) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied();
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            to_stdout(passwords)
        }
    }
}
