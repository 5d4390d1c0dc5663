//! CLI context - bundles settings and flags for one run.

use std::io::{BufRead, Write};

use super::{CliFlags, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, Password};
use crate::rand::{Rand, RandomSource};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and merge them over the saved defaults. A bare
    /// invocation never reads the settings file.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let saved = if args.len() <= 1 || flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        let mut ctx = Self {
            settings: saved,
            flags,
        };
        ctx.apply_flags();
        Ok(ctx)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(shuffle) = self.flags.shuffle {
            self.settings.shuffle = shuffle;
        }
        if self.flags.quiet {
            self.settings.quiet = true;
        }
    }

    /// Run against the process streams.
    pub fn run(&self) -> Result<()> {
        if self.flags.help {
            prompts::print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        quiet::set(self.settings.quiet);

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let length = self.length(&mut stdin.lock(), &mut stdout.lock())?;

        let mut rng = Rand::from_clock();
        let passwords = self.generate(length, &mut rng)?;

        if self.flags.clipboard {
            pass::output::to_clipboard(&passwords)?;
        } else {
            pass::output::to_stdout(&passwords)?;
        }

        self.handle_save();
        Ok(())
    }

    fn handle_save(&self) {
        if self.flags.save
            && let Err(e) = self.settings.save_to_file()
        {
            prompts::warn(&format!("Failed to save settings: {}", e));
        }
    }

    /// Length from `--length`, else prompted on `out` and read from `input`.
    pub fn length<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<usize> {
        let raw = match self.flags.length {
            Some(len) => len,
            None => prompts::read_length(input, out)?,
        };
        length_from(raw)
    }

    /// Generate the configured batch. Zero passwords is treated as one.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Vec<Password>> {
        let count = self.settings.number_of_passwords.max(1);
        log::debug!(
            "generating {} password(s) of length {} with {} shuffle",
            count,
            length,
            self.settings.shuffle
        );
        (0..count)
            .map(|_| pass::generate(length, rng, self.settings.shuffle))
            .collect()
    }
}

/// Negative lengths are too short; lengths past `usize` can never be allocated.
fn length_from(raw: i64) -> Result<usize> {
    if raw < 0 {
        return Err(Error::InvalidLength);
    }
    usize::try_from(raw).map_err(|_| Error::Allocation)
}
