//! Settings file persistence.
//!
//! One line: `<number_of_passwords>,<shuffle>,<quiet>`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Settings;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.number_of_passwords, settings.shuffle, settings.quiet
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

/// `Ok(None)` when no file exists. The file is never created here.
pub fn load(path: &Path) -> io::Result<Option<Settings>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let line = data.lines().next().unwrap_or("").trim();
    let parts: Vec<&str> = line.split(',').collect();

    if parts.len() != 3 {
        return Err(malformed(path));
    }

    let settings = Settings {
        number_of_passwords: parts[0].parse().map_err(|_| malformed(path))?,
        shuffle: parts[1].parse().map_err(|_| malformed(path))?,
        quiet: parts[2].parse().map_err(|_| malformed(path))?,
    };

    log::debug!("settings loaded from {}", path.display());
    Ok(Some(settings))
}

fn malformed(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("malformed settings file {}", path.display()),
    )
}

pub fn get_path() -> PathBuf {
    if let Some(path) = env::var_os("PASSGEN_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}
