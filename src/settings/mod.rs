//! Saved generation defaults.

mod file;

use crate::pass::Shuffle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub number_of_passwords: usize,
    pub shuffle: Shuffle,
    pub quiet: bool,
}

impl Settings {
    /// Saved defaults, or built-in ones when nothing was saved yet.
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Ok(file::load(&file::get_path())?.unwrap_or_default())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&file::get_path(), self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_passwords: 1,
            shuffle: Shuffle::Naive,
            quiet: false,
        }
    }
}
