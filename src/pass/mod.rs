//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod shuffle;

use std::fmt;

use zeroize::Zeroize;

pub use generate::generate;
pub use shuffle::Shuffle;

/// Generated password. The buffer is wiped on drop.
pub struct Password(Vec<u8>);

impl Password {
    /// Every byte of `buf` must come from one of the charsets.
    fn from_ascii(buf: Vec<u8>) -> Self {
        debug_assert!(buf.iter().all(|&b| charset::Category::of(b).is_some()));
        Password(buf)
    }

    pub fn as_str(&self) -> &str {
        // Safety: every byte is drawn from an ASCII charset
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
