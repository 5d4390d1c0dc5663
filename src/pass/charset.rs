//! The four fixed character categories.

use crate::rand::RandomSource;

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Digit,
    Lower,
    Upper,
    Symbol,
}

impl Category {
    /// Seed-phase order; also indexed by the fill-phase category draw.
    pub const ALL: [Category; 4] = [
        Category::Digit,
        Category::Lower,
        Category::Upper,
        Category::Symbol,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            Category::Digit => DIGITS,
            Category::Lower => LOWERCASE,
            Category::Upper => UPPERCASE,
            Category::Symbol => SYMBOLS,
        }
    }

    /// Category a byte belongs to, if any.
    pub fn of(byte: u8) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| category.chars().contains(&byte))
    }

    /// Uniform character from this category.
    #[inline]
    pub fn pick<R: RandomSource + ?Sized>(self, rng: &mut R) -> u8 {
        let chars = self.chars();
        chars[rng.below(chars.len())]
    }
}
