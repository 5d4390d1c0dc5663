//! Password generation.

use super::charset::Category;
use super::{Password, Shuffle};
use crate::error::{Error, Result};
use crate::rand::RandomSource;

/// One slot per mandatory category.
pub const MIN_LENGTH: usize = Category::ALL.len();

/// Generate a password of exactly `length` characters containing at least
/// one character from every category.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    rng: &mut R,
    shuffle: Shuffle,
) -> Result<Password> {
    if length < MIN_LENGTH {
        return Err(Error::InvalidLength);
    }

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(length).map_err(|_| Error::Allocation)?;

    // Seed phase: positions 0..4 pinned to digit, lower, upper, symbol
    for category in Category::ALL {
        buf.push(category.pick(rng));
    }

    // Fill phase: category first, then character
    for _ in MIN_LENGTH..length {
        let category = Category::ALL[rng.below(Category::ALL.len())];
        buf.push(category.pick(rng));
    }

    shuffle.apply(&mut buf, rng);

    Ok(Password::from_ascii(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{Rand, Replay};

    fn categories(pass: &Password) -> [bool; 4] {
        let mut seen = [false; 4];
        for b in pass.as_str().bytes() {
            let category = Category::of(b).expect("byte outside every category");
            let idx = Category::ALL.iter().position(|c| *c == category).unwrap();
            seen[idx] = true;
        }
        seen
    }

    #[test]
    fn test_rejects_short_lengths() {
        let mut rng = Rand::with_seed(1);
        for len in 0..MIN_LENGTH {
            assert!(matches!(
                generate(len, &mut rng, Shuffle::Naive),
                Err(Error::InvalidLength)
            ));
        }
    }

    #[test]
    fn test_unobtainable_buffer_is_allocation_error() {
        let mut rng = Rand::with_seed(1);
        assert!(matches!(
            generate(usize::MAX, &mut rng, Shuffle::Naive),
            Err(Error::Allocation)
        ));
    }

    #[test]
    fn test_length_and_coverage() {
        let mut rng = Rand::with_seed(0x5eed);
        for shuffle in [Shuffle::Naive, Shuffle::Unbiased] {
            for len in [4, 5, 8, 16, 64, 257] {
                for _ in 0..50 {
                    let pass = generate(len, &mut rng, shuffle).unwrap();
                    assert_eq!(pass.as_str().len(), len);
                    assert_eq!(categories(&pass), [true; 4], "{}", pass);
                }
            }
        }
    }

    #[test]
    fn test_length_four_is_one_of_each() {
        let mut rng = Rand::with_seed(4);
        for _ in 0..200 {
            let pass = generate(4, &mut rng, Shuffle::Naive).unwrap();
            let mut counts = [0usize; 4];
            for b in pass.as_str().bytes() {
                let category = Category::of(b).unwrap();
                counts[Category::ALL.iter().position(|c| *c == category).unwrap()] += 1;
            }
            assert_eq!(counts, [1, 1, 1, 1], "{}", pass);
        }
    }

    #[test]
    fn test_replayed_draws_fix_the_output() {
        // seed: '0' 'a' 'A' '!', fill: lower 'c', naive shuffle all with 1
        let mut rng = Replay::new(vec![0, 0, 0, 0, 1, 2, 1, 1, 1, 1, 1]);
        let pass = generate(5, &mut rng, Shuffle::Naive).unwrap();
        assert_eq!(pass.as_str(), "ac0A!");
        assert_eq!(rng.drawn, 11);
    }

    #[test]
    fn test_replayed_draws_unbiased() {
        let mut rng = Replay::new(vec![0]);
        let pass = generate(4, &mut rng, Shuffle::Unbiased).unwrap();
        assert_eq!(pass.as_str(), "aA!0");
        assert_eq!(rng.drawn, 4 + 3);
    }

    #[test]
    fn test_draw_counts_per_phase() {
        for len in [4usize, 9, 20] {
            let mut rng = Replay::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
            generate(len, &mut rng, Shuffle::Naive).unwrap();
            assert_eq!(rng.drawn, 4 + 2 * (len - 4) + len);

            let mut rng = Replay::new(vec![3, 1, 4, 1, 5, 9, 2, 6]);
            generate(len, &mut rng, Shuffle::Unbiased).unwrap();
            assert_eq!(rng.drawn, 4 + 2 * (len - 4) + (len - 1));
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let a = generate(32, &mut Rand::with_seed(77), Shuffle::Naive).unwrap();
        let b = generate(32, &mut Rand::with_seed(77), Shuffle::Naive).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }
}
