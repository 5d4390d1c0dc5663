//! Shuffle phase algorithms.

use std::fmt;
use std::str::FromStr;

use crate::rand::RandomSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shuffle {
    /// One swap per index with a partner drawn from the whole buffer.
    /// The resulting permutations are not uniformly distributed.
    #[default]
    Naive,
    /// Fisher-Yates over the shrinking prefix.
    Unbiased,
}

impl Shuffle {
    pub fn apply<R: RandomSource + ?Sized>(self, buf: &mut [u8], rng: &mut R) {
        match self {
            Shuffle::Naive => naive(buf, rng),
            Shuffle::Unbiased => fisher_yates(buf, rng),
        }
    }
}

#[inline]
fn naive<R: RandomSource + ?Sized>(buf: &mut [u8], rng: &mut R) {
    let len = buf.len();
    for i in 0..len {
        let j = rng.below(len);
        buf.swap(i, j);
    }
}

#[inline]
fn fisher_yates<R: RandomSource + ?Sized>(buf: &mut [u8], rng: &mut R) {
    for i in (1..buf.len()).rev() {
        let j = rng.below(i + 1);
        buf.swap(i, j);
    }
}

impl fmt::Display for Shuffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shuffle::Naive => write!(f, "naive"),
            Shuffle::Unbiased => write!(f, "unbiased"),
        }
    }
}

impl FromStr for Shuffle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Shuffle::Naive),
            "unbiased" => Ok(Shuffle::Unbiased),
            other => Err(format!("unknown shuffle mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{Rand, Replay};

    #[test]
    fn test_naive_swaps_with_full_range_partner() {
        let mut buf = *b"abcde";
        let mut rng = Replay::new(vec![1]);
        Shuffle::Naive.apply(&mut buf, &mut rng);
        // i=0 <-> 1, i=1 <-> 1, i=2 <-> 1, i=3 <-> 1, i=4 <-> 1
        assert_eq!(&buf, b"beacd");
        assert_eq!(rng.drawn, 5);
    }

    #[test]
    fn test_fisher_yates_walks_down() {
        let mut buf = *b"abcd";
        let mut rng = Replay::new(vec![0]);
        Shuffle::Unbiased.apply(&mut buf, &mut rng);
        // i=3 <-> 0, i=2 <-> 0, i=1 <-> 0
        assert_eq!(&buf, b"bcda");
        assert_eq!(rng.drawn, 3);
    }

    #[test]
    fn test_shuffles_preserve_multiset() {
        let mut rng = Rand::with_seed(99);
        for mode in [Shuffle::Naive, Shuffle::Unbiased] {
            let original = *b"0aA!xyZ9@@";
            let mut buf = original;
            mode.apply(&mut buf, &mut rng);
            let mut a = original.to_vec();
            let mut b = buf.to_vec();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = Rand::with_seed(3);
        let mut empty: [u8; 0] = [];
        Shuffle::Naive.apply(&mut empty, &mut rng);
        Shuffle::Unbiased.apply(&mut empty, &mut rng);
        let mut one = *b"x";
        Shuffle::Naive.apply(&mut one, &mut rng);
        assert_eq!(&one, b"x");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("naive".parse::<Shuffle>(), Ok(Shuffle::Naive));
        assert_eq!("unbiased".parse::<Shuffle>(), Ok(Shuffle::Unbiased));
        assert!("fisher".parse::<Shuffle>().is_err());
        assert_eq!(Shuffle::Unbiased.to_string(), "unbiased");
        assert_eq!(Shuffle::default(), Shuffle::Naive);
    }
}
