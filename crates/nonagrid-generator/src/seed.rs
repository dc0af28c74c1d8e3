//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Seeds display as 64 lowercase hex characters and parse back from the same
/// form, so a puzzle can be reproduced from its printed seed. Fresh seeds
/// are derived by hashing OS entropy through SHA-256, which keeps them
/// uniformly distributed regardless of the entropy source's shape.
///
/// # Examples
///
/// ```
/// use nonagrid_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Derives a fresh seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut entropy = [0_u8; 32];
        rand::rng().fill_bytes(&mut entropy);
        let digest = Sha256::digest(entropy);
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        Self(seed)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic RNG driven by this seed.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed string must be 64 hex characters, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// The input contained a non-hex character.
    #[display("invalid hex character {_0:?}")]
    BadCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::BadLength(s.chars().count()));
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hex = std::str::from_utf8(pair).map_err(|_| bad_char(s))?;
            *byte = u8::from_str_radix(hex, 16).map_err(|_| bad_char(s))?;
        }
        Ok(Self(bytes))
    }
}

fn bad_char(s: &str) -> ParseSeedError {
    let c = s
        .chars()
        .find(|c| !c.is_ascii_hexdigit())
        .unwrap_or_default();
    ParseSeedError::BadCharacter(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::BadLength(3))
        );
        let bad = format!("zz{}", "0".repeat(62));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::BadCharacter('z'))
        );
    }

    #[test]
    fn test_from_entropy_varies() {
        // Not a randomness test, only a sanity check that consecutive seeds
        // are not identical.
        assert_ne!(PuzzleSeed::from_entropy(), PuzzleSeed::from_entropy());
    }

    #[test]
    fn test_same_seed_same_rng_stream() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
