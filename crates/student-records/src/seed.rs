//! Seed derivation from registration numbers.
//!
//! Every generator in this crate is keyed off a single integer taken from
//! the tail of the registration number. This module owns that extraction so
//! all record types agree on it.

use std::fmt;

use tracing::debug;

/// Seed used when the registration number has no numeric suffix.
pub const DEFAULT_SEED: u32 = 1;

/// Number of trailing characters inspected for the seed.
const SUFFIX_LEN: usize = 2;

/// Integer seed shared by every record generator.
///
/// # Example
///
/// ```
/// use student_records::{StudentSeed, derive_seed};
///
/// assert_eq!(derive_seed("312220104005"), StudentSeed::new(5));
/// assert_eq!(derive_seed("LICETXX").value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentSeed(u32);

impl StudentSeed {
    /// Wraps a raw seed value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the seed widened to `u64` for offset arithmetic.
    #[must_use]
    pub(crate) fn wide(self) -> u64 {
        u64::from(self.0)
    }

    /// Returns `seed + index`, widened so large seeds cannot overflow.
    #[must_use]
    pub(crate) fn offset(self, index: usize) -> u64 {
        self.wide()
            .saturating_add(u64::try_from(index).unwrap_or(u64::MAX))
    }
}

impl Default for StudentSeed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

impl From<u32> for StudentSeed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the generator seed from a registration number.
///
/// The last two characters are parsed the way a lenient integer parser
/// would: leading whitespace and a `+` sign are skipped, then the leading
/// ASCII digits are read. Inputs with no digits there (including the empty
/// string and negative suffixes) fall back to [`DEFAULT_SEED`]. A suffix of
/// `"00"` yields seed `0`.
///
/// # Examples
///
/// ```
/// use student_records::derive_seed;
///
/// assert_eq!(derive_seed("REG2024-42").value(), 42);
/// assert_eq!(derive_seed("REG00").value(), 0);
/// assert_eq!(derive_seed("").value(), 1);
/// assert_eq!(derive_seed("abXY").value(), 1);
/// ```
#[must_use]
pub fn derive_seed(registration_number: &str) -> StudentSeed {
    let suffix = trailing_chars(registration_number, SUFFIX_LEN);
    parse_leading_digits(suffix).map_or_else(
        || {
            debug!(
                registration_number,
                suffix,
                seed = DEFAULT_SEED,
                "registration suffix is not numeric; using default seed"
            );
            StudentSeed::default()
        },
        StudentSeed,
    )
}

/// Returns the last `count` characters of `value`, or all of it when shorter.
pub(crate) fn trailing_chars(value: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let start = value
        .char_indices()
        .rev()
        .nth(count.saturating_sub(1))
        .map_or(0, |(index, _)| index);
    value.get(start..).unwrap_or(value)
}

fn parse_leading_digits(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned.get(..digits_end)?.parse().ok()
}
