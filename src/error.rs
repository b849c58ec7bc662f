//! Error types

/// Error returned when a timestamp cannot be embedded in a [`Suid`](crate::Suid).
///
/// Valid timestamps lie between [`Suid::MIN_UNIX_TS_MS`](crate::Suid::MIN_UNIX_TS_MS) and
/// [`Suid::MAX_UNIX_TS_MS`](crate::Suid::MAX_UNIX_TS_MS) inclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("timestamp {unix_ts_ms} ms is outside the range representable by Suid")]
pub struct RangeError {
    unix_ts_ms: i128,
}

impl RangeError {
    pub(crate) const fn new(unix_ts_ms: i128) -> Self {
        Self { unix_ts_ms }
    }

    /// Returns the rejected Unix timestamp in milliseconds.
    pub const fn unix_ts_ms(&self) -> i128 {
        self.unix_ts_ms
    }
}

/// Error parsing an invalid text or byte representation of [`Suid`](crate::Suid).
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The text representation is not exactly 36 bytes long.
    #[error("invalid length: expected 36 characters, found {0}")]
    InvalidLength(usize),

    /// The byte representation is shorter than 16 bytes.
    #[error("too short: expected at least 16 bytes, found {0}")]
    TooShort(usize),

    /// A character is not a hex digit, or a separator is not a hyphen.
    #[error("invalid character at position {0}")]
    InvalidCharacter(usize),

    /// The embedded timestamp is outside the valid range.
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Error parsing an unrecognized text representation of
/// [`UtcTimestamp`](crate::UtcTimestamp).
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("unrecognized timestamp representation: {input:?}")]
pub struct TimestampParseError {
    input: String,
}

impl TimestampParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}
