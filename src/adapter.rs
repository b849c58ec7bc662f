//! Conversion contract for structured-document codecs
//!
//! Codecs that store values as text (JSON and the like) need only the two pure operations of
//! [`CanonicalText`]. How absent values are written (explicit null or omitted) is left to the
//! codec; with serde, wrap the field in `Option` and pick a `skip_serializing_if` policy.

use std::{fmt, ops};

use fstr::FStr;

use crate::{Suid, UtcTimestamp};

/// A value with a canonical text representation that round-trips losslessly.
pub trait CanonicalText: Sized {
    /// The encoded text, which may be stack allocated.
    type Encoded: ops::Deref<Target = str> + fmt::Display;

    /// Returns the canonical text representation.
    fn to_canonical_text(&self) -> Self::Encoded;

    /// Parses the canonical text representation, or returns `None` if `text` is not valid.
    fn from_canonical_text(text: &str) -> Option<Self>;
}

impl CanonicalText for Suid {
    type Encoded = FStr<36>;

    fn to_canonical_text(&self) -> Self::Encoded {
        self.encode()
    }

    fn from_canonical_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl CanonicalText for UtcTimestamp {
    type Encoded = String;

    fn to_canonical_text(&self) -> Self::Encoded {
        self.to_string()
    }

    fn from_canonical_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}
