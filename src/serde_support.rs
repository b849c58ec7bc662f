//! Serde integration, built on [`CanonicalText`] and the byte representation.

#![cfg(feature = "serde")]
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use std::{fmt, marker::PhantomData};

use serde::{de, Deserializer, Serializer};

use crate::{adapter::CanonicalText, Suid, UtcTimestamp};

impl serde::Serialize for Suid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_canonical_text())
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Suid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(VisitorImpl::<Self>::new("a Suid string"))
        } else {
            deserializer.deserialize_bytes(VisitorImpl::<Self>::new("16 Suid bytes"))
        }
    }
}

impl serde::Serialize for UtcTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_text())
    }
}

impl<'de> serde::Deserialize<'de> for UtcTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(VisitorImpl::<Self>::new("a UTC timestamp string"))
    }
}

struct VisitorImpl<T> {
    expecting: &'static str,
    _marker: PhantomData<T>,
}

impl<T> VisitorImpl<T> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _marker: PhantomData,
        }
    }
}

impl<'de, T: CanonicalText + DecodeBytes> de::Visitor<'de> for VisitorImpl<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        T::from_canonical_text(value)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        T::decode_bytes(value)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Bytes(value), &self))
    }
}

/// Binary decoding used by non-human-readable formats.
trait DecodeBytes: Sized {
    fn decode_bytes(value: &[u8]) -> Option<Self>;
}

impl DecodeBytes for Suid {
    fn decode_bytes(value: &[u8]) -> Option<Self> {
        <[u8; 16]>::try_from(value)
            .ok()
            .and_then(|e| Self::try_from(e).ok())
    }
}

impl DecodeBytes for UtcTimestamp {
    fn decode_bytes(value: &[u8]) -> Option<Self> {
        std::str::from_utf8(value)
            .ok()
            .and_then(Self::from_canonical_text)
    }
}
