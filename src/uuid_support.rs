//! Conversions to and from [`uuid::Uuid`], which shares the text layout of Suid.

#![cfg(feature = "uuid")]
#![cfg_attr(docsrs, doc(cfg(feature = "uuid")))]

use crate::{RangeError, Suid};

impl From<Suid> for uuid::Uuid {
    fn from(src: Suid) -> Self {
        uuid::Uuid::from_bytes(*src.as_bytes())
    }
}

impl TryFrom<uuid::Uuid> for Suid {
    type Error = RangeError;

    fn try_from(src: uuid::Uuid) -> Result<Self, Self::Error> {
        Self::try_from(src.into_bytes())
    }
}
