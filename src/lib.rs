//! Time-sortable identifiers tagged with the source or type of the identifier
//!
//! ```rust
//! use timesorted::Suid;
//!
//! let x = Suid::new(17);
//! println!("{}", x); // e.g., "110180b3-85cb-5ecc-3c4d-c0c0c07398f1"
//! println!("{:?}", x.as_bytes()); // as 16-byte array
//! assert_eq!(x.tag(), 17);
//! ```
//!
//! # Field and byte layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      tag      |                  unix_ts_ms                   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |             rand              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 8-bit `tag` field is assigned by the caller. All 256 values are valid.
//! - The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds, big-endian. Values
//!   earlier than [`Suid::MIN_UNIX_TS_MS`] are rejected.
//! - The remaining 72 `rand` bits are filled by a per-thread random number generator. The
//!   generator favors speed and uniqueness; its output is not meant to be unguessable.
//!
//! Identifiers compare byte by byte, so those sharing a tag sort by generation time. Identifiers
//! generated within the same millisecond are ordered by their random bits only.
//!
//! The text representation is the hyphenated hexadecimal form also used by GUIDs, so any consumer
//! of GUID strings accepts it unchanged.
//!
//! # UTC timestamps
//!
//! [`UtcTimestamp`] wraps an instant normalized to UTC and renders it as
//! `yyyy-MM-ddTHH:mm:ss.fffZ`:
//!
//! ```rust
//! use timesorted::UtcTimestamp;
//!
//! let ts: UtcTimestamp = "2022-05-11T16:28:51.678+02:00".parse()?;
//! assert_eq!(ts.to_string(), "2022-05-11T14:28:51.678Z");
//! # Ok::<(), timesorted::TimestampParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `serde` enables serialization through [`serde`](https://docs.rs/serde).
//! - `uuid` enables conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod suid;
pub use suid::Suid;

mod utc;
pub use utc::UtcTimestamp;

mod error;
pub use error::{ParseError, RangeError, TimestampParseError};

pub mod adapter;
pub use adapter::CanonicalText;

pub mod hex;

pub mod generator;
pub use generator::{RandSource, SuidGenerator};

mod default_gen;
pub use default_gen::suid;

mod serde_support;
mod uuid_support;
