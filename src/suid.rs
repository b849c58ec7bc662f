use std::{fmt, io, ops::Range, str};

use fstr::FStr;

use crate::{hex, ParseError, RangeError, UtcTimestamp};

/// Represents a time-sortable identifier tagged with the source or type of the identifier.
///
/// A Suid is a flat array of 16 bytes laid out as follows:
///
/// | Offset | Length | Field                                                   |
/// | ------ | ------ | ------------------------------------------------------- |
/// | 0      | 1      | `tag`, assigned by the caller                           |
/// | 1      | 6      | `unix_ts_ms`, big-endian Unix timestamp in milliseconds |
/// | 7      | 9      | `random`                                                |
///
/// Comparison is byte-wise over the whole array, so identifiers with the same tag sort by
/// generation time. The 36-character text form is identical to the hyphenated form of a GUID
/// holding the same 16 bytes.
///
/// # Examples
///
/// ```rust
/// use timesorted::{Suid, UtcTimestamp};
///
/// let ts: UtcTimestamp = "2022-05-11T14:28:51.678Z".parse()?;
/// let x = Suid::new_at(ts, 17)?;
/// assert_eq!(x.tag(), 17);
/// assert_eq!(x.unix_ts_ms(), 1_652_279_331_678);
///
/// let y: Suid = x.to_string().parse()?;
/// assert_eq!(x, y);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Suid([u8; 16]);

/// Offsets of the two hex digits encoding each byte in the text representation.
const HEX_POSITIONS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Offsets of the hyphens in the text representation.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

impl Suid {
    /// The all-zero identifier that denotes an absent or unknown value.
    ///
    /// It is never produced by generation and is rejected by parsing, since its timestamp is out
    /// of range.
    pub const EMPTY: Self = Self([0x00; 16]);

    /// The smallest `unix_ts_ms` accepted.
    pub const MIN_UNIX_TS_MS: u64 = 946_681_200_000;

    /// The largest `unix_ts_ms` accepted (10889-08-02T05:31:50.655Z).
    pub const MAX_UNIX_TS_MS: u64 = (1 << 48) - 1;

    /// Length of the text representation.
    pub const TEXT_LEN: usize = 36;

    const TAG: usize = 0;
    const TIMESTAMP: Range<usize> = 1..7;
    const RANDOM: Range<usize> = 7..16;
    pub(crate) const RANDOM_LEN: usize = 9;

    /// Generates a new Suid from the current timestamp using the thread-local generator.
    ///
    /// # Panics
    ///
    /// Panics if the system clock reports a time outside the range representable by Suid.
    pub fn new(tag: u8) -> Self {
        crate::suid(tag)
    }

    /// Generates a new Suid from the `timestamp` passed using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `timestamp` is earlier than [`Suid::MIN_UNIX_TS_MS`] or later
    /// than [`Suid::MAX_UNIX_TS_MS`].
    pub fn new_at(timestamp: impl Into<UtcTimestamp>, tag: u8) -> Result<Self, RangeError> {
        let timestamp = timestamp.into();
        crate::default_gen::with_default_generator(|g| g.generate_at(timestamp, tag))
    }

    /// Creates a Suid from field values.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `unix_ts_ms` is out of the valid range.
    pub const fn from_fields(
        tag: u8,
        unix_ts_ms: u64,
        random: [u8; 9],
    ) -> Result<Self, RangeError> {
        if unix_ts_ms < Self::MIN_UNIX_TS_MS || unix_ts_ms > Self::MAX_UNIX_TS_MS {
            return Err(RangeError::new(unix_ts_ms as i128));
        }

        Ok(Self([
            tag,
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            random[0],
            random[1],
            random[2],
            random[3],
            random[4],
            random[5],
            random[6],
            random[7],
            random[8],
        ]))
    }

    /// Returns the tag.
    pub const fn tag(&self) -> u8 {
        self.0[Self::TAG]
    }

    /// Returns true if this is [`Suid::EMPTY`].
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the random bytes.
    pub fn random_bytes(&self) -> &[u8] {
        &self.0[Self::RANDOM]
    }

    /// Copies the underlying bytes into `dest`.
    pub fn write_to(&self, dest: &mut [u8; 16]) {
        dest.copy_from_slice(&self.0);
    }

    /// Writes the underlying bytes to `writer`.
    pub fn write_to_io<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.0)
    }

    /// Returns the Unix timestamp in milliseconds.
    pub fn unix_ts_ms(&self) -> u64 {
        self.0[Self::TIMESTAMP]
            .iter()
            .fold(0, |acc, e| (acc << 8) | u64::from(*e))
    }

    /// Returns the embedded timestamp.
    pub fn timestamp(&self) -> UtcTimestamp {
        // every 48-bit value is well within the representable range
        UtcTimestamp::from_unix_millis(self.unix_ts_ms() as i64).unwrap_or(UtcTimestamp::MAX)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timesorted::Suid;
    ///
    /// let x = "110180b3-85cb-5ecc-3c4d-c0c0c07398f1".parse::<Suid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "110180b3-85cb-5ecc-3c4d-c0c0c07398f1");
    /// assert_eq!(format!("{}", y), "110180b3-85cb-5ecc-3c4d-c0c0c07398f1");
    /// # Ok::<(), timesorted::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [b'-'; 36];
        for (byte, pos) in self.0.iter().zip(HEX_POSITIONS) {
            buffer[pos..pos + 2].copy_from_slice(&hex::encode_byte(*byte));
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer holds ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the first 16 bytes of `src`, validating the embedded timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooShort`] if `src` is shorter than 16 bytes and
    /// [`ParseError::OutOfRange`] if the timestamp is out of the valid range.
    pub fn try_from_slice(src: &[u8]) -> Result<Self, ParseError> {
        let bytes = src
            .get(..16)
            .and_then(|e| <[u8; 16]>::try_from(e).ok())
            .ok_or(ParseError::TooShort(src.len()))?;
        Ok(Self::try_from(bytes)?)
    }

    /// Splits the underlying bytes into two big-endian signed integers, for storage layers that
    /// persist primitive integer pairs.
    pub fn to_i64_pair(&self) -> (i64, i64) {
        let n = u128::from_be_bytes(self.0);
        ((n >> 64) as i64, n as i64)
    }

    /// Recreates an object from the pair returned by [`Suid::to_i64_pair`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the embedded timestamp is out of the valid range.
    pub fn try_from_i64_pair(hi: i64, lo: i64) -> Result<Self, RangeError> {
        Self::try_from((u128::from(hi as u64) << 64) | u128::from(lo as u64))
    }

    /// Validates `unix_ts_ms` against the range representable by Suid.
    pub(crate) fn check_range(unix_ts_ms: i128) -> Result<u64, RangeError> {
        if (i128::from(Self::MIN_UNIX_TS_MS)..=i128::from(Self::MAX_UNIX_TS_MS))
            .contains(&unix_ts_ms)
        {
            Ok(unix_ts_ms as u64)
        } else {
            Err(RangeError::new(unix_ts_ms))
        }
    }
}

impl fmt::Display for Suid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Suid {
    /// Returns the text representation, tag, and timestamp, for diagnostics only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.encode(), self.tag(), self.timestamp())
    }
}

impl str::FromStr for Suid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.as_bytes();
        if src.len() != Self::TEXT_LEN {
            return Err(ParseError::InvalidLength(src.len()));
        }
        if let Some(&pos) = HYPHEN_POSITIONS.iter().find(|&&pos| src[pos] != b'-') {
            return Err(ParseError::InvalidCharacter(pos));
        }

        let mut dst = [0u8; 16];
        for (e, pos) in dst.iter_mut().zip(HEX_POSITIONS) {
            *e = hex::decode_pair(src[pos], src[pos + 1]).ok_or_else(|| {
                let offset = usize::from(hex::decode_digit(src[pos]).is_some());
                ParseError::InvalidCharacter(pos + offset)
            })?;
        }
        Ok(Self::try_from(dst)?)
    }
}

impl TryFrom<&str> for Suid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Suid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Suid> for String {
    fn from(src: Suid) -> Self {
        src.to_string()
    }
}

impl TryFrom<[u8; 16]> for Suid {
    type Error = RangeError;

    fn try_from(src: [u8; 16]) -> Result<Self, Self::Error> {
        let value = Self(src);
        Self::check_range(i128::from(value.unix_ts_ms()))?;
        Ok(value)
    }
}

impl From<Suid> for [u8; 16] {
    fn from(src: Suid) -> Self {
        src.0
    }
}

impl AsRef<[u8]> for Suid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<u128> for Suid {
    type Error = RangeError;

    fn try_from(src: u128) -> Result<Self, Self::Error> {
        Self::try_from(src.to_be_bytes())
    }
}

impl From<Suid> for u128 {
    fn from(src: Suid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Suid;
    use crate::{ParseError, UtcTimestamp};
    use chrono::{TimeZone, Utc};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u8, u64, [u8; 9]), &'static str)] {
        const MIN: u64 = Suid::MIN_UNIX_TS_MS;
        const MAX: u64 = Suid::MAX_UNIX_TS_MS;

        &[
            ((0, MIN, [0; 9]), "0000dc6a-98bd-8000-0000-000000000000"),
            ((0, MAX, [0; 9]), "00ffffff-ffff-ff00-0000-000000000000"),
            ((0xff, MIN, [0; 9]), "ff00dc6a-98bd-8000-0000-000000000000"),
            ((0, MIN, [0xff; 9]), "0000dc6a-98bd-80ff-ffff-ffffffffffff"),
            ((0xff, MAX, [0xff; 9]), "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                (17, 1_652_279_331_678, [0xcc, 0x3c, 0x4d, 0xc0, 0xc0, 0xc0, 0x73, 0x98, 0xf1]),
                "110180b3-85cb-5ecc-3c4d-c0c0c07398f1",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for ((tag, ts, random), text) in prepare_cases() {
            let e = Suid::from_fields(*tag, *ts, *random).unwrap();
            assert_eq!(e.tag(), *tag);
            assert_eq!(e.unix_ts_ms(), *ts);
            assert_eq!(e.random_bytes(), random);
            assert_eq!(e.encode().as_str(), *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
        }
    }

    /// Formats identically to a GUID holding the same bytes
    #[test]
    fn formats_identically_to_a_guid_holding_the_same_bytes() {
        for _ in 0..1_000 {
            let e = Suid::new(17);
            let guid = uuid::Uuid::from_bytes(*e.as_bytes());
            assert_eq!(guid.hyphenated().to_string(), e.to_string());
            assert_eq!(guid.to_string().parse::<Suid>(), Ok(e));
        }
    }

    /// Round-trips the concrete scenario
    #[test]
    fn round_trips_the_concrete_scenario() {
        let ts = Utc.with_ymd_and_hms(2022, 5, 11, 14, 28, 51).unwrap()
            + chrono::TimeDelta::milliseconds(678);
        let e = Suid::new_at(ts, 17).unwrap();
        assert_eq!(e.unix_ts_ms(), 1_652_279_331_678);
        assert_eq!(e.timestamp(), UtcTimestamp::from(ts));

        let parsed: Suid = e.to_string().parse().unwrap();
        assert_eq!(parsed, e);
        assert_eq!(parsed.unix_ts_ms(), 1_652_279_331_678);
        assert_eq!(parsed.tag(), 17);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let valid = "110180b3-85cb-5ecc-3c4d-c0c0c07398f1";
        assert!(valid.parse::<Suid>().is_ok());

        let cases = [
            ("", ParseError::InvalidLength(0)),
            (&valid[..35], ParseError::InvalidLength(35)),
            ("110180b3-85cb-5ecc-3c4d-c0c0c07398f1a", ParseError::InvalidLength(37)),
            ("110180b385cb5ecc3c4dc0c0c07398f1", ParseError::InvalidLength(32)),
            (" 10180b3-85cb-5ecc-3c4d-c0c0c07398f1", ParseError::InvalidCharacter(0)),
            ("110180b3-85cb-5ecc-3c4d-c0c0c07398f ", ParseError::InvalidCharacter(35)),
            ("11018gb3-85cb-5ecc-3c4d-c0c0c07398f1", ParseError::InvalidCharacter(5)),
            ("110180b3-85cb-5ecc-3c4d-c0c0c0739+f1", ParseError::InvalidCharacter(33)),
            ("110180b3-85cb-5ecc-3c4d_c0c0c07398f1", ParseError::InvalidCharacter(23)),
            ("110180b3085cb-5ecc-3c4d-c0c0c07398f1", ParseError::InvalidCharacter(8)),
            ("110180-b385cb-5ecc-3c4d-c0c0c07398f1", ParseError::InvalidCharacter(8)),
            ("{10180b3-85cb-5ecc-3c4d-c0c0c07398f}", ParseError::InvalidCharacter(0)),
            ("110180b3-85cb-5ecc-3c4d-c0c0c07398\u{e9}", ParseError::InvalidCharacter(34)),
        ];

        for (text, err) in cases {
            assert_eq!(text.parse::<Suid>(), Err(err), "input {:?}", text);
        }
    }

    /// Returns error to out-of-range timestamps
    #[test]
    fn returns_error_to_out_of_range_timestamps() {
        // 1999-12-31T00:00:00.000Z
        let text = "1100dc65-a950-0001-0203-040506070809";
        assert_eq!(
            text.parse::<Suid>(),
            Err(ParseError::OutOfRange(crate::RangeError::new(946_598_400_000)))
        );

        let mut bytes = [0u8; 16];
        bytes[1..7].copy_from_slice(&(Suid::MIN_UNIX_TS_MS - 1).to_be_bytes()[2..]);
        let just_before = Suid(bytes);
        assert_eq!(just_before.unix_ts_ms(), Suid::MIN_UNIX_TS_MS - 1);
        assert!(matches!(
            just_before.to_string().parse::<Suid>(),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(Suid::try_from_slice(just_before.as_bytes()).is_err());

        bytes[1..7].copy_from_slice(&Suid::MIN_UNIX_TS_MS.to_be_bytes()[2..]);
        assert!(Suid(bytes).to_string().parse::<Suid>().is_ok());
        assert!(Suid::try_from_slice(&bytes).is_ok());

        assert!(Suid::EMPTY.to_string().parse::<Suid>().is_err());
        assert!(Suid::try_from_slice(Suid::EMPTY.as_bytes()).is_err());
    }

    /// Rejects construction outside the valid range
    #[test]
    fn rejects_construction_outside_the_valid_range() {
        let cases = [
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(10890, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(20000, 1, 1, 0, 0, 0).unwrap(),
        ];
        for ts in cases {
            let err = Suid::new_at(ts, 0).unwrap_err();
            assert_eq!(err.unix_ts_ms(), i128::from(ts.timestamp_millis()));
        }

        assert!(Suid::from_fields(0, Suid::MIN_UNIX_TS_MS - 1, [0; 9]).is_err());
        assert!(Suid::from_fields(0, Suid::MAX_UNIX_TS_MS + 1, [0; 9]).is_err());
        assert!(Suid::new_at(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(), 0).is_ok());
        assert!(Suid::new_at(Utc.with_ymd_and_hms(10889, 8, 2, 5, 31, 50).unwrap(), 0).is_ok());
    }

    /// Sorts by timestamp within the same tag
    #[test]
    fn sorts_by_timestamp_within_the_same_tag() {
        let cases = [
            "2021-01-01T00:00:00.000Z",
            "2022-01-01T00:00:00.000Z",
            "2022-04-01T00:00:00.000Z",
            "2022-05-01T00:00:00.000Z",
            "2022-05-10T00:00:00.000Z",
            "2022-05-11T00:00:00.000Z",
            "2022-05-11T13:00:00.000Z",
            "2022-05-11T14:00:00.000Z",
            "2022-05-11T14:27:00.000Z",
            "2022-05-11T14:28:00.000Z",
            "2022-05-11T14:28:50.000Z",
            "2022-05-11T14:28:51.000Z",
            "2022-05-11T14:28:51.678Z",
            "2022-05-11T14:28:51.679Z",
        ];
        let ids: Vec<Suid> = cases
            .iter()
            .map(|e| Suid::new_at(e.parse::<UtcTimestamp>().unwrap(), 17).unwrap())
            .collect();
        for i in 1..ids.len() {
            assert!(ids[i - 1] < ids[i]);
            assert!(ids[i - 1].to_string() < ids[i].to_string());
            assert!(u128::from(ids[i - 1]) < u128::from(ids[i]));
        }
    }

    /// Generates distinct identifiers within the same millisecond
    #[test]
    fn generates_distinct_identifiers_within_the_same_millisecond() {
        let ts: UtcTimestamp = "2022-05-11T14:28:51.678Z".parse().unwrap();
        let a = Suid::new_at(ts, 8).unwrap();
        let b = Suid::new_at(ts, 8).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.unix_ts_ms(), b.unix_ts_ms());
        assert_eq!(a.timestamp(), b.timestamp());
    }

    /// Distinguishes the empty identifier
    #[test]
    fn distinguishes_the_empty_identifier() {
        assert!(Suid::EMPTY.is_empty());
        assert!(Suid::default().is_empty());
        assert_eq!(Suid::EMPTY.to_string(), "00000000-0000-0000-0000-000000000000");
        for _ in 0..1_000 {
            assert!(!Suid::new(0).is_empty());
        }
    }

    /// Parses bytes consuming only the first 16
    #[test]
    fn parses_bytes_consuming_only_the_first_16() {
        let e = Suid::new(3);
        let mut buffer = [0xaau8; 20];
        buffer[..16].copy_from_slice(e.as_bytes());
        assert_eq!(Suid::try_from_slice(&buffer), Ok(e));
        assert_eq!(Suid::try_from_slice(&buffer[..16]), Ok(e));
        assert_eq!(Suid::try_from_slice(&buffer[..15]), Err(ParseError::TooShort(15)));
        assert_eq!(Suid::try_from_slice(&[]), Err(ParseError::TooShort(0)));
        assert!(Suid::try_from_slice(&[0u8; 16]).is_err());
    }

    /// Writes bytes in layout order
    #[test]
    fn writes_bytes_in_layout_order() {
        let e = Suid::new(9);
        let mut dest = [0u8; 16];
        e.write_to(&mut dest);
        assert_eq!(&dest, e.as_bytes());

        let mut sink = Vec::new();
        e.write_to_io(&mut sink).unwrap();
        e.write_to_io(&mut sink).unwrap();
        assert_eq!(sink.len(), 32);
        assert_eq!(&sink[16..], e.as_ref());
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for _ in 0..1_000 {
            let e = Suid::new(0xfe);
            assert_eq!(Suid::try_from(<[u8; 16]>::from(e)), Ok(e));
            assert_eq!(Suid::try_from(u128::from(e)), Ok(e));
            assert_eq!(Suid::try_from(String::from(e)), Ok(e));
            assert_eq!(Suid::try_from(e.encode().as_str()), Ok(e));

            let (hi, lo) = e.to_i64_pair();
            assert_eq!(Suid::try_from_i64_pair(hi, lo), Ok(e));
        }
    }

    /// Splits into big-endian integer pair
    #[test]
    fn splits_into_big_endian_integer_pair() {
        let e: Suid = "ffffffff-ffff-ffff-0123-456789abcdef".parse().unwrap();
        assert_eq!(e.to_i64_pair(), (-1, 0x0123_4567_89ab_cdef));
        assert!(Suid::try_from_i64_pair(0, 0).is_err());
    }

    /// Hashes consistently with equality
    #[test]
    fn hashes_consistently_with_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(e: &Suid) -> u64 {
            let mut h = DefaultHasher::new();
            e.hash(&mut h);
            h.finish()
        }

        let e = Suid::new(1);
        let copy: Suid = e.to_string().parse().unwrap();
        assert_eq!(e, copy);
        assert_eq!(e.cmp(&copy), std::cmp::Ordering::Equal);
        assert_eq!(hash_of(&e), hash_of(&copy));
    }

    /// Renders debug string with tag and timestamp
    #[test]
    fn renders_debug_string_with_tag_and_timestamp() {
        let e = Suid::from_fields(17, 1_652_279_331_678, [0; 9]).unwrap();
        assert_eq!(
            format!("{:?}", e),
            "110180b3-85cb-5e00-0000-000000000000, 17, 2022-05-11T14:28:51.678Z"
        );
    }

    mod properties {
        use super::Suid;
        use proptest::prelude::*;

        proptest! {
            /// Round-trips through text for any valid fields
            #[test]
            fn round_trips_through_text_for_any_valid_fields(
                tag in any::<u8>(),
                ts in Suid::MIN_UNIX_TS_MS..=Suid::MAX_UNIX_TS_MS,
                random in any::<[u8; 9]>(),
            ) {
                let e = Suid::from_fields(tag, ts, random).unwrap();
                let text = e.to_string();
                prop_assert_eq!(text.len(), 36);
                for (i, c) in text.char_indices() {
                    if matches!(i, 8 | 13 | 18 | 23) {
                        prop_assert_eq!(c, '-');
                    } else {
                        prop_assert!(c.is_ascii_hexdigit());
                    }
                }
                prop_assert_eq!(text.parse::<Suid>(), Ok(e));
            }

            /// Orders by timestamp when tags are equal
            #[test]
            fn orders_by_timestamp_when_tags_are_equal(
                tag in any::<u8>(),
                ts in Suid::MIN_UNIX_TS_MS..Suid::MAX_UNIX_TS_MS,
                delta in 1u64..1_000_000_000,
                a_random in any::<[u8; 9]>(),
                b_random in any::<[u8; 9]>(),
            ) {
                let later = ts.saturating_add(delta).min(Suid::MAX_UNIX_TS_MS);
                let a = Suid::from_fields(tag, ts, a_random).unwrap();
                let b = Suid::from_fields(tag, later, b_random).unwrap();
                prop_assert!(a < b);
                prop_assert!(a.to_string() < b.to_string());
            }
        }
    }
}
