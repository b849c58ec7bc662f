//! UTC-normalized timestamp with a fixed canonical text format

use std::{fmt, ops, str, time::SystemTime};

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, TimeZone, Utc,
};

use crate::TimestampParseError;

/// Represents an instant normalized to UTC.
///
/// Any offset-aware input is converted to UTC on construction, so two values denoting the same
/// instant are equal regardless of the offset they were created from. The canonical text form is
/// `yyyy-MM-ddTHH:mm:ss.fffZ`, which truncates the instant to millisecond precision.
///
/// # Examples
///
/// ```rust
/// use timesorted::UtcTimestamp;
///
/// let x: UtcTimestamp = "2022-06-13T22:35:14.950+02:00".parse()?;
/// assert_eq!(x.to_string(), "2022-06-13T20:35:14.950Z");
/// # Ok::<(), timesorted::TimestampParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct UtcTimestamp(DateTime<Utc>);

/// Layouts tried, in order, for inputs without an explicit offset. Such inputs are read as UTC.
const NAIVE_LAYOUTS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

impl UtcTimestamp {
    /// The earliest representable instant.
    pub const MIN: Self = Self(DateTime::<Utc>::MIN_UTC);

    /// The latest representable instant.
    pub const MAX: Self = Self(DateTime::<Utc>::MAX_UTC);

    /// Returns the current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates an instance from a Unix timestamp in milliseconds, or returns `None` if it is out
    /// of the representable range.
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Creates an instance from a Unix timestamp in seconds, or returns `None` if it is out of
    /// the representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Creates an instance at midnight UTC of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Returns a reference to the underlying [`DateTime<Utc>`].
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the instant as an offset-aware value with a zero offset.
    pub fn to_fixed_offset(&self) -> DateTime<chrono::FixedOffset> {
        self.0.fixed_offset()
    }

    /// Returns the calendar date in UTC.
    ///
    /// Converting back with [`UtcTimestamp::from_date`] is lossless only when the time of day is
    /// exactly midnight.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns the number of milliseconds since the Unix epoch.
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns a copy with sub-millisecond precision discarded, which is exactly the precision
    /// preserved by the canonical text form.
    pub fn truncated_to_millis(&self) -> Self {
        Self(self.0.trunc_subsecs(3))
    }

    /// Adds `delta`, returning `None` on overflow.
    pub fn checked_add(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Subtracts `delta`, returning `None` on overflow.
    pub fn checked_sub(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_sub_signed(delta).map(Self)
    }

    /// Parses a textual instant and normalizes it to UTC.
    ///
    /// Accepted representations are RFC 3339 with any offset, RFC 2822, ISO 8601 date-times
    /// without an offset (read as UTC) separated by `T` or a space, and bare `YYYY-MM-DD` dates
    /// (read as midnight UTC).
    pub fn try_parse(src: &str) -> Result<Self, TimestampParseError> {
        let src = src.trim();
        if let Ok(dt) = src.parse::<DateTime<Utc>>() {
            return Ok(Self(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(src) {
            return Ok(Self::from(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(src) {
            return Ok(Self::from(dt));
        }
        for layout in NAIVE_LAYOUTS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(src, layout) {
                return Ok(Self(dt.and_utc()));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(src, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }

        tracing::trace!(input = src, "rejected timestamp representation");
        Err(TimestampParseError::new(src))
    }
}

impl fmt::Display for UtcTimestamp {
    /// Returns the `yyyy-MM-ddTHH:mm:ss.fffZ` representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl str::FromStr for UtcTimestamp {
    type Err = TimestampParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_parse(src)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for UtcTimestamp {
    fn from(src: DateTime<Tz>) -> Self {
        Self(src.with_timezone(&Utc))
    }
}

impl From<SystemTime> for UtcTimestamp {
    fn from(src: SystemTime) -> Self {
        Self(src.into())
    }
}

impl From<NaiveDate> for UtcTimestamp {
    fn from(src: NaiveDate) -> Self {
        Self::from_date(src)
    }
}

impl From<UtcTimestamp> for DateTime<Utc> {
    fn from(src: UtcTimestamp) -> Self {
        src.0
    }
}

impl ops::Sub for UtcTimestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl ops::Add<TimeDelta> for UtcTimestamp {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result is out of the representable range. See [`UtcTimestamp::checked_add`].
    fn add(self, rhs: TimeDelta) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl ops::Sub<TimeDelta> for UtcTimestamp {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result is out of the representable range. See [`UtcTimestamp::checked_sub`].
    fn sub(self, rhs: TimeDelta) -> Self::Output {
        Self(self.0 - rhs)
    }
}
