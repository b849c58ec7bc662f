//! Suid generator and related types.

use crate::{RangeError, Suid, UtcTimestamp};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`SuidGenerator`].
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a Suid generator that fills the random tail of each identifier from the random
/// number generator it owns.
///
/// Most callers use [`Suid::new`], which draws from a lazily created generator private to the
/// calling thread. This type is the explicit alternative: it lets callers choose the random number
/// generator and decide how the generator is shared. A generator holds no state other than its
/// random number generator, so identifiers generated within the same millisecond are ordered only
/// by their random tails.
///
/// # Examples
///
/// ```rust
/// use timesorted::SuidGenerator;
///
/// let mut g = SuidGenerator::with_rand08(rand::rngs::OsRng);
/// let x = g.generate(17);
/// assert_eq!(x.tag(), 17);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SuidGenerator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> SuidGenerator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new Suid from the current timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the system clock reports a time outside the range representable by Suid.
    pub fn generate(&mut self, tag: u8) -> Suid {
        let now = UtcTimestamp::now();
        match self.generate_at(now, tag) {
            Ok(value) => value,
            Err(err) => panic!("system clock may be misconfigured: {}", err),
        }
    }

    /// Generates a new Suid from the `timestamp` passed.
    pub fn generate_at(&mut self, timestamp: UtcTimestamp, tag: u8) -> Result<Suid, RangeError> {
        self.generate_core(timestamp.unix_millis(), tag)
    }

    /// Generates a new Suid from the `unix_ts_ms` passed.
    ///
    /// The range is checked before any random data is drawn.
    pub fn generate_core(&mut self, unix_ts_ms: i64, tag: u8) -> Result<Suid, RangeError> {
        let unix_ts_ms = Suid::check_range(i128::from(unix_ts_ms))?;
        let mut random = [0u8; Suid::RANDOM_LEN];
        self.rng.fill_bytes(&mut random);
        Suid::from_fields(tag, unix_ts_ms, random)
    }
}
