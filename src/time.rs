//! Clock access and the timestamp conversions used by the time-based versions.

/// Number of 100-nanosecond intervals between 1582-10-15 00:00:00 UTC (the start of the
/// Gregorian calendar and the UUID epoch) and 1970-01-01 00:00:00 UTC.
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Exclusive upper bound of Unix seconds whose ticks fit in the 60-bit timestamp field.
const SECONDS_LIMIT: u64 = ((1 << 60) - UUID_EPOCH_OFFSET) / 10_000_000;

/// A moment expressed as seconds and nanoseconds since the Unix epoch.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp {
    seconds: u64,
    nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp from Unix seconds and a nanosecond fraction.
    ///
    /// # Panics
    ///
    /// Panics if `nanos` is not less than one billion.
    pub const fn from_unix(seconds: u64, nanos: u32) -> Self {
        assert!(nanos < 1_000_000_000, "`nanos` must be less than one second");
        Self { seconds, nanos }
    }

    /// Creates a timestamp from Unix seconds and a nanosecond fraction, returning `None` if
    /// `nanos` is not less than one billion or the moment cannot be encoded by every time-based
    /// version (i.e., it is beyond the 60-bit RFC 4122 range, around the year 5236).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Timestamp;
    ///
    /// assert!(Timestamp::try_from_unix(1679665408, 999_999_999).is_some());
    /// assert!(Timestamp::try_from_unix(1679665408, 1_000_000_000).is_none());
    /// assert!(Timestamp::try_from_unix(1 << 40, 0).is_none());
    /// ```
    pub const fn try_from_unix(seconds: u64, nanos: u32) -> Option<Self> {
        if nanos < 1_000_000_000 && seconds < SECONDS_LIMIT {
            Some(Self { seconds, nanos })
        } else {
            None
        }
    }

    /// Returns the Unix seconds.
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns the nanosecond fraction.
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns the milliseconds since the Unix epoch.
    pub const fn to_unix_millis(&self) -> u64 {
        self.seconds
            .saturating_mul(1_000)
            .saturating_add((self.nanos / 1_000_000) as u64)
    }

    /// Returns the count of 100-nanosecond intervals since the UUID epoch.
    ///
    /// # Panics
    ///
    /// Panics if the count does not fit in the 60-bit RFC 4122 timestamp field.
    pub const fn to_rfc4122_ticks(&self) -> u64 {
        let ticks = self
            .seconds
            .saturating_mul(10_000_000)
            .saturating_add((self.nanos / 100) as u64 + UUID_EPOCH_OFFSET);
        assert!(ticks < 1 << 60, "timestamp out of the range of the 60-bit field");
        ticks
    }
}

/// A trait that defines the minimum system clock interface for the generator.
pub trait TimeSource {
    /// Returns the current time.
    fn now(&mut self) -> Timestamp;
}

/// [`TimeSource`] implementation based on [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    fn now(&mut self) -> Timestamp {
        use std::time;
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        Timestamp::from_unix(elapsed.as_secs(), elapsed.subsec_nanos())
    }
}
