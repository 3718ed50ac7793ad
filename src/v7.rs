//! UUIDv7-related functionality

use crate::{
    generator::{Generator, RandSource},
    time::{TimeSource, Timestamp},
    Uuid,
};

const MAX_COUNTER: u64 = (1 << 42) - 1;

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv7 object from the current timestamp, or resets the version 7 state
    /// upon significant timestamp rollback.
    ///
    /// UUIDs generated by one generator are monotonically ordered: within the same millisecond a
    /// 42-bit counter, randomly initialized every new millisecond, is incremented for each call.
    /// If the counter overflows, the timestamp is incremented and may run ahead of the clock.
    /// A clock rollback of up to ten seconds is absorbed by going on with the previous
    /// timestamp; a larger one resets the state and breaks the monotonic order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::rngs::OsRng);
    /// let x = g.generate_v7();
    /// let y = g.generate_v7();
    /// assert!(x < y);
    /// ```
    pub fn generate_v7(&mut self) -> Uuid {
        let unix_ts_ms = self.time_source.now().to_unix_millis();
        self.generate_v7_or_reset_core(unix_ts_ms, 10_000)
    }

    /// Generates a new UUIDv7 object from the current timestamp, or returns `None` upon
    /// significant timestamp rollback.
    ///
    /// See [`Generator::generate_v7`] for the description.
    pub fn generate_v7_or_abort(&mut self) -> Option<Uuid> {
        let unix_ts_ms = self.time_source.now().to_unix_millis();
        self.generate_v7_or_abort_core(unix_ts_ms, 10_000)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed, or resets the version 7 state
    /// upon significant timestamp rollback.
    ///
    /// The `rollback_allowance` parameter specifies the amount of `unix_ts_ms` rollback that is
    /// considered significant. A suggested value is `10_000` (milliseconds).
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit positive integer.
    pub fn generate_v7_or_reset_core(&mut self, unix_ts_ms: u64, rollback_allowance: u64) -> Uuid {
        if let Some(value) = self.generate_v7_or_abort_core(unix_ts_ms, rollback_allowance) {
            value
        } else {
            log::debug!(
                target: "uuid_utils",
                "clock went back from {} to {} ms; resetting version 7 state",
                self.v7_timestamp,
                unix_ts_ms
            );
            self.v7_timestamp = 0;
            self.generate_v7_or_abort_core(unix_ts_ms, rollback_allowance)
                .unwrap()
        }
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed, or returns `None` upon
    /// significant timestamp rollback.
    ///
    /// The `rollback_allowance` parameter specifies the amount of `unix_ts_ms` rollback that is
    /// considered significant. A suggested value is `10_000` (milliseconds).
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit positive integer.
    pub fn generate_v7_or_abort_core(
        &mut self,
        unix_ts_ms: u64,
        rollback_allowance: u64,
    ) -> Option<Uuid> {
        assert!(
            0 < unix_ts_ms && unix_ts_ms < 1 << 48,
            "`unix_ts_ms` must be a 48-bit positive integer"
        );
        assert!(
            rollback_allowance < 1 << 48,
            "`rollback_allowance` out of reasonable range"
        );

        if unix_ts_ms > self.v7_timestamp {
            self.v7_timestamp = unix_ts_ms;
            self.v7_counter = self.rng.next_u64() & MAX_COUNTER;
        } else if unix_ts_ms + rollback_allowance >= self.v7_timestamp {
            // go on with previous timestamp if new one is not much smaller
            self.v7_counter += 1;
            if self.v7_counter > MAX_COUNTER {
                // increment timestamp at counter overflow
                self.v7_timestamp += 1;
                self.v7_counter = self.rng.next_u64() & MAX_COUNTER;
            }
        } else {
            // abort if clock went backwards to unbearable extent
            return None;
        }

        Some(Uuid::from_fields_v7(
            self.v7_timestamp,
            (self.v7_counter >> 30) as u16,
            ((self.v7_counter & 0x3fff_ffff) << 32) | self.rng.next_u32() as u64,
        ))
    }

    /// Generates a new UUIDv7 object from an explicit Unix timestamp without touching the
    /// version 7 state.
    ///
    /// If `nanos` is given, its sub-millisecond fraction is scaled into the 12-bit `rand_a`
    /// field, so UUIDs built from finer timestamps still sort by time. Otherwise `rand_a` is
    /// random like `rand_b`.
    ///
    /// # Panics
    ///
    /// Panics if `nanos` is not less than one billion or the timestamp is beyond the 48-bit
    /// millisecond range. [`Timestamp::try_from_unix`] rejects such arguments without panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::rngs::OsRng);
    /// let x = g.generate_v7_at(1679665408, None);
    /// assert!(x.to_string().starts_with("018713dc-2800-7"));
    /// assert_eq!(x.timestamp(), Ok(1679665408000));
    ///
    /// let y = g.generate_v7_at(1679665408, Some(500_000));
    /// assert!(y.to_string().starts_with("018713dc-2800-7800-"));
    /// ```
    pub fn generate_v7_at(&mut self, seconds: u64, nanos: Option<u32>) -> Uuid {
        let timestamp = Timestamp::from_unix(seconds, nanos.unwrap_or(0));
        let rand_a = match nanos {
            Some(nanos) => ((nanos % 1_000_000) as u64 * 4096 / 1_000_000) as u16,
            None => (self.rng.next_u32() & 0xfff) as u16,
        };
        Uuid::from_fields_v7(timestamp.to_unix_millis(), rand_a, self.rng.next_u64() >> 2)
    }
}
