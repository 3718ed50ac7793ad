//! UUIDv1-related functionality

use crate::{
    generator::{Generator, RandSource},
    time::TimeSource,
    Uuid,
};

impl Uuid {
    /// Creates a version 1 UUID from a 60-bit RFC 4122 timestamp, a 14-bit clock sequence, and a
    /// 48-bit node identifier.
    ///
    /// The timestamp is split into `time_low` (32 bits), `time_mid` (16 bits), and `time_hi` (12
    /// bits) in this order from the least significant bits.
    ///
    /// # Panics
    ///
    /// Panics if any argument is wider than its field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Uuid;
    ///
    /// let x = Uuid::from_rfc4122_timestamp(0x01e7_52a1_f3b4_958c, 42, 0x0102_0304_0506);
    /// assert_eq!(x.to_string(), "f3b4958c-52a1-11e7-802a-010203040506");
    /// ```
    pub const fn from_rfc4122_timestamp(ticks: u64, clock_seq: u16, node: u64) -> Self {
        if ticks >= 1 << 60 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        let time_low = ticks & 0xffff_ffff;
        let time_mid = (ticks >> 32) & 0xffff;
        let time_hi_version = 0x1000 | (ticks >> 48);
        Self::from_u128(
            (time_low as u128) << 96
                | (time_mid as u128) << 80
                | (time_hi_version as u128) << 64
                | (0x8000 | clock_seq as u128) << 48
                | node as u128,
        )
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv1 object from the current timestamp.
    ///
    /// `node` defaults to the node identifier cached in the generator's [`ClockState`] and
    /// `clock_seq` to its running clock sequence, which is incremented whenever the clock does
    /// not advance since the previous version 1 or version 6 generation.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit integer or `clock_seq` is not a 14-bit integer.
    ///
    /// [`ClockState`]: crate::ClockState
    pub fn generate_v1(&mut self, node: Option<u64>, clock_seq: Option<u16>) -> Uuid {
        let (ticks, clock_seq, node) = self.rfc4122_time_fields(None, node, clock_seq);
        Uuid::from_rfc4122_timestamp(ticks, clock_seq, node)
    }
}
