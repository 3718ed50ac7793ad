//! UUIDv6-related functionality

use crate::{
    generator::{Generator, RandSource},
    time::{TimeSource, Timestamp},
    Uuid,
};

impl Uuid {
    /// Creates a version 6 UUID from a 60-bit RFC 4122 timestamp, a 14-bit clock sequence, and a
    /// 48-bit node identifier.
    ///
    /// Unlike version 1, the timestamp is laid out from the most significant bits, so the byte
    /// order of version 6 UUIDs agrees with their chronological order.
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
    /// let x = Uuid::from_sorted_rfc4122_timestamp(0x01e7_52a1_f3b4_958c, 42, 0x0102_0304_0506);
    /// assert_eq!(x.to_string(), "1e752a1f-3b49-658c-802a-010203040506");
    /// assert_eq!(x.time(), 0x01e7_52a1_f3b4_958c);
    /// ```
    pub const fn from_sorted_rfc4122_timestamp(ticks: u64, clock_seq: u16, node: u64) -> Self {
        if ticks >= 1 << 60 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self::from_u128(
            ((ticks >> 12) as u128) << 80
                | (0x6000 | (ticks & 0xfff) as u128) << 64
                | (0x8000 | clock_seq as u128) << 48
                | node as u128,
        )
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv6 object from `timestamp` or, if `None`, from the current time.
    ///
    /// The clock sequence and node follow the same rules as [`Generator::generate_v1`], sharing
    /// one [`ClockState`](crate::ClockState) with it even when the timestamp is supplied.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit integer, `clock_seq` is not a 14-bit integer, or
    /// `timestamp` is beyond the 60-bit RFC 4122 range.
    pub fn generate_v6(
        &mut self,
        node: Option<u64>,
        timestamp: Option<Timestamp>,
        clock_seq: Option<u16>,
    ) -> Uuid {
        let (ticks, clock_seq, node) = self.rfc4122_time_fields(timestamp, node, clock_seq);
        Uuid::from_sorted_rfc4122_timestamp(ticks, clock_seq, node)
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::tests::{frozen_at, ThreadGen};
    use crate::{Timestamp, Uuid, Variant};

    /// Encodes known timestamp, clock sequence, and node
    #[test]
    fn encodes_known_timestamp_clock_sequence_and_node() {
        let ts = Timestamp::from_unix(1497624119, 1234);
        let mut g = frozen_at(ts);
        let e = g.generate_v6(None, None, None);
        assert_eq!(e.to_string(), "1e752a1f-3b49-658c-802a-010203040506");
        assert_eq!(e.version(), Some(6));
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.time(), ts.to_rfc4122_ticks());
        assert_eq!(e.timestamp(), Ok(1497624119000));

        let v1 = g.generate_v1(None, Some(42));
        assert_eq!(e.time(), v1.time());
    }

    /// Prefers explicit timestamp over the clock
    #[test]
    fn prefers_explicit_timestamp_over_the_clock() {
        let mut g = frozen_at(Timestamp::from_unix(0, 0));
        let e = g.generate_v6(None, Some(Timestamp::from_unix(1679665408, 0)), None);
        assert_eq!(e.timestamp(), Ok(1679665408000));
    }

    /// Sorts by timestamp regardless of clock sequence and node
    #[test]
    fn sorts_by_timestamp_regardless_of_clock_sequence_and_node() {
        let mut g = ThreadGen::default();
        let t1 = Timestamp::from_unix(1679665408, 999_999_900);
        let t2 = Timestamp::from_unix(1679665409, 0);
        let u1 = g.generate_v6(Some(0xffff_ffff_ffff), Some(t1), Some(0x3fff));
        let u2 = g.generate_v6(Some(0), Some(t2), Some(0));
        assert!(u1 < u2);
        assert!(u1.to_string() < u2.to_string());
    }

    /// Generates sortable string representation by creation time
    #[test]
    fn generates_sortable_string_representation_by_creation_time() {
        let mut g = ThreadGen::default();
        let samples: Vec<Uuid> = (0..10_000u64)
            .map(|i| g.generate_v6(None, Some(Timestamp::from_unix(1_700_000_000 + i, 0)), None))
            .collect();
        for w in samples.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-6[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        let mut g = ThreadGen::default();
        for _ in 0..1_000 {
            assert!(re.is_match(&g.generate_v6(None, None, None).to_string()));
        }
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        let mut g = ThreadGen::default();
        let s: HashSet<Uuid> = (0..100_000)
            .map(|_| g.generate_v6(None, None, None))
            .collect();
        assert_eq!(s.len(), 100_000);
    }
}
