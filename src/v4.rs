//! UUIDv4-related functionality

use crate::{
    generator::{Generator, RandSource},
    time::TimeSource,
    Uuid,
};

impl Uuid {
    /// Creates a version 4 UUID from 16 random bytes.
    ///
    /// The bits displaced by the version and variant fields are shifted down rather than
    /// discarded, so every input bit except the lowest six of bytes 6 and 8 survives.
    pub const fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] >> 4);
        bytes[8] = 0x80 | (bytes[8] >> 2);
        Self::from_bytes(bytes)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv4 object utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_random_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::tests::ThreadGen;
    use crate::{ErrorKind, Uuid, Variant};

    const N_SAMPLES: usize = 200_000;
    thread_local!(static SAMPLES: Vec<String> = {
        let mut g = ThreadGen::default();
        (0..N_SAMPLES).map(|_| g.generate_v4().into()).collect()
    });

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 200k identifiers without collision
    #[test]
    fn generates_200k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Refuses timestamp of random UUID
    #[test]
    fn refuses_timestamp_of_random_uuid() {
        let e = ThreadGen::default().generate_v4();
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.version(), Some(4));
        let err = e.timestamp().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert_eq!(
            err.to_string(),
            "UUID version should be one of (v1, v6 or v7), found 4"
        );
    }

    /// Stamps version over arbitrary bytes
    #[test]
    fn stamps_version_over_arbitrary_bytes() {
        assert_eq!(
            Uuid::from_random_bytes([0xff; 16]).to_string(),
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );
        assert_eq!(
            Uuid::from_random_bytes([0x00; 16]).to_string(),
            "00000000-0000-4000-8000-000000000000"
        );
    }
}
