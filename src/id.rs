use std::{fmt, str};

use fstr::FStr;

use crate::{time::UUID_EPOCH_OFFSET, Error};

/// Represents a Universally Unique IDentifier.
///
/// The value is an immutable 128-bit quantity. Ordering, equality, and hashing are all defined on
/// the 16 big-endian bytes, which is the same as comparing the values as `u128`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Variant description of the NCS backward compatibility layout.
pub const RESERVED_NCS: &str = "reserved for NCS compatibility";

/// Variant description of the RFC 4122/9562 layout.
pub const RFC_4122: &str = "specified in RFC 4122";

/// Variant description of the Microsoft backward compatibility layout.
pub const RESERVED_MICROSOFT: &str = "reserved for Microsoft compatibility";

/// Variant description of the layout reserved for future definition.
pub const RESERVED_FUTURE: &str = "reserved for future definition";

/// The variant field that determines the layout of the rest of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    ReservedNcs,
    /// `10xx`: the layout specified in RFC 4122/9562.
    Rfc4122,
    /// `110x`: reserved for Microsoft backward compatibility.
    ReservedMicrosoft,
    /// `111x`: reserved for future definition.
    ReservedFuture,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReservedNcs => RESERVED_NCS,
            Self::Rfc4122 => RFC_4122,
            Self::ReservedMicrosoft => RESERVED_MICROSOFT,
            Self::ReservedFuture => RESERVED_FUTURE,
        })
    }
}

/// Whether a UUID was generated in a multiprocessing-safe way by the platform.
///
/// This library never asks the platform, so the answer is always [`SafeUuid::Unknown`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SafeUuid {
    /// Generated by the platform in a multiprocessing-safe way.
    Safe,
    /// Generated by the platform in a way that is not multiprocessing-safe.
    Unsafe,
    /// No information is available.
    Unknown,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte big-endian array without touching the version or variant.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a 128-bit unsigned integer without touching the version or variant.
    pub const fn from_u128(int: u128) -> Self {
        Self(int.to_be_bytes())
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the value as a 128-bit unsigned integer.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns a copy whose version nibble and variant bits are overwritten with `version` and
    /// the RFC 4122 variant. All the other bits are kept.
    pub(crate) const fn stamped(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is wider than its field.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Returns the first 32 bits.
    pub const fn time_low(&self) -> u32 {
        (self.as_u128() >> 96) as u32
    }

    /// Returns the next 16 bits after `time_low`.
    pub const fn time_mid(&self) -> u16 {
        (self.as_u128() >> 80) as u16
    }

    /// Returns the 16 bits that hold the version nibble.
    pub const fn time_hi_version(&self) -> u16 {
        (self.as_u128() >> 64) as u16
    }

    /// Returns the 8 bits that hold the variant.
    pub const fn clock_seq_hi_variant(&self) -> u8 {
        self.0[8]
    }

    /// Returns the 8 bits that follow `clock_seq_hi_variant`.
    pub const fn clock_seq_low(&self) -> u8 {
        self.0[9]
    }

    /// Returns the 14-bit clock sequence with the variant bits masked off.
    pub const fn clock_seq(&self) -> u16 {
        ((self.clock_seq_hi_variant() as u16 & 0x3f) << 8) | self.clock_seq_low() as u16
    }

    /// Returns the last 48 bits.
    pub const fn node(&self) -> u64 {
        (self.as_u128() & 0xffff_ffff_ffff) as u64
    }

    /// Returns the 60-bit count of 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
    ///
    /// The value is meaningful for version 1 and version 6 UUIDs only. The version 6 field order
    /// is undone if the version nibble says 6; any other UUID is read with the version 1 layout.
    pub const fn time(&self) -> u64 {
        let hi = (self.time_hi_version() & 0x0fff) as u64;
        let mid = self.time_mid() as u64;
        let low = self.time_low() as u64;
        if self.0[6] >> 4 == 6 && self.0[8] >> 6 == 0b10 {
            (low << 28) | (mid << 12) | hi
        } else {
            (hi << 48) | (mid << 32) | low
        }
    }

    /// Returns the variant of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::ReservedNcs,
            0b100 | 0b101 => Variant::Rfc4122,
            0b110 => Variant::ReservedMicrosoft,
            _ => Variant::ReservedFuture,
        }
    }

    /// Returns the version number if the UUID has the RFC 4122 variant or `None` otherwise.
    ///
    /// The nibble is returned as is, so unassigned values such as `0` or `15` may come out.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Rfc4122 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the Unix timestamp in milliseconds embedded in a version 1, 6, or 7 UUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTimeOrdered`] for the other versions and [`Error::PreUnixEpoch`] if a
    /// version 1 or 6 UUID records a moment before 1970.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Uuid;
    ///
    /// let x: Uuid = "018713dc-2800-7e9c-b1b5-36e3d44f6e7b".parse()?;
    /// assert_eq!(x.timestamp()?, 1679665408000);
    /// # Ok::<(), uuid_utils::Error>(())
    /// ```
    pub fn timestamp(&self) -> Result<u64, Error> {
        match self.version() {
            Some(1 | 6) => self
                .time()
                .checked_sub(UUID_EPOCH_OFFSET)
                .map(|ticks| ticks / 10_000)
                .ok_or(Error::PreUnixEpoch),
            Some(7) => Ok((self.as_u128() >> 80) as u64),
            version => Err(Error::NotTimeOrdered { version }),
        }
    }

    /// Always returns [`SafeUuid::Unknown`].
    pub const fn is_safe(&self) -> SafeUuid {
        SafeUuid::Unknown
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12 canonical hexadecimal string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Uuid;
    ///
    /// let x = "a8098c1a-f86e-11da-bd1a-00112444be1e".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(y.as_str(), "a8098c1a-f86e-11da-bd1a-00112444be1e");
    /// assert_eq!(format!("{}", y), "a8098c1a-f86e-11da-bd1a-00112444be1e");
    /// # Ok::<(), uuid_utils::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            for d in hex_digits(*e) {
                if let Some(slot) = buf_iter.next() {
                    *slot = d;
                }
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(slot) = buf_iter.next() {
                    *slot = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hexadecimal digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    pub fn hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (pair, e) in buffer.chunks_exact_mut(2).zip(self.0) {
            pair.copy_from_slice(&hex_digits(e));
        }
        // SAFETY: the buffer consists of ASCII hexadecimal digits only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the RFC 4122 URN form, e.g., `urn:uuid:a8098c1a-f86e-11da-bd1a-00112444be1e`.
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.encode())
    }
}

const fn hex_digits(byte: u8) -> [u8; 2] {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    [DIGITS[(byte >> 4) as usize], DIGITS[(byte & 15) as usize]]
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from a hexadecimal string representation.
    ///
    /// See [`Uuid::parse_str`] for the accepted forms.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{SafeUuid, Uuid, Variant};
    use crate::ErrorKind;

    const EXAMPLE: &str = "a8098c1a-f86e-11da-bd1a-00112444be1e";

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT12: u16 = (1 << 12) - 1;
        const MAX_UINT62: u64 = (1 << 62) - 1;

        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT12, 0), "00000000-0000-7fff-8000-000000000000"),
            ((0, 0, MAX_UINT62), "00000000-0000-7000-bfff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(from_fields.encode().as_str(), *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.hex().as_str(), text.replace('-', "").as_str());
            assert_eq!(from_fields.version(), Some(7));
            assert_eq!(from_fields.variant(), Variant::Rfc4122);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Exposes RFC fields of a known UUID
    #[test]
    fn exposes_rfc_fields_of_a_known_uuid() {
        let e: Uuid = EXAMPLE.parse().unwrap();
        assert_eq!(e.hex().as_str(), "a8098c1af86e11dabd1a00112444be1e");
        assert_eq!(e.as_u128(), 223359875637754765292326297443183672862);
        assert_eq!(e.time_low(), 2819197978);
        assert_eq!(e.time_mid(), 63598);
        assert_eq!(e.time_hi_version(), 4570);
        assert_eq!(e.clock_seq_hi_variant(), 189);
        assert_eq!(e.clock_seq_low(), 26);
        assert_eq!(e.node(), 73622928926);
        assert_eq!(e.clock_seq(), 15642);
        assert_eq!(e.time(), 133692293110139930);
        assert_eq!(e.version(), Some(1));
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.urn(), "urn:uuid:a8098c1a-f86e-11da-bd1a-00112444be1e");
        assert_eq!(e.is_safe(), SafeUuid::Unknown);
    }

    /// Classifies variants by the top bits of byte 8
    #[test]
    fn classifies_variants_by_the_top_bits_of_byte_8() {
        let cases = [
            (0x00, Variant::ReservedNcs),
            (0x7f, Variant::ReservedNcs),
            (0x80, Variant::Rfc4122),
            (0xbf, Variant::Rfc4122),
            (0xc0, Variant::ReservedMicrosoft),
            (0xdf, Variant::ReservedMicrosoft),
            (0xe0, Variant::ReservedFuture),
            (0xff, Variant::ReservedFuture),
        ];

        for (byte, variant) in cases {
            let mut bytes = [0x11u8; 16];
            bytes[8] = byte;
            let e = Uuid::from(bytes);
            assert_eq!(e.variant(), variant);
            assert_eq!(e.version().is_some(), variant == Variant::Rfc4122);
        }

        assert_eq!(Variant::Rfc4122.to_string(), "specified in RFC 4122");
        assert_eq!(
            Variant::ReservedMicrosoft.to_string(),
            "reserved for Microsoft compatibility"
        );
    }

    /// Extracts timestamps from time-ordered versions only
    #[test]
    fn extracts_timestamps_from_time_ordered_versions_only() {
        let v7: Uuid = "018713dc-2800-7e9c-b1b5-36e3d44f6e7b".parse().unwrap();
        assert_eq!(v7.timestamp(), Ok(1679665408000));

        let v1: Uuid = "f3b4958c-52a1-11e7-802a-010203040506".parse().unwrap();
        assert_eq!(v1.timestamp(), Ok(1497624119000));

        let v6: Uuid = "1e752a1f-3b49-658c-802a-010203040506".parse().unwrap();
        assert_eq!(v6.time(), v1.time());
        assert_eq!(v6.timestamp(), Ok(1497624119000));

        let v4: Uuid = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse().unwrap();
        assert_eq!(
            v4.timestamp().unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );

        let ancient = Uuid::stamped([0; 16], 1);
        assert_eq!(
            ancient.timestamp().unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    /// Orders and hashes by the 128-bit value
    #[test]
    fn orders_and_hashes_by_the_128_bit_value() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |e: &Uuid| {
            let mut h = DefaultHasher::new();
            e.hash(&mut h);
            h.finish()
        };

        let x = Uuid::from(*b"1234567812345678");
        let y = Uuid::from(*b"1234567812345678");
        assert_eq!(x, y);
        assert_eq!(hash(&x), hash(&y));

        let mut values: Vec<u128> = (0..1_000).map(|_| rand::random()).collect();
        values.extend([0, 1, u128::MAX, 1 << 127, (1 << 127) - 1]);
        for w in values.windows(2) {
            let (a, b) = (Uuid::from(w[0]), Uuid::from(w[1]));
            assert_eq!(a.cmp(&b), w[0].cmp(&w[1]));
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(Uuid::NIL.encode().as_str(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(Uuid::MAX.encode().as_str(), "ffffffff-ffff-ffff-ffff-ffffffffffff");
        assert_eq!(Uuid::NIL.variant(), Variant::ReservedNcs);
        assert_eq!(Uuid::MAX.variant(), Variant::ReservedFuture);
        assert_eq!(Uuid::MAX.version(), None);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(&e.as_bytes()[..]), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
