//! Conversions between [`Uuid`] and its external representations.

use crate::{Error, Uuid};

/// The six RFC 4122 fields of a UUID, from the most significant to the least.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    pub time_low: u32,
    pub time_mid: u16,
    pub time_hi_version: u16,
    pub clock_seq_hi_variant: u8,
    pub clock_seq_low: u8,
    /// 48-bit node; larger values are rejected by [`Uuid::from_fields`].
    pub node: u64,
}

impl From<(u32, u16, u16, u8, u8, u64)> for Fields {
    fn from(src: (u32, u16, u16, u8, u8, u64)) -> Self {
        Self {
            time_low: src.0,
            time_mid: src.1,
            time_hi_version: src.2,
            clock_seq_hi_variant: src.3,
            clock_seq_low: src.4,
            node: src.5,
        }
    }
}

impl From<Fields> for (u32, u16, u16, u8, u8, u64) {
    fn from(src: Fields) -> Self {
        (
            src.time_low,
            src.time_mid,
            src.time_hi_version,
            src.clock_seq_hi_variant,
            src.clock_seq_low,
            src.node,
        )
    }
}

/// One external representation to build a [`Uuid`] from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Source<'a> {
    /// Hexadecimal text; see [`Uuid::parse_str`].
    Hex(&'a str),
    /// 16 bytes in big-endian order.
    Bytes(&'a [u8]),
    /// 16 bytes in the mixed-endian layout of [`Uuid::to_bytes_le`].
    BytesLe(&'a [u8]),
    /// The six RFC 4122 fields.
    Fields(Fields),
    /// A 128-bit unsigned integer.
    Int(u128),
}

/// Keyword-style construction arguments for binding layers, at most one representation of which
/// may be set.
///
/// # Examples
///
/// ```rust
/// use uuid_utils::{UuidArgs, ErrorKind};
///
/// let x = UuidArgs {
///     hex: Some("a8098c1a-f86e-11da-bd1a-00112444be1e"),
///     version: Some(1),
///     ..Default::default()
/// }
/// .build()?;
/// assert_eq!(x.time_low(), 0xa8098c1a);
///
/// let err = UuidArgs::default().build().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Construction);
/// # Ok::<(), uuid_utils::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct UuidArgs<'a> {
    pub hex: Option<&'a str>,
    pub bytes: Option<&'a [u8]>,
    pub bytes_le: Option<&'a [u8]>,
    pub fields: Option<Fields>,
    pub int: Option<u128>,
    /// Version the constructed UUID is asserted to have.
    pub version: Option<u8>,
}

impl<'a> UuidArgs<'a> {
    /// Picks the single representation set in the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSource`] or [`Error::MultipleSources`] if not exactly one is set.
    pub fn source(&self) -> Result<Source<'a>, Error> {
        let mut found = None;
        let candidates = [
            self.hex.map(Source::Hex),
            self.bytes.map(Source::Bytes),
            self.bytes_le.map(Source::BytesLe),
            self.fields.map(Source::Fields),
            self.int.map(Source::Int),
        ];
        for src in candidates.into_iter().flatten() {
            if found.replace(src).is_some() {
                return Err(Error::MultipleSources);
            }
        }
        found.ok_or(Error::NoSource)
    }

    /// Builds a UUID from the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if not exactly one representation is set, the representation is
    /// malformed, or the version assertion fails.
    pub fn build(&self) -> Result<Uuid, Error> {
        Uuid::from_source(self.source()?, self.version)
    }
}

impl Uuid {
    /// Creates a UUID from one of its external representations, optionally asserting its
    /// version.
    ///
    /// No bits are modified; an `expected_version` is checked against the parsed value only.
    ///
    /// # Errors
    ///
    /// Returns a format error if the representation is malformed, [`Error::IllegalVersion`] if
    /// `expected_version` is not in `1..=8`, or [`Error::VersionMismatch`] if the parsed UUID
    /// carries another version.
    pub fn from_source(src: Source<'_>, expected_version: Option<u8>) -> Result<Self, Error> {
        let value = match src {
            Source::Hex(text) => Self::parse_str(text)?,
            Source::Bytes(bytes) => Self::from_slice(bytes)?,
            Source::BytesLe(bytes) => Self::from_slice_le(bytes)?,
            Source::Fields(fields) => Self::from_fields(fields)?,
            Source::Int(int) => Self::from_u128(int),
        };

        match expected_version {
            Some(expected) => value.check_version(expected).map(|_| value),
            None => Ok(value),
        }
    }

    /// Ensures the UUID has the RFC 4122 variant and version `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalVersion`] if `expected` is not in `1..=8` or
    /// [`Error::VersionMismatch`] if the UUID carries another version.
    pub fn check_version(&self, expected: u8) -> Result<(), Error> {
        if !(1..=8).contains(&expected) {
            return Err(Error::IllegalVersion(expected));
        }
        match self.version() {
            Some(v) if v == expected => Ok(()),
            found => Err(Error::VersionMismatch { expected, found }),
        }
    }

    /// Returns a copy with the version nibble set to `version` and the variant set to RFC 4122.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalVersion`] if `version` is not in `1..=8`.
    pub fn with_version(&self, version: u8) -> Result<Self, Error> {
        if (1..=8).contains(&version) {
            Ok(Self::stamped(*self.as_bytes(), version))
        } else {
            Err(Error::IllegalVersion(version))
        }
    }

    /// Parses a hexadecimal string representation.
    ///
    /// The 32 hexadecimal digits are accepted in either case, either with no hyphens or with the
    /// 8-4-4-4-12 hyphens, optionally wrapped in braces or prefixed with `urn:uuid:`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidString`] for any other input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_utils::Uuid;
    ///
    /// let x = Uuid::parse_str("a8098c1a-f86e-11da-bd1a-00112444be1e")?;
    /// assert_eq!(Uuid::parse_str("A8098C1AF86E11DABD1A00112444BE1E")?, x);
    /// assert_eq!(Uuid::parse_str("{a8098c1a-f86e-11da-bd1a-00112444be1e}")?, x);
    /// assert_eq!(Uuid::parse_str("urn:uuid:a8098c1a-f86e-11da-bd1a-00112444be1e")?, x);
    /// assert!(Uuid::parse_str("0-0-0-0-0").is_err());
    /// # Ok::<(), uuid_utils::Error>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, Error> {
        const ERR: Error = Error::InvalidString;
        const PREFIX: &str = "urn:uuid:";

        let mut text = src.as_bytes();
        if text.len() > PREFIX.len() && text[..PREFIX.len()].eq_ignore_ascii_case(PREFIX.as_bytes())
        {
            text = &text[PREFIX.len()..];
        } else if let [b'{', inner @ .., b'}'] = text {
            text = inner;
        }

        let hyphenated = match text.len() {
            32 => false,
            36 => true,
            _ => return Err(ERR),
        };

        let mut dst = [0u8; 16];
        let mut iter = text.iter();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = hex_value(*iter.next().ok_or(ERR)?).ok_or(ERR)?;
            let lo = hex_value(*iter.next().ok_or(ERR)?).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            if hyphenated && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self::from_bytes(dst))
        } else {
            Err(ERR)
        }
    }

    /// Creates a UUID from a big-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice is not 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| Error::InvalidLength { found: bytes.len() })
    }

    /// Creates a UUID from a mixed-endian byte slice; see [`Uuid::from_bytes_le`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice is not 16 bytes long.
    pub fn from_slice_le(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self::from_bytes_le)
            .map_err(|_| Error::InvalidLength { found: bytes.len() })
    }

    /// Creates a UUID from the mixed-endian layout used by Microsoft GUIDs, in which
    /// `time_low`, `time_mid`, and `time_hi_version` are stored in little-endian order and the
    /// remaining 8 bytes are stored as is.
    pub const fn from_bytes_le(b: [u8; 16]) -> Self {
        Self::from_bytes([
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15],
        ])
    }

    /// Returns the mixed-endian byte layout; see [`Uuid::from_bytes_le`].
    pub const fn to_bytes_le(&self) -> [u8; 16] {
        let b = self.as_bytes();
        [
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15],
        ]
    }

    /// Creates a UUID from the six RFC 4122 fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldOutOfRange`] if `node` does not fit in 48 bits.
    pub fn from_fields(fields: Fields) -> Result<Self, Error> {
        if fields.node >= 1 << 48 {
            return Err(Error::FieldOutOfRange {
                field: "node",
                value: fields.node,
                bits: 48,
            });
        }

        Ok(Self::from_u128(
            (fields.time_low as u128) << 96
                | (fields.time_mid as u128) << 80
                | (fields.time_hi_version as u128) << 64
                | (fields.clock_seq_hi_variant as u128) << 56
                | (fields.clock_seq_low as u128) << 48
                | fields.node as u128,
        ))
    }

    /// Returns the six RFC 4122 fields.
    pub const fn fields(&self) -> Fields {
        Fields {
            time_low: self.time_low(),
            time_mid: self.time_mid(),
            time_hi_version: self.time_hi_version(),
            clock_seq_hi_variant: self.clock_seq_hi_variant(),
            clock_seq_low: self.clock_seq_low(),
            node: self.node(),
        }
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
