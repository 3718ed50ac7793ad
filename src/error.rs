//! Error type shared by the parsing and validation paths.

/// Error produced when a UUID cannot be constructed from the given input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// Malformed hexadecimal string representation.
    #[error("badly formed hexadecimal UUID string")]
    InvalidString,

    /// Byte representation whose length is not 16.
    #[error("bytes is not a 16-char string (found {found} bytes)")]
    InvalidLength { found: usize },

    /// Field value wider than the field it is assigned to.
    #[error("field {field} out of range (got {value}, need {bits} bits)")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        bits: u32,
    },

    /// None of the accepted representations was given.
    #[error("one of the hex, bytes, bytes_le, fields, or int arguments must be given")]
    NoSource,

    /// More than one representation was given.
    #[error("only one of the hex, bytes, bytes_le, fields, or int arguments may be given")]
    MultipleSources,

    /// Version number outside `1..=8`.
    #[error("illegal version number {0}")]
    IllegalVersion(u8),

    /// Version that differs from the one asserted by the caller.
    #[error("expected version {expected}, found {}", display_version(.found))]
    VersionMismatch { expected: u8, found: Option<u8> },

    /// Timestamp requested from a UUID that carries none.
    #[error("UUID version should be one of (v1, v6 or v7), found {}", display_version(.version))]
    NotTimeOrdered { version: Option<u8> },

    /// Timestamp that cannot be expressed in milliseconds since the Unix epoch.
    #[error("embedded timestamp predates the Unix epoch")]
    PreUnixEpoch,
}

/// Broad category of an [`Error`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed text, byte length, or field value.
    Format,
    /// Zero or several source representations.
    Construction,
    /// Asserted or requested version not acceptable.
    VersionMismatch,
    /// Operation not defined for the UUID's version.
    UnsupportedOperation,
}

impl Error {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidString | Self::InvalidLength { .. } | Self::FieldOutOfRange { .. } => {
                ErrorKind::Format
            }
            Self::NoSource | Self::MultipleSources => ErrorKind::Construction,
            Self::IllegalVersion(_) | Self::VersionMismatch { .. } => ErrorKind::VersionMismatch,
            Self::NotTimeOrdered { .. } | Self::PreUnixEpoch => ErrorKind::UnsupportedOperation,
        }
    }
}

fn display_version(version: &Option<u8>) -> String {
    match version {
        Some(v) => v.to_string(),
        None => "none (non-RFC variant)".to_owned(),
    }
}
