//! UUIDv8-related functionality

use crate::Uuid;

impl Uuid {
    /// Creates a version 8 UUID from custom bytes, overwriting the version and variant bits and
    /// keeping the other 122 bits as given.
    pub const fn new_v8(bytes: [u8; 16]) -> Self {
        Self::stamped(bytes, 8)
    }
}

/// Generates a UUIDv8 object from 16 custom bytes.
///
/// No randomness or clock is involved: the result is a pure function of `bytes`.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_utils::uuid8(*b"1234567812345678");
/// assert_eq!(uuid.to_string(), "31323334-3536-8738-b132-333435363738");
/// ```
pub fn uuid8(bytes: [u8; 16]) -> Uuid {
    Uuid::new_v8(bytes)
}
