//! Name-based UUIDs (versions 3 and 5) and the well-known namespaces.

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::Uuid;

/// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_DNS: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_URL: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_OID: Uuid = Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for X.500 DNs in DER or text format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_X500: Uuid = Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

impl Uuid {
    /// Creates a version 3 UUID from the first 16 bytes of an MD5 digest, overwriting the
    /// version and variant bits.
    pub const fn from_md5_bytes(md5_bytes: [u8; 16]) -> Self {
        Self::stamped(md5_bytes, 3)
    }

    /// Creates a version 5 UUID from the first 16 bytes of a SHA-1 digest, overwriting the
    /// version and variant bits.
    pub const fn from_sha1_bytes(sha1_bytes: [u8; 16]) -> Self {
        Self::stamped(sha1_bytes, 5)
    }

    /// Creates a version 3 UUID from the MD5 hash of `namespace` followed by `name`.
    pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::from_md5_bytes(digest_prefix::<Md5>(namespace, name.as_ref()))
    }

    /// Creates a version 5 UUID from the SHA-1 hash of `namespace` followed by `name`.
    pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::from_sha1_bytes(digest_prefix::<Sha1>(namespace, name.as_ref()))
    }
}

/// Hashes the namespace bytes and the name, returning the leading 16 bytes of the digest.
fn digest_prefix<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Generates a UUIDv3 object from a namespace and a name, which may be text or raw bytes.
///
/// # Examples
///
/// ```rust
/// use uuid_utils::{uuid3, NAMESPACE_DNS};
///
/// let uuid = uuid3(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::new_v3(namespace, name)
}

/// Generates a UUIDv5 object from a namespace and a name, which may be text or raw bytes.
///
/// # Examples
///
/// ```rust
/// use uuid_utils::{uuid5, NAMESPACE_DNS};
///
/// let uuid = uuid5(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::new_v5(namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    /// Formats well-known namespaces
    #[test]
    fn formats_well_known_namespaces() {
        let cases = [
            (NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];
        for (e, text) in cases {
            assert_eq!(e.to_string(), text);
            assert_eq!(e.version(), Some(1));
        }
    }

    /// Reproduces known version 3 and version 5 values
    #[test]
    fn reproduces_known_version_3_and_version_5_values() {
        assert_eq!(
            uuid3(&NAMESPACE_DNS, "python.org").to_string(),
            "6fa459ea-ee8a-3ca4-894e-db77e160355e"
        );
        assert_eq!(
            uuid5(&NAMESPACE_DNS, "python.org").to_string(),
            "886313e1-3b8a-5372-9b90-0c9aee199e5d"
        );
        assert_eq!(
            uuid3(&NAMESPACE_URL, "http://example.com/").to_string(),
            "773536a8-4b7b-383d-9106-697d4d366254"
        );
        assert_eq!(
            uuid5(&NAMESPACE_OID, "1.3.6.1").to_string(),
            "1447fa61-5277-5fef-a9b3-fbc6e44f4af3"
        );
    }

    /// Returns identical values for identical inputs
    #[test]
    fn returns_identical_values_for_identical_inputs() {
        for name in ["", "python.org", "日本語", "a\0b"] {
            assert_eq!(uuid3(&NAMESPACE_DNS, name), uuid3(&NAMESPACE_DNS, name));
            assert_eq!(uuid5(&NAMESPACE_DNS, name), uuid5(&NAMESPACE_DNS, name));
            assert_eq!(
                uuid5(&NAMESPACE_DNS, name),
                uuid5(&NAMESPACE_DNS, name.as_bytes())
            );
        }
    }

    /// Separates names by namespace
    #[test]
    fn separates_names_by_namespace() {
        let namespaces = [NAMESPACE_DNS, NAMESPACE_URL, NAMESPACE_OID, NAMESPACE_X500];
        for (i, a) in namespaces.iter().enumerate() {
            for b in &namespaces[i + 1..] {
                assert_ne!(uuid3(a, "example"), uuid3(b, "example"));
                assert_ne!(uuid5(a, "example"), uuid5(b, "example"));
            }
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for i in 0..1_000 {
            let name = i.to_string();
            let e3 = uuid3(&NAMESPACE_URL, &name);
            assert_eq!(e3.variant(), Variant::Rfc4122);
            assert_eq!(e3.version(), Some(3));

            let e5 = uuid5(&NAMESPACE_URL, &name);
            assert_eq!(e5.variant(), Variant::Rfc4122);
            assert_eq!(e5.version(), Some(5));
        }
    }
}
