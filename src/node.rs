//! Node identifier acquisition for the version 1 and version 6 generators.

use std::sync::OnceLock;

use crate::generator::{with_rand08::Adapter, RandSource};

/// Returns the 48-bit node identifier of this host, looking it up on the first call and returning
/// the cached value afterwards.
///
/// The hardware address of a network interface is used if one is found (requires the
/// `mac_address` crate feature). Otherwise, a random 48-bit number with the multicast bit set is
/// drawn so that it never collides with a real hardware address.
///
/// # Examples
///
/// ```rust
/// let node = uuid_utils::getnode();
/// assert!(node < 1 << 48);
/// assert_eq!(node, uuid_utils::getnode());
/// ```
pub fn getnode() -> u64 {
    static NODE: OnceLock<u64> = OnceLock::new();
    *NODE.get_or_init(|| {
        lookup_hardware_node().unwrap_or_else(|| random_node(&mut Adapter(rand::rngs::OsRng)))
    })
}

/// Draws a random node identifier with the multicast bit set.
pub fn random_node<R: RandSource + ?Sized>(rng: &mut R) -> u64 {
    let mut bytes = [0u8; 6];
    rng.fill_bytes(&mut bytes);
    bytes[0] |= 0x01;
    let node = u64_from_node_bytes(bytes);
    log::debug!(target: "uuid_utils", "using random node id {node:012x}");
    node
}

/// Packs the 6 bytes of a hardware address in network order.
const fn u64_from_node_bytes(b: [u8; 6]) -> u64 {
    u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
}

#[cfg(feature = "mac_address")]
fn lookup_hardware_node() -> Option<u64> {
    match mac_address::get_mac_address() {
        Ok(Some(addr)) => {
            let node = u64_from_node_bytes(addr.bytes());
            log::trace!(target: "uuid_utils", "found hardware node id {node:012x}");
            Some(node)
        }
        Ok(None) => {
            log::debug!(target: "uuid_utils", "no hardware address available for node id");
            None
        }
        Err(err) => {
            log::debug!(target: "uuid_utils", "could not look up hardware address: {err}");
            None
        }
    }
}

#[cfg(not(feature = "mac_address"))]
const fn lookup_hardware_node() -> Option<u64> {
    None
}
