//! Generation and parsing of RFC 4122/9562 UUIDs, versions 1 and 3 through 8
//!
//! ```rust
//! use uuid_utils::{uuid4, uuid5, uuid7, Uuid, NAMESPACE_DNS};
//!
//! let uuid = uuid7(None, None);
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid: Uuid = "a8098c1a-f86e-11da-bd1a-00112444be1e".parse()?;
//! assert_eq!(uuid.version(), Some(1));
//! assert_eq!(uuid.hex().as_str(), "a8098c1af86e11dabd1a00112444be1e");
//!
//! assert_eq!(uuid5(&NAMESPACE_DNS, "python.org"), uuid5(&NAMESPACE_DNS, "python.org"));
//! assert_ne!(uuid4(), uuid4());
//! # Ok::<(), uuid_utils::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Constructing from other representations
//!
//! [`UuidArgs`] accepts exactly one of the hexadecimal string, big-endian bytes, little-endian
//! bytes, six-field tuple, or 128-bit integer representations, plus an optional version
//! assertion. The little-endian form swaps only the byte order of the first three fields
//! (`time_low`, `time_mid`, and `time_hi_version`), following the in-memory layout of Microsoft
//! GUIDs.
//!
//! # Field and bit layout
//!
//! Version 1 and version 6 UUIDs carry a 60-bit count of 100-nanosecond intervals since
//! 1582-10-15 00:00:00 UTC, a 14-bit clock sequence, and a 48-bit node identifier. Version 1
//! places the least significant 32 bits of the timestamp first, while version 6 places the most
//! significant bits first so that the byte order agrees with the chronological order:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Version 7 UUIDs produced from the current time have the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        counter                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 42-bit `counter` field accommodates the sequence counter that ensures the
//!   monotonic order of IDs generated within the same millisecond. The counter is
//!   incremented by one for each new ID generated within the same timestamp and is
//!   randomly initialized whenever the `unix_ts_ms` changes.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 32 `rand` bits are filled with a cryptographically strong random
//!   number.
//!
//! In the very rare circumstances where the 42-bit `counter` field reaches the
//! maximum value and can no more be incremented within the same timestamp, this
//! library increments the `unix_ts_ms`; therefore, the `unix_ts_ms` may have a
//! larger value than that of the real-time clock. If the system clock moves back
//! more than ten seconds, this library resets the generator state and thus breaks
//! the monotonic order of generated identifiers. A version 7 UUID built from an
//! explicit timestamp does not use the counter: the 12 bits after `ver` hold the
//! sub-millisecond fraction of the nanoseconds if given, or random bits otherwise,
//! and the rest are random.
//!
//! # Crate features
//!
//! - `global_gen` (default): the process-wide generator behind [`uuid1`], [`uuid4`],
//!   [`uuid6`], [`uuid7`], and [`reseed`].
//! - `mac_address` (default): hardware address lookup for [`getnode`].
//! - `serde`: serialization as a string or as 16 bytes.
//! - `uuid`: conversions from and to [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod clock;
mod codec;
mod error;
mod id;
mod name;
mod node;
mod time;

pub mod generator;

mod v1;
mod v4;
mod v6;
mod v7;
mod v8;

mod global_gen;

pub use clock::ClockState;
pub use codec::{Fields, Source, UuidArgs};
pub use error::{Error, ErrorKind};
pub use generator::{Generator, RandSource};
pub use id::{
    SafeUuid, Uuid, Variant, RESERVED_FUTURE, RESERVED_MICROSOFT, RESERVED_NCS, RFC_4122,
};
pub use name::{uuid3, uuid5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
pub use node::{getnode, random_node};
pub use time::{StdSystemTime, TimeSource, Timestamp, UUID_EPOCH_OFFSET};
pub use v8::uuid8;

#[cfg(feature = "global_gen")]
pub use global_gen::{reseed, uuid1, uuid4, uuid6, uuid7};
