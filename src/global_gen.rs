//! Process-wide generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Timestamp, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// A panic raised while the lock is held (e.g., by an out-of-range `node` argument) leaves the
/// state consistent, so a poisoned lock is recovered rather than propagated.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// `node` defaults to [`getnode`](crate::getnode) and `clock_seq` to the process-wide clock
/// sequence, which is randomly initialized and incremented whenever the clock does not advance.
///
/// # Panics
///
/// Panics if `node` is not a 48-bit integer or `clock_seq` is not a 14-bit integer.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_utils::uuid1(None, None);
/// println!("{uuid}"); // e.g., "a8098c1a-f86e-11da-bd1a-00112444be1e"
/// assert_eq!(uuid.node(), uuid_utils::getnode());
/// ```
pub fn uuid1(node: Option<u64>, clock_seq: Option<u16>) -> Uuid {
    lock_global_gen().get_mut().generate_v1(node, clock_seq)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_utils::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

/// Generates a UUIDv6 object from `timestamp` or, if `None`, from the current time.
///
/// The clock sequence and node are shared with [`uuid1`].
///
/// # Panics
///
/// Panics if `node` is not a 48-bit integer, `clock_seq` is not a 14-bit integer, or
/// `timestamp` is beyond the 60-bit RFC 4122 range. [`Timestamp::try_from_unix`] only returns
/// timestamps within that range.
///
/// # Examples
///
/// ```rust
/// use uuid_utils::{uuid6, Timestamp};
///
/// let x = uuid6(None, Some(Timestamp::from_unix(1679665408, 0)), None);
/// let y = uuid6(None, Some(Timestamp::from_unix(1679665409, 0)), None);
/// assert!(x < y);
/// ```
pub fn uuid6(node: Option<u64>, timestamp: Option<Timestamp>, clock_seq: Option<u16>) -> Uuid {
    lock_global_gen()
        .get_mut()
        .generate_v6(node, timestamp, clock_seq)
}

/// Generates a UUIDv7 object.
///
/// Without `timestamp`, this function reads the current time and guarantees the process-wide
/// monotonic order of UUIDs generated within the same millisecond. With `timestamp` (Unix
/// seconds), the result is built from that moment alone and does not take part in the
/// monotonic sequence. The sub-millisecond fraction of `nanos`, if given, fills the 12 bits that
/// follow the version so that such UUIDs sort within a millisecond; otherwise those bits are
/// random. `nanos` is ignored if `timestamp` is `None`.
///
/// On Unix, the generator is reset when the process ID changes (i.e., upon process forks) to
/// prevent collisions across processes.
///
/// # Panics
///
/// Panics if `nanos` is not less than one billion or `timestamp` is beyond the 48-bit
/// millisecond range. Use [`Timestamp::try_from_unix`] to reject such arguments beforehand.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_utils::uuid7(None, None);
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid = uuid_utils::uuid7(Some(1679665408), None);
/// assert_eq!(uuid.timestamp(), Ok(1679665408000));
/// ```
pub fn uuid7(timestamp: Option<u64>, nanos: Option<u32>) -> Uuid {
    let mut g = lock_global_gen();
    match timestamp {
        Some(seconds) => g.get_mut().generate_v7_at(seconds, nanos),
        None => g.get_mut().generate_v7(),
    }
}

/// Reinitializes the process-wide generator: the random number generator is reseeded from the
/// operating system, and the clock sequence and version 7 counter start over from fresh random
/// values.
///
/// The generator already does this by itself on Unix when it notices a new process ID. This
/// function lets host code that manages processes (or anything else that clones memory state)
/// do so explicitly.
pub fn reseed() {
    lock_global_gen().reseed();
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, RandSource};

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuid_utils: could not initialize global generator");
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn next_u64(&mut self) -> u64 {
            rand::RngCore::next_u64(&mut self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pub(super) pid: u32,
        pub(super) generator: Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(GlobalGenRng::new()),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!(
                    target: "uuid_utils",
                    "process ID changed from {}; resetting global generator",
                    self.pid
                );
                *self = Default::default();
            }
            &mut self.generator
        }

        /// Replaces the generator with a freshly seeded one.
        pub fn reseed(&mut self) {
            log::debug!(target: "uuid_utils", "reseeding global generator");
            *self = Default::default();
        }
    }
}
