//! UUID generator and related types.

use crate::{
    clock::ClockState,
    node::getnode,
    time::{StdSystemTime, TimeSource, Timestamp},
};

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUID generator that owns all the mutable state needed by the time-based and
/// random versions: the [`ClockState`] of versions 1 and 6, the counter that keeps version 7
/// UUIDs monotonic within a millisecond, the random number generator, and the system clock.
///
/// This type provides the interface to customize the random number generator and system clock.
/// It also helps control the scope of guaranteed uniqueness and order of the generated UUIDs. The
/// following example shares one generator across threads, serializing every clock sequence
/// update behind a single lock.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid_utils::Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v1(None, None), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    pub(crate) clock: Option<ClockState>,
    pub(crate) v7_timestamp: u64,
    pub(crate) v7_counter: u64,

    /// The random number generator used by the generator.
    pub(crate) rng: R,

    /// The system clock used by the generator.
    pub(crate) time_source: T,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance that reads [`StdSystemTime`].
    pub const fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator instance with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rng: R, time_source: T) -> Self {
        Self {
            clock: None,
            v7_timestamp: 0,
            v7_counter: 0,
            rng,
            time_source,
        }
    }

    /// Replaces the clock sequence state, which is otherwise initialized on the first version 1
    /// or version 6 generation with a random clock sequence and the node identifier returned by
    /// [`getnode`](crate::getnode).
    pub fn with_clock_state(mut self, state: ClockState) -> Self {
        self.clock = Some(state);
        self
    }

    /// Returns the clock sequence state if it has been initialized.
    pub const fn clock_state(&self) -> Option<&ClockState> {
        self.clock.as_ref()
    }

    /// Forgets the clock sequence state and the version 7 counter, so that the next generations
    /// start over from fresh random values.
    pub fn reset(&mut self) {
        self.clock = None;
        self.v7_timestamp = 0;
        self.v7_counter = 0;
    }

    /// Resolves the timestamp, clock sequence, and node of a version 1 or version 6 UUID,
    /// updating the clock sequence state.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit integer or `clock_seq` is not a 14-bit integer.
    pub(crate) fn rfc4122_time_fields(
        &mut self,
        timestamp: Option<Timestamp>,
        node: Option<u64>,
        clock_seq: Option<u16>,
    ) -> (u64, u16, u64) {
        assert!(
            node.map_or(true, |e| e < 1 << 48),
            "`node` must be a 48-bit integer"
        );
        assert!(
            clock_seq.map_or(true, |e| e < 1 << 14),
            "`clock_seq` must be a 14-bit integer"
        );

        let ticks = timestamp
            .unwrap_or_else(|| self.time_source.now())
            .to_rfc4122_ticks();

        let rng = &mut self.rng;
        let state = self.clock.get_or_insert_with(|| {
            let state = ClockState::new((rng.next_u32() & 0x3fff) as u16, getnode());
            log::debug!(target: "uuid_utils", "initialized clock state: {state:?}");
            state
        });

        let clock_seq = match clock_seq {
            Some(e) => {
                state.observe(ticks);
                e
            }
            None => state.next_clock_seq(ticks),
        };
        (ticks, clock_seq, node.unwrap_or(state.node_id()))
    }
}
