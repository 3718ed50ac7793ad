//! Clock sequence state shared by the version 1 and version 6 generators.

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Represents the state that keeps version 1 and version 6 UUIDs distinct within a process: the
/// last timestamp used, the 14-bit clock sequence, and the cached node identifier.
///
/// The clock sequence is incremented whenever a timestamp does not advance past the last one,
/// so two UUIDs minted in the same 100-nanosecond tick (or after a clock rollback) still differ.
/// The state is not synchronized by itself; wrap the owning
/// [`Generator`](crate::Generator) in a `Mutex` to share it across threads.
///
/// # Examples
///
/// ```rust
/// use uuid_utils::ClockState;
///
/// let mut state = ClockState::new(0x3fff, 0x0102_0304_0506);
/// assert_eq!(state.next_clock_seq(100), 0x3fff);
/// assert_eq!(state.next_clock_seq(100), 0); // wraps around in 14 bits
/// assert_eq!(state.next_clock_seq(101), 0);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClockState {
    last_timestamp: u64,
    clock_seq: u16,
    node_id: u64,
}

impl ClockState {
    /// Creates a state with an initial clock sequence and a node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `clock_seq` is not a 14-bit integer or `node_id` is not a 48-bit integer.
    pub const fn new(clock_seq: u16, node_id: u64) -> Self {
        assert!(
            clock_seq <= MAX_CLOCK_SEQ,
            "`clock_seq` must be a 14-bit integer"
        );
        assert!(node_id < 1 << 48, "`node_id` must be a 48-bit integer");
        Self {
            last_timestamp: 0,
            clock_seq,
            node_id,
        }
    }

    /// Returns the clock sequence to use with the RFC 4122 timestamp `ticks`, incrementing it if
    /// `ticks` does not advance past the previous call's.
    pub fn next_clock_seq(&mut self, ticks: u64) -> u16 {
        self.observe(ticks);
        self.clock_seq
    }

    /// Records `ticks` as the latest timestamp without reading the clock sequence, incrementing
    /// it if `ticks` does not advance.
    ///
    /// This is used when the caller supplies its own clock sequence, so that the running
    /// sequence still moves past a tick that has already been used.
    pub fn observe(&mut self, ticks: u64) {
        if self.last_timestamp != 0 && ticks <= self.last_timestamp {
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
            log::trace!(
                target: "uuid_utils",
                "timestamp did not advance; clock sequence bumped to {}",
                self.clock_seq
            );
        }
        self.last_timestamp = ticks;
    }

    /// Returns the last timestamp recorded.
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Returns the current clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Returns the cached node identifier.
    pub const fn node_id(&self) -> u64 {
        self.node_id
    }
}

#[cfg(test)]
mod tests {
    use super::ClockState;

    /// Keeps clock sequence while timestamp advances
    #[test]
    fn keeps_clock_sequence_while_timestamp_advances() {
        let mut state = ClockState::new(1234, 0);
        for ticks in 1..1_000u64 {
            assert_eq!(state.next_clock_seq(ticks * 7), 1234);
            assert_eq!(state.last_timestamp(), ticks * 7);
        }
    }

    /// Changes clock sequence if timestamp stalls or goes backwards
    #[test]
    fn changes_clock_sequence_if_timestamp_stalls_or_goes_backwards() {
        let mut state = ClockState::new(0, 0);
        let mut prev = state.next_clock_seq(1_000);
        for ticks in [1_000, 1_000, 999, 1, 1] {
            let curr = state.next_clock_seq(ticks);
            assert_ne!(prev, curr);
            assert_eq!(state.last_timestamp(), ticks);
            prev = curr;
        }
        assert_eq!(prev, 5);
    }

    /// Bumps running sequence when caller supplies its own
    #[test]
    fn bumps_running_sequence_when_caller_supplies_its_own() {
        let mut state = ClockState::new(10, 0);
        state.observe(500);
        state.observe(500);
        assert_eq!(state.clock_seq(), 11);
        assert_eq!(state.next_clock_seq(501), 11);
    }

    /// Rejects out-of-range initial values
    #[test]
    #[should_panic]
    fn rejects_out_of_range_initial_values() {
        ClockState::new(1 << 14, 0);
    }
}
