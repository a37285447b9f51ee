pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use std::fmt;
use std::num::NonZeroU32;

use crate::core::state::{ProcessIndex, ProcessTable, Ticks};
use crate::error::{SimError, SimResult};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// A scheduling policy: decides which process, if any, holds the CPU for
/// the current tick. Implementations keep only their own policy-local
/// state; the process table is owned by the clock and only read here.
pub trait Scheduler {
    /// Pick the process to run at tick `now`, or `None` to leave the CPU
    /// idle. Only eligible processes may be returned.
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex>;

    /// Called after `index` received its tick of service.
    fn ran(&mut self, _table: &ProcessTable, _index: ProcessIndex) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: NonZeroU32 },
}

impl Policy {
    pub fn round_robin(quantum: u32) -> SimResult<Self> {
        NonZeroU32::new(quantum)
            .map(|quantum| Self::RoundRobin { quantum })
            .ok_or(SimError::InvalidQuantum(quantum))
    }

    pub fn scheduler(&self) -> PolicyScheduler {
        match *self {
            Self::Fcfs => PolicyScheduler::Fcfs(FcfsScheduler::new()),
            Self::Sjf => PolicyScheduler::Sjf(SjfScheduler::new()),
            Self::RoundRobin { quantum } => {
                PolicyScheduler::RoundRobin(RoundRobinScheduler::new(quantum))
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "First Come First Served"),
            Self::Sjf => write!(f, "Shortest Job First"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin with Quantum {quantum}"),
        }
    }
}

/// The closed set of built-in policies behind one `Scheduler`.
#[derive(Debug, Clone)]
pub enum PolicyScheduler {
    Fcfs(FcfsScheduler),
    Sjf(SjfScheduler),
    RoundRobin(RoundRobinScheduler),
}

impl Scheduler for PolicyScheduler {
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex> {
        match self {
            Self::Fcfs(s) => s.select(table, now),
            Self::Sjf(s) => s.select(table, now),
            Self::RoundRobin(s) => s.select(table, now),
        }
    }

    fn ran(&mut self, table: &ProcessTable, index: ProcessIndex) {
        match self {
            Self::Fcfs(s) => s.ran(table, index),
            Self::Sjf(s) => s.ran(table, index),
            Self::RoundRobin(s) => s.ran(table, index),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantum_is_rejected() {
        assert!(matches!(
            Policy::round_robin(0),
            Err(SimError::InvalidQuantum(0))
        ));
        assert_eq!(
            Policy::round_robin(3).unwrap().to_string(),
            "Round Robin with Quantum 3"
        );
    }
}
