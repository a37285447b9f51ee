use rand::prelude::*;
use std::ops::RangeInclusive;

use crate::core::state::{ProcessId, Ticks};

/// One input record: a process id and the CPU service it needs. The
/// arrival time is derived from the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: ProcessId,
    pub burst_time: Ticks,
}

/// Generates `count` jobs with ids `1..=count` and bursts drawn uniformly
/// from `bursts`. The same seed always yields the same workload.
pub fn random_jobs(count: u32, bursts: RangeInclusive<Ticks>, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|id| Job {
            id,
            burst_time: rng.random_range(bursts.clone()),
        })
        .collect()
}
