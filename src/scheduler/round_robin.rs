use std::num::NonZeroU32;

use super::{ProcessIndex, ProcessTable, Scheduler, Ticks};

/// Preemptive round robin with a fixed quantum.
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU32,
    current: Option<ProcessIndex>,
    // Table index of the last process given the CPU; the next scan starts after it
    last: Option<ProcessIndex>,
    // Ticks consumed by `current` in its quantum
    used: u32,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            quantum,
            current: None,
            last: None,
            used: 0,
        }
    }

    fn next_after_last(&self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex> {
        let len = table.len();
        if len == 0 {
            return None;
        }

        let start = self.last.map_or(0, |last| (last + 1) % len);
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| table[index].is_eligible(now))
    }
}

impl Scheduler for RoundRobinScheduler {
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex> {
        let keep = self
            .current
            .filter(|&i| table[i].is_eligible(now) && self.used < self.quantum.get());
        if keep.is_some() {
            return keep;
        }

        self.used = 0;
        self.current = self.next_after_last(table, now);
        if self.current.is_some() {
            self.last = self.current;
        }
        self.current
    }

    fn ran(&mut self, table: &ProcessTable, index: ProcessIndex) {
        self.used += 1;
        if table[index].completed {
            // Forced switch on the next tick
            self.current = None;
            self.used = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_util::table;

    fn rr(quantum: u32) -> RoundRobinScheduler {
        RoundRobinScheduler::new(NonZeroU32::new(quantum).unwrap())
    }

    #[test]
    fn quantum_expiry_moves_to_next_index() {
        let mut table = table(&[(1, 4), (2, 4)]);
        let mut rr = rr(2);
        let mut picks = Vec::new();

        for now in 2..8 {
            let pick = rr.select(&table, now).unwrap();
            table.advance(pick, now);
            rr.ran(&table, pick);
            picks.push(pick);
        }
        assert_eq!(picks, vec![0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn sole_eligible_process_is_reselected() {
        let mut table = table(&[(1, 5)]);
        let mut rr = rr(2);

        for now in 1..6 {
            assert_eq!(rr.select(&table, now), Some(0));
            table.advance(0, now);
            rr.ran(&table, 0);
        }
        assert!(table.all_completed());
    }

    #[test]
    fn completion_mid_quantum_forces_switch() {
        let mut table = table(&[(1, 1), (2, 3)]);
        let mut rr = rr(3);

        assert_eq!(rr.select(&table, 2), Some(0));
        table.advance(0, 2);
        rr.ran(&table, 0);
        assert_eq!(rr.select(&table, 3), Some(1));
    }
}
