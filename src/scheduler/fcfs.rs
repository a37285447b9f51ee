use super::{ProcessIndex, ProcessTable, Scheduler, Ticks};

/// Non-preemptive first come, first served. Once picked, a process keeps
/// the CPU until its burst is exhausted.
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    current: Option<ProcessIndex>,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FcfsScheduler {
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex> {
        if let Some(current) = self.current.filter(|&i| table[i].is_eligible(now)) {
            return Some(current);
        }

        // Table order is arrival order
        self.current = table.eligible(now).map(|(index, _)| index).next();
        self.current
    }

    fn ran(&mut self, table: &ProcessTable, index: ProcessIndex) {
        if table[index].completed {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_util::table;

    #[test]
    fn later_arrival_does_not_preempt() {
        let mut table = table(&[(1, 3), (2, 1)]);
        let mut fcfs = FcfsScheduler::new();

        assert_eq!(fcfs.select(&table, 0), None);
        for now in 1..=3 {
            assert_eq!(fcfs.select(&table, now), Some(0));
            table.advance(0, now);
            fcfs.ran(&table, 0);
        }
        assert_eq!(fcfs.select(&table, 4), Some(1));
    }
}
