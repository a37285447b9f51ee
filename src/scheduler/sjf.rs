use super::{ProcessIndex, ProcessTable, Scheduler, Ticks};

/// Preemptive shortest-remaining-time-first. Re-evaluated every tick; the
/// running process keeps the CPU while nobody is strictly shorter.
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    current: Option<ProcessIndex>,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for SjfScheduler {
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<ProcessIndex> {
        // Ties on remaining time go to the earlier arrival
        let shortest = table
            .eligible(now)
            .min_by_key(|&(index, p)| (p.burst_left, p.arrival_time, index))
            .map(|(index, p)| (index, p.burst_left));

        let chosen = match (self.current, shortest) {
            (Some(current), Some((_, min_left)))
                if table[current].is_eligible(now) && table[current].burst_left <= min_left =>
            {
                Some(current)
            }
            (_, shortest) => shortest.map(|(index, _)| index),
        };

        self.current = chosen;
        chosen
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
    fn strictly_shorter_arrival_preempts() {
        let mut table = table(&[(1, 5), (2, 3)]);
        let mut sjf = SjfScheduler::new();

        assert_eq!(sjf.select(&table, 1), Some(0));
        table.advance(0, 1);
        sjf.ran(&table, 0);

        // P1 has 4 left, P2 arrives with 3
        assert_eq!(sjf.select(&table, 2), Some(1));
    }

    #[test]
    fn equal_remaining_time_keeps_current() {
        let mut table = table(&[(1, 4), (2, 3)]);
        let mut sjf = SjfScheduler::new();

        assert_eq!(sjf.select(&table, 1), Some(0));
        table.advance(0, 1);
        sjf.ran(&table, 0);

        // Both have 3 left: no switch
        assert_eq!(sjf.select(&table, 2), Some(0));
    }

    #[test]
    fn tie_between_waiting_processes_goes_to_earlier_arrival() {
        let table = table(&[(1, 2), (2, 2)]);
        let mut sjf = SjfScheduler::new();
        assert_eq!(sjf.select(&table, 2), Some(0));
    }
}
