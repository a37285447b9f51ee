use average::{Estimate, Mean};

use crate::core::{ProcessId, ProcessTable, Ticks, TimelineEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub id: ProcessId,
    pub burst_time: Ticks,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
    // First tick of service minus arrival
    pub response_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub processes: Vec<ProcessStats>,
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub total_ticks: Ticks,
    pub idle_ticks: Ticks,
    pub dispatches: u64,
}

impl Report {
    /// Aggregates a finished run. The table must be non-empty; averages are
    /// taken over every process in it.
    pub fn new(table: &ProcessTable, timeline: &[TimelineEntry]) -> Self {
        let processes: Vec<ProcessStats> = table
            .iter()
            .map(|p| ProcessStats {
                id: p.id,
                burst_time: p.burst_time,
                wait_time: p.wait_time,
                turnaround_time: p.turnaround_time,
                response_time: p.start_time.map(|start| start - p.arrival_time),
                completion_time: p.completion_time,
            })
            .collect();

        let avg_wait_time = avg(processes.iter().map(|p| p.wait_time as f64));
        let avg_turnaround_time = avg(processes.iter().map(|p| p.turnaround_time as f64));
        let avg_response_time = avg(
            processes
                .iter()
                .filter_map(|p| p.response_time)
                .map(|t| t as f64),
        );

        let idle_ticks = timeline.iter().filter(|entry| entry.is_idle()).count() as Ticks;
        let dispatches = timeline
            .iter()
            .zip(std::iter::once(None).chain(timeline.iter().map(TimelineEntry::running)))
            .filter(|(entry, previous)| entry.running().is_some() && entry.running() != *previous)
            .count() as u64;

        Self {
            processes,
            avg_wait_time,
            avg_turnaround_time,
            avg_response_time,
            total_ticks: timeline.len() as Ticks,
            idle_ticks,
            dispatches,
        }
    }

    pub fn process(&self, id: ProcessId) -> Option<&ProcessStats> {
        self.processes.iter().find(|p| p.id == id)
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProcessSnapshot, Slot};
    use crate::scheduler::test_util::table;

    fn entry(tick: Ticks, id: Option<ProcessId>) -> TimelineEntry {
        let slot = match id {
            Some(id) => Slot::Running(ProcessSnapshot {
                id,
                burst_left: 0,
                wait_time: 0,
                turnaround_time: 0,
            }),
            None => Slot::Idle,
        };
        TimelineEntry { tick, slot }
    }

    #[test]
    fn counts_idle_ticks_and_dispatches() {
        let timeline = vec![
            entry(0, None),
            entry(1, Some(1)),
            entry(2, Some(1)),
            entry(3, Some(2)),
            entry(4, None),
            entry(5, Some(2)),
        ];
        let report = Report::new(&table(&[(1, 2), (2, 2)]), &timeline);

        assert_eq!(report.total_ticks, 6);
        assert_eq!(report.idle_ticks, 2);
        assert_eq!(report.dispatches, 3);
    }

    #[test]
    fn averages_over_all_processes() {
        let mut table = table(&[(1, 1), (2, 1)]);
        table.accrue_turnaround(2);
        table.accrue_wait(2, Some(0));
        table.advance(0, 2);
        table.accrue_turnaround(3);
        table.accrue_wait(3, Some(1));
        table.advance(1, 3);

        let report = Report::new(&table, &[]);
        assert_eq!(report.process(1).map(|p| p.wait_time), Some(0));
        assert_eq!(report.process(2).map(|p| p.wait_time), Some(1));
        assert_eq!(report.process(2).map(|p| p.turnaround_time), Some(2));
        assert_eq!(report.avg_wait_time, 0.5);
        assert_eq!(report.avg_turnaround_time, 1.5);
        assert_eq!(report.avg_response_time, 1.0);
    }
}
