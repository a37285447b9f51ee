use rustc_hash::FxHashSet;
use std::ops::Index;

use crate::error::{SimError, SimResult};
use crate::sim::Job;

pub type ProcessId = u32;
pub type Ticks = u64;
// Stable position of a process inside its ProcessTable
pub type ProcessIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub burst_left: Ticks,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
    pub completed: bool,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn new(id: ProcessId, burst_time: Ticks) -> Self {
        Self {
            id,
            // Arrival time is the process id by convention
            arrival_time: Ticks::from(id),
            burst_time,
            burst_left: burst_time,
            wait_time: 0,
            turnaround_time: 0,
            completed: false,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    /// Arrived, not completed, and still needs service.
    pub fn is_eligible(&self, now: Ticks) -> bool {
        self.has_arrived(now) && self.burst_left > 0 && !self.completed
    }

    pub fn service_received(&self) -> Ticks {
        self.burst_time - self.burst_left
    }
}

/// The fixed set of processes of one simulation run. Index order is stable
/// for the whole run and equals arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Builds a validated table. Records are ordered by arrival (then id) so
    /// that table order and arrival order coincide.
    pub fn from_jobs(jobs: &[Job]) -> SimResult<Self> {
        let mut seen = FxHashSet::default();
        for job in jobs {
            if job.id == 0 {
                return Err(SimError::InvalidProcessId);
            }
            if job.burst_time == 0 {
                return Err(SimError::InvalidBurst { id: job.id });
            }
            if !seen.insert(job.id) {
                return Err(SimError::DuplicateProcessId(job.id));
            }
        }

        let mut processes: Vec<Process> = jobs
            .iter()
            .map(|job| Process::new(job.id, job.burst_time))
            .collect();
        processes.sort_by(|a, b| {
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(Self { processes })
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn get(&self, index: ProcessIndex) -> Option<&Process> {
        self.processes.get(index)
    }

    pub fn eligible(&self, now: Ticks) -> impl Iterator<Item = (ProcessIndex, &Process)> {
        self.processes
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_eligible(now))
    }

    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(|p| p.completed)
    }

    /// Turnaround accrues for every arrived, incomplete process, including
    /// the one that will run this tick.
    pub fn accrue_turnaround(&mut self, now: Ticks) {
        for process in self.processes.iter_mut().filter(|p| p.is_eligible(now)) {
            process.turnaround_time += 1;
        }
    }

    /// Waiting accrues for every arrived, incomplete process except `running`.
    pub fn accrue_wait(&mut self, now: Ticks, running: Option<ProcessIndex>) {
        for (index, process) in self.processes.iter_mut().enumerate() {
            if process.is_eligible(now) && Some(index) != running {
                process.wait_time += 1;
            }
        }
    }

    /// Gives one tick of service to the process at `index`. Returns true if
    /// the process completed with this tick.
    pub fn advance(&mut self, index: ProcessIndex, now: Ticks) -> bool {
        let process = &mut self.processes[index];
        debug_assert!(
            process.is_eligible(now),
            "P{} advanced while not eligible at t={now}",
            process.id
        );

        process.start_time.get_or_insert(now);
        process.burst_left -= 1;
        if process.burst_left == 0 {
            process.completed = true;
            process.completion_time = Some(now + 1);
        }
        process.completed
    }
}

impl Index<ProcessIndex> for ProcessTable {
    type Output = Process;

    fn index(&self, index: ProcessIndex) -> &Process {
        &self.processes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(records: &[(ProcessId, Ticks)]) -> Vec<Job> {
        records.iter()
            .map(|&(id, burst_time)| Job { id, burst_time })
            .collect()
    }

    #[test]
    fn arrival_time_follows_id() {
        let table = ProcessTable::from_jobs(&jobs(&[(1, 5), (4, 2)])).unwrap();
        assert_eq!(table[0].arrival_time, 1);
        assert_eq!(table[1].arrival_time, 4);
        assert_eq!(table[1].burst_left, 2);
    }

    #[test]
    fn table_is_ordered_by_arrival() {
        let table = ProcessTable::from_jobs(&jobs(&[(3, 1), (1, 1), (2, 1)])).unwrap();
        let ids: Vec<_> = table.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(matches!(
            ProcessTable::from_jobs(&jobs(&[(1, 2), (1, 3)])),
            Err(SimError::DuplicateProcessId(1))
        ));
        assert!(matches!(
            ProcessTable::from_jobs(&jobs(&[(2, 0)])),
            Err(SimError::InvalidBurst { id: 2 })
        ));
        assert!(matches!(
            ProcessTable::from_jobs(&jobs(&[(0, 4)])),
            Err(SimError::InvalidProcessId)
        ));
    }

    #[test]
    fn bookkeeping_skips_unarrived_and_running() {
        let mut table = ProcessTable::from_jobs(&jobs(&[(1, 2), (2, 2), (5, 1)])).unwrap();
        table.accrue_turnaround(2);
        table.accrue_wait(2, Some(0));

        assert_eq!((table[0].wait_time, table[0].turnaround_time), (0, 1));
        assert_eq!((table[1].wait_time, table[1].turnaround_time), (1, 1));
        assert_eq!((table[2].wait_time, table[2].turnaround_time), (0, 0));
    }

    #[test]
    fn advance_completes_exactly_once() {
        let mut table = ProcessTable::from_jobs(&jobs(&[(1, 2)])).unwrap();
        assert!(!table.advance(0, 1));
        assert_eq!(table[0].start_time, Some(1));
        assert!(table.advance(0, 2));
        assert!(table[0].completed);
        assert_eq!(table[0].completion_time, Some(3));
        assert!(!table[0].is_eligible(3));
        assert!(table.all_completed());
    }
}
