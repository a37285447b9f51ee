use super::state::{Process, ProcessId, Ticks};

/// Counters of the running process as they stand at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSnapshot {
    pub id: ProcessId,
    pub burst_left: Ticks,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
}

impl From<&Process> for ProcessSnapshot {
    fn from(process: &Process) -> Self {
        Self {
            id: process.id,
            burst_left: process.burst_left,
            wait_time: process.wait_time,
            turnaround_time: process.turnaround_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Idle,
    Running(ProcessSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub tick: Ticks,
    pub slot: Slot,
}

impl TimelineEntry {
    pub fn running(&self) -> Option<ProcessId> {
        match self.slot {
            Slot::Running(snapshot) => Some(snapshot.id),
            Slot::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.slot, Slot::Idle)
    }
}

pub type Timeline = Vec<TimelineEntry>;
