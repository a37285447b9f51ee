use std::fmt::{self, Write};

use super::report::Report;
use crate::core::{Slot, TimelineEntry};

pub struct TraceLine<'a>(pub &'a TimelineEntry);

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TimelineEntry { tick, slot } = self.0;
        match slot {
            Slot::Running(p) => write!(
                f,
                "T{tick} : P{}  - Burst left {:2}, Wait time {:3}, Turnaround time {:3}",
                p.id, p.burst_left, p.wait_time, p.turnaround_time
            ),
            Slot::Idle => write!(f, "T{tick} : Idle"),
        }
    }
}

pub fn render_trace(timeline: &[TimelineEntry]) -> String {
    let mut out = String::new();
    for entry in timeline {
        let _ = writeln!(out, "{}", TraceLine(entry));
    }
    out
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.processes {
            writeln!(f, "P{}", p.id)?;
            writeln!(f, "\tWaiting time:         {:3}", p.wait_time)?;
            writeln!(f, "\tTurnaround time:      {:3}", p.turnaround_time)?;
            writeln!(f)?;
        }
        writeln!(f, "Total average waiting time:     {:.1}", self.avg_wait_time)?;
        write!(
            f,
            "Total average turnaround time:  {:.1}",
            self.avg_turnaround_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessSnapshot;

    #[test]
    fn formats_running_and_idle_ticks() {
        let running = TimelineEntry {
            tick: 3,
            slot: Slot::Running(ProcessSnapshot {
                id: 2,
                burst_left: 4,
                wait_time: 1,
                turnaround_time: 2,
            }),
        };
        let idle = TimelineEntry {
            tick: 0,
            slot: Slot::Idle,
        };

        assert_eq!(
            TraceLine(&running).to_string(),
            "T3 : P2  - Burst left  4, Wait time   1, Turnaround time   2"
        );
        assert_eq!(render_trace(&[idle]), "T0 : Idle\n");
    }
}
