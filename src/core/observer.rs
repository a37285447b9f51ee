use super::state::{ProcessIndex, ProcessTable, Ticks};

/// Checks the process-table invariants after every tick. Violations mean a
/// broken policy or a malformed table and abort in debug builds.
#[derive(Debug)]
pub struct Observer {
    step: u64,
    // (wait, turnaround) recorded when each process completed
    frozen: Vec<Option<(Ticks, Ticks)>>,
}

impl Observer {
    pub fn new(table: &ProcessTable) -> Self {
        Self {
            step: 0,
            frozen: vec![None; table.len()],
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, table: &ProcessTable, now: Ticks, ran: Option<ProcessIndex>) {
        self.step += 1;

        if let Some(index) = ran {
            debug_assert!(
                table[index].has_arrived(now),
                "P{} ran at t={now} before arriving",
                table[index].id
            );
        }

        for (index, process) in table.iter().enumerate() {
            let id = process.id;
            debug_assert!(
                process.burst_left <= process.burst_time,
                "P{id} burst_left exceeds burst_time"
            );
            debug_assert_eq!(
                process.completed,
                process.burst_left == 0,
                "P{id} completion flag out of sync with burst_left"
            );

            if !process.has_arrived(now) {
                debug_assert!(
                    process.wait_time == 0
                        && process.turnaround_time == 0
                        && process.burst_left == process.burst_time,
                    "P{id} touched at t={now} before arriving"
                );
                continue;
            }

            debug_assert_eq!(
                process.wait_time + process.service_received(),
                process.turnaround_time,
                "P{id} turnaround must equal wait plus service"
            );

            if process.completed {
                let counters = (process.wait_time, process.turnaround_time);
                match self.frozen[index] {
                    Some(frozen) => debug_assert_eq!(
                        frozen, counters,
                        "P{id} counters changed after completion"
                    ),
                    None => self.frozen[index] = Some(counters),
                }
            }
        }
    }
}
