use tracing::{debug, trace};

use super::{
    event::SchedCoreEvent,
    observer::Observer,
    state::{ProcessIndex, ProcessTable, Ticks},
    timeline::{ProcessSnapshot, Slot, Timeline, TimelineEntry},
};
use crate::scheduler::Scheduler;

/// The simulation clock. Owns the process table for the duration of a run
/// and advances it one discrete tick at a time.
pub struct SchedCore<S: Scheduler> {
    table: ProcessTable,
    pub scheduler: S,
    now: Ticks,
    // Process that held the CPU during the previous tick
    last_running: Option<ProcessIndex>,
    timeline: Timeline,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(table: ProcessTable, scheduler: S) -> Self {
        let observer = Observer::new(&table);
        Self {
            table,
            scheduler,
            now: 0,
            last_running: None,
            timeline: Timeline::new(),
            observer,
        }
    }

    /// Runs one tick: bookkeeping, selection, then service.
    pub fn tick(&mut self) -> Vec<SchedCoreEvent> {
        let now = self.now;
        let mut events = Vec::new();

        for process in self.table.iter().filter(|p| p.arrival_time == now) {
            events.push(SchedCoreEvent::Arrived {
                process: process.id,
            });
        }

        self.table.accrue_turnaround(now);
        let selected = self.scheduler.select(&self.table, now);
        self.table.accrue_wait(now, selected);

        let slot = match selected {
            Some(index) => {
                if self.last_running != Some(index) {
                    events.push(SchedCoreEvent::Dispatched {
                        from: self.last_running.map(|i| self.table[i].id),
                        to: self.table[index].id,
                    });
                }

                let completed = self.table.advance(index, now);
                self.scheduler.ran(&self.table, index);

                let process = &self.table[index];
                if completed {
                    events.push(SchedCoreEvent::Completed {
                        process: process.id,
                        at: now + 1,
                    });
                }
                trace!(tick = now, pid = process.id, burst_left = process.burst_left, "ran");
                Slot::Running(ProcessSnapshot::from(process))
            }
            None => {
                events.push(SchedCoreEvent::CpuIdle);
                trace!(tick = now, "idle");
                Slot::Idle
            }
        };

        for event in &events {
            debug!(tick = now, ?event, "sched event");
        }

        self.timeline.push(TimelineEntry { tick: now, slot });
        self.last_running = selected;
        self.now += 1;
        self.observer.observe(&self.table, now, selected);

        events
    }

    pub fn is_done(&self) -> bool {
        self.table.all_completed()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Hands the final table and the timeline over to the caller.
    pub fn into_parts(self) -> (ProcessTable, Timeline) {
        (self.table, self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FcfsScheduler, test_util::table};

    #[test]
    fn empty_table_is_done_before_first_tick() {
        let core = SchedCore::new(table(&[]), FcfsScheduler::new());
        assert!(core.is_done());
        assert_eq!(core.now(), 0);
        assert!(core.timeline().is_empty());
    }

    #[test]
    fn tick_reports_arrival_dispatch_and_completion() {
        let mut core = SchedCore::new(table(&[(1, 1)]), FcfsScheduler::new());

        assert_eq!(core.tick(), vec![SchedCoreEvent::CpuIdle]);
        assert_eq!(
            core.tick(),
            vec![
                SchedCoreEvent::Arrived { process: 1 },
                SchedCoreEvent::Dispatched { from: None, to: 1 },
                SchedCoreEvent::Completed { process: 1, at: 2 },
            ]
        );
        assert!(core.is_done());
        assert_eq!(core.observer().steps(), 2);
        assert_eq!(core.timeline()[1].running(), Some(1));
        assert!(core.timeline()[0].is_idle());
    }
}
