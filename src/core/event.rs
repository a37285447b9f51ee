use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedCoreEvent {
    Arrived {
        process: ProcessId,
    },
    // CPU handed to `to`; `from` is whoever held it last tick
    Dispatched {
        from: Option<ProcessId>,
        to: ProcessId,
    },
    Completed {
        process: ProcessId,
        at: Ticks,
    },
    // No eligible process this tick
    CpuIdle,
}
