pub mod driver;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::SchedCore;
pub use event::SchedCoreEvent;
pub use state::{Process, ProcessId, ProcessIndex, ProcessTable, Ticks};
pub use timeline::{ProcessSnapshot, Slot, Timeline, TimelineEntry};
