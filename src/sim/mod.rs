pub mod driver;
pub mod job;
pub mod loader;
pub mod render;
pub mod report;

pub use driver::{Sim, SimConfig, SimOutcome, simulate};
pub use job::{Job, random_jobs};
pub use loader::{load_jobs, parse_jobs};
pub use render::{TraceLine, render_trace};
pub use report::{ProcessStats, Report};
