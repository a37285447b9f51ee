pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use error::{SimError, SimResult};
pub use scheduler::{Policy, Scheduler};
pub use sim::{Job, Report, Sim, SimConfig, SimOutcome, simulate};
