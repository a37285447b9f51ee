use thiserror::Error;

use crate::core::{ProcessId, Ticks};

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("process table is empty")]
    EmptyProcessTable,

    #[error("time quantum must be a positive integer, got {0}")]
    InvalidQuantum(u32),

    #[error("process id must be positive")]
    InvalidProcessId,

    #[error("process P{id} has a zero burst time")]
    InvalidBurst { id: ProcessId },

    #[error("duplicate process id P{0}")]
    DuplicateProcessId(ProcessId),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("failed to read process list: {0}")]
    Io(#[from] std::io::Error),

    #[error("simulation did not finish within {limit} ticks")]
    TickLimitExceeded { limit: Ticks },
}
