//! Process-list text format.
//!
//! ```text
//! Process,Burst
//! P1,5
//! P2,3
//! ```
//!
//! The first line is treated as a header and skipped unless it looks like a
//! record (`P` followed by a digit, or a bare digit). Blank lines are ignored.

use std::{fs, path::Path};

use super::job::Job;
use crate::core::state::{ProcessId, Ticks};
use crate::error::{SimError, SimResult};

pub fn load_jobs(path: impl AsRef<Path>) -> SimResult<Vec<Job>> {
    let text = fs::read_to_string(path)?;
    parse_jobs(&text)
}

pub fn parse_jobs(text: &str) -> SimResult<Vec<Job>> {
    let mut jobs = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if index == 0 && !looks_like_record(line) {
            continue;
        }

        jobs.push(parse_line(line).map_err(|reason| SimError::Parse {
            line: index + 1,
            reason,
        })?);
    }

    Ok(jobs)
}

fn looks_like_record(line: &str) -> bool {
    let digits = line.strip_prefix('P').unwrap_or(line);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

fn parse_line(line: &str) -> Result<Job, String> {
    let (id, burst) = line
        .split_once(',')
        .ok_or_else(|| format!("expected `P<id>,<burst>`, got `{line}`"))?;

    let id = id.trim();
    let id = id.strip_prefix('P').unwrap_or(id);
    let id = id
        .parse::<ProcessId>()
        .map_err(|e| format!("invalid process id `{id}`: {e}"))?;

    let burst = burst.trim();
    let burst_time = burst
        .parse::<Ticks>()
        .map_err(|e| format!("invalid burst time `{burst}`: {e}"))?;

    Ok(Job { id, burst_time })
}
