use tracing::info;

use super::{job::Job, report::Report};
use crate::{
    core::{ProcessTable, SchedCore, SchedCoreEvent, Ticks, Timeline},
    error::{SimError, SimResult},
    scheduler::{Policy, PolicyScheduler},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: Policy,
    // Bound on the number of ticks a run may take; unbounded when None
    pub tick_limit: Option<Ticks>,
}

impl SimConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            tick_limit: None,
        }
    }

    pub fn with_tick_limit(mut self, limit: Ticks) -> Self {
        self.tick_limit = Some(limit);
        self
    }
}

/// Everything a finished run hands back: the per-tick timeline, the final
/// process table, and the aggregated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOutcome {
    pub timeline: Timeline,
    pub table: ProcessTable,
    pub report: Report,
}

pub struct Sim {
    pub core: SchedCore<PolicyScheduler>,
    config: SimConfig,
}

impl Sim {
    pub fn new(jobs: &[Job], config: SimConfig) -> SimResult<Self> {
        if jobs.is_empty() {
            return Err(SimError::EmptyProcessTable);
        }
        let table = ProcessTable::from_jobs(jobs)?;

        Ok(Self {
            core: SchedCore::new(table, config.policy.scheduler()),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn step(&mut self) -> Vec<SchedCoreEvent> {
        self.core.tick()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.is_done()
    }

    /// Ticks until every process has completed, or until the configured tick
    /// limit is hit.
    pub fn run(mut self) -> SimResult<SimOutcome> {
        info!(
            policy = %self.config.policy,
            processes = self.core.table().len(),
            "simulation started"
        );

        while !self.all_jobs_completed() {
            let now = self.core.now();
            if let Some(limit) = self.config.tick_limit.filter(|&limit| now >= limit) {
                return Err(SimError::TickLimitExceeded { limit });
            }
            self.step();
        }

        let (table, timeline) = self.core.into_parts();
        let report = Report::new(&table, &timeline);
        info!(
            total_ticks = report.total_ticks,
            avg_wait = report.avg_wait_time,
            avg_turnaround = report.avg_turnaround_time,
            "simulation finished"
        );

        Ok(SimOutcome {
            timeline,
            table,
            report,
        })
    }
}

/// Validates `jobs` and runs them to completion under `config`.
pub fn simulate(jobs: &[Job], config: SimConfig) -> SimResult<SimOutcome> {
    Sim::new(jobs, config)?.run()
}
