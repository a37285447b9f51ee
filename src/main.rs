use std::{path::PathBuf, process::ExitCode};

use clap::{ArgGroup, Parser};
use cpusim::{
    Job, Policy, SimConfig, SimResult,
    core::Ticks,
    sim::{load_jobs, random_jobs, render_trace},
    simulate,
};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Discrete-time CPU scheduling simulator
#[derive(Parser)]
#[command(name = "cpusim")]
#[command(version)]
#[command(about = "Simulates FCFS, preemptive SJF and Round Robin scheduling", long_about = None)]
#[command(group(ArgGroup::new("policy").required(true)))]
struct Cli {
    /// First Come First Served
    #[arg(short = 'f', long = "fcfs", group = "policy")]
    fcfs: bool,

    /// Preemptive Shortest Job First
    #[arg(short = 's', long = "sjf", group = "policy")]
    sjf: bool,

    /// Round Robin with the given time quantum
    #[arg(short = 'r', long = "rr", value_name = "QUANTUM", group = "policy")]
    quantum: Option<u32>,

    /// Process list (`P<id>,<burst>` per line)
    #[arg(value_name = "INPUT_FILE", required_unless_present = "generate")]
    input: Option<PathBuf>,

    /// Generate this many processes instead of reading a file
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    generate: Option<u32>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Largest burst time for --generate
    #[arg(long, default_value_t = 10)]
    max_burst: Ticks,

    /// Abort the run after this many ticks
    #[arg(long, value_name = "TICKS")]
    tick_limit: Option<Ticks>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn policy(&self) -> SimResult<Policy> {
        match self.quantum {
            Some(quantum) => Policy::round_robin(quantum),
            None if self.sjf => Ok(Policy::Sjf),
            None => Ok(Policy::Fcfs),
        }
    }

    fn jobs(&self) -> SimResult<Vec<Job>> {
        match (&self.input, self.generate) {
            (Some(path), _) => load_jobs(path),
            (None, Some(count)) => Ok(random_jobs(count, 1..=self.max_burst.max(1), self.seed)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> SimResult<()> {
    let policy = cli.policy()?;
    let jobs = cli.jobs()?;

    let mut config = SimConfig::new(policy);
    config.tick_limit = cli.tick_limit;

    let outcome = simulate(&jobs, config)?;

    println!("{policy}");
    print!("{}", render_trace(&outcome.timeline));
    println!();
    println!("{}", outcome.report);
    Ok(())
}
