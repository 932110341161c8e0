//! Single-CPU scheduler front end.
//!
//! # Algorithm
//!
//! 1. Validate the process set (and quantum for round robin).
//! 2. Take a reset working copy of the processes.
//! 3. Run the selected discipline to completion on the copy.
//! 4. Verify the timeline and timing invariants.
//! 5. Commit runtime fields back onto the caller's records by pid.
//!
//! Nothing is written to the caller's records unless every step succeeds.

use log::info;

use super::algorithm::Algorithm;
use super::fcfs::fcfs;
use super::kpi::ScheduleKpi;
use super::nonpreemptive::run_to_completion;
use super::preemptive::run_preemptive;
use super::round_robin::round_robin;
use super::ScheduleError;
use crate::dispatching::rules::{HighestPriority, ShortestBurst, ShortestRemaining};
use crate::models::{ProcessSet, Timeline};
use crate::validation::{validate_processes, validate_quantum};

/// Result of one simulation run on a private copy of the input.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Discipline that produced this outcome.
    pub algorithm: Algorithm,
    /// Finished working copy (every process completed).
    pub processes: ProcessSet,
    /// Merged execution timeline.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

/// CPU scheduling simulator for one discipline.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::{Process, ProcessSet};
/// use cpu_schedsim::scheduler::{Algorithm, CpuScheduler};
///
/// let mut processes = ProcessSet::new()
///     .with_process(Process::new("P1", 0, 5))
///     .with_process(Process::new("P2", 1, 3))
///     .with_process(Process::new("P3", 2, 1));
///
/// let scheduler = CpuScheduler::new(Algorithm::SjfNonPreemptive);
/// let timeline = scheduler.run(&mut processes).unwrap();
///
/// assert_eq!(timeline.to_string(), "[P1 0..5] [P3 5..6] [P2 6..9]");
/// assert_eq!(processes.get("P2").unwrap().completion_time, Some(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuScheduler {
    algorithm: Algorithm,
}

impl CpuScheduler {
    /// Creates a scheduler for the given discipline.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Creates a round-robin scheduler.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(Algorithm::RoundRobin { quantum })
    }

    /// Switches the discipline.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Selected discipline.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Schedules `processes` and writes timing fields back onto them.
    ///
    /// Any previous runtime fields are discarded; the run always starts
    /// from a reset copy. On error the set is left untouched.
    pub fn run(&self, processes: &mut ProcessSet) -> Result<Timeline, ScheduleError> {
        let outcome = self.simulate(processes)?;
        processes.commit(&outcome.processes)?;
        Ok(outcome.timeline)
    }

    /// Schedules a private copy of `processes` without touching the input.
    pub fn simulate(&self, processes: &ProcessSet) -> Result<SimulationOutcome, ScheduleError> {
        self.validate(processes)?;

        let mut working = processes.working_copy();
        info!(
            "{}: scheduling {} processes (total burst {})",
            self.algorithm,
            working.len(),
            working.total_burst()
        );

        let procs = &mut working.processes;
        let timeline = match self.algorithm {
            Algorithm::Fcfs => fcfs(procs),
            Algorithm::SjfNonPreemptive => run_to_completion(procs, &ShortestBurst)?,
            Algorithm::SjfPreemptive => run_preemptive(procs, &ShortestRemaining)?,
            Algorithm::PriorityNonPreemptive => run_to_completion(procs, &HighestPriority)?,
            Algorithm::PriorityPreemptive => run_preemptive(procs, &HighestPriority)?,
            Algorithm::RoundRobin { quantum } => round_robin(procs, quantum),
        };

        verify(&working, &timeline)?;
        let kpi = ScheduleKpi::calculate(&working)?;
        info!(
            "{}: done at t={} with {} slices, avg turnaround {:.2}",
            self.algorithm,
            timeline.makespan(),
            timeline.len(),
            kpi.avg_turnaround
        );

        Ok(SimulationOutcome {
            algorithm: self.algorithm,
            processes: working,
            timeline,
            kpi,
        })
    }

    /// Runs each discipline on its own copy of `processes`.
    ///
    /// The input is never mutated. Fails on the first discipline that
    /// rejects the input.
    pub fn compare(
        processes: &ProcessSet,
        algorithms: &[Algorithm],
    ) -> Result<Vec<SimulationOutcome>, ScheduleError> {
        algorithms
            .iter()
            .map(|&alg| CpuScheduler::new(alg).simulate(processes))
            .collect()
    }

    fn validate(&self, processes: &ProcessSet) -> Result<(), ScheduleError> {
        let mut errors = validate_processes(&processes.processes).err().unwrap_or_default();
        if let Some(quantum) = self.algorithm.quantum() {
            if let Err(mut quantum_errors) = validate_quantum(quantum) {
                errors.append(&mut quantum_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidInput(errors))
        }
    }
}

/// Checks a finished run against the engine's timing invariants.
fn verify(processes: &ProcessSet, timeline: &Timeline) -> Result<(), ScheduleError> {
    let inconsistent = |msg: String| Err(ScheduleError::Inconsistent(msg));

    if !timeline.is_well_formed() {
        return inconsistent(format!("malformed timeline {timeline}"));
    }
    if timeline.busy_time() != processes.total_burst() {
        return inconsistent(format!(
            "busy time {} differs from total burst {}",
            timeline.busy_time(),
            processes.total_burst()
        ));
    }

    for p in processes {
        let (Some(start), Some(completion)) = (p.start_time, p.completion_time) else {
            return inconsistent(format!("process '{}' did not finish", p.pid));
        };
        if p.remaining != 0 || start < p.arrival || completion - p.arrival < p.burst {
            return inconsistent(format!("process '{}' has invalid timing", p.pid));
        }
        if timeline
            .slices_for(&p.pid)
            .iter()
            .any(|s| s.start < p.arrival || s.end() > completion)
        {
            return inconsistent(format!("process '{}' ran outside its lifetime", p.pid));
        }
    }

    Ok(())
}
