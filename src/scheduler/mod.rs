//! CPU scheduling engine and KPI evaluation.
//!
//! Six disciplines behind one [`CpuScheduler`] front end, selected by the
//! [`Algorithm`] enum:
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | no | arrival, pid |
//! | SJF | no | burst |
//! | SRTF | yes, per tick | remaining |
//! | Priority | no | priority |
//! | Priority | yes, per tick | priority |
//! | Round Robin | yes, per quantum | FIFO queue |
//!
//! Every run works on a private copy of the process set and commits
//! timing fields back only after the run has been verified.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes average turnaround, waiting and response
//! time; [`ProcessReport`] gives the per-process rows.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod error;
mod fcfs;
mod kpi;
mod nonpreemptive;
mod preemptive;
mod round_robin;
mod simple;

pub use algorithm::{Algorithm, ParseAlgorithmError, DEFAULT_QUANTUM};
pub use error::ScheduleError;
pub use kpi::{ProcessReport, ScheduleKpi};
pub use simple::{CpuScheduler, SimulationOutcome};

use log::debug;

use crate::models::Process;

/// Next clock value when no process is ready at `clock`: the earliest
/// arrival among unfinished processes.
///
/// Fails with [`ScheduleError::Stalled`] when unfinished work exists but
/// nothing is left to arrive.
fn idle_jump(processes: &[Process], clock: i64) -> Result<i64, ScheduleError> {
    let next = processes
        .iter()
        .filter(|p| p.remaining > 0 && p.arrival > clock)
        .map(|p| p.arrival)
        .min();

    match next {
        Some(next) => {
            debug!("t={clock}: idle until {next}");
            Ok(next)
        }
        None => Err(ScheduleError::stalled(
            clock,
            processes
                .iter()
                .filter(|p| !p.is_complete())
                .map(|p| p.pid.clone()),
        )),
    }
}
