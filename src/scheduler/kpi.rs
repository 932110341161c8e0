//! Schedule quality metrics (KPIs).
//!
//! Reduces a fully simulated process set to averages and per-process
//! rows.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | latest completion time |
//! | Throughput | processes / makespan |

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessSet};
use crate::validation::{validate_completed, ValidationError};

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed process set.
    ///
    /// # Errors
    /// `EmptyProcessSet` if there are no processes, `IncompleteProcess`
    /// if any process has no completion time.
    pub fn calculate(processes: &ProcessSet) -> Result<Self, ValidationError> {
        let reports = ProcessReport::table(processes)?;
        let n = reports.len() as f64;

        let mut total_turnaround = 0i64;
        let mut total_waiting = 0i64;
        let mut total_response = 0i64;
        let mut makespan = 0i64;
        for r in &reports {
            total_turnaround += r.turnaround;
            total_waiting += r.waiting;
            total_response += r.response;
            makespan = makespan.max(r.completion);
        }

        let throughput = if makespan > 0 {
            n / makespan as f64
        } else {
            0.0
        };

        Ok(Self {
            avg_turnaround: total_turnaround as f64 / n,
            avg_waiting: total_waiting as f64 / n,
            avg_response: total_response as f64 / n,
            makespan,
            throughput,
        })
    }
}

/// Timing row for one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub pid: String,
    pub arrival: i64,
    pub burst: i64,
    pub priority: i32,
    pub start: i64,
    pub completion: i64,
    pub turnaround: i64,
    pub waiting: i64,
    pub response: i64,
}

impl ProcessReport {
    /// Builds a row; `None` if the process has not been fully simulated.
    pub fn from_process(p: &Process) -> Option<Self> {
        let start = p.start_time?;
        let completion = p.completion_time?;
        let turnaround = completion - p.arrival;
        Some(Self {
            pid: p.pid.clone(),
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            start,
            completion,
            turnaround,
            waiting: turnaround - p.burst,
            response: p.response_time.unwrap_or(start - p.arrival),
        })
    }

    /// Rows for every process, sorted by pid.
    pub fn table(processes: &ProcessSet) -> Result<Vec<Self>, ValidationError> {
        validate_completed(&processes.processes)?;
        let mut rows: Vec<Self> = processes
            .iter()
            .filter_map(Self::from_process)
            .collect();
        rows.sort_by(|a, b| a.pid.cmp(&b.pid));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn finished(pid: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> Process {
        let mut p = Process::new(pid, arrival, burst);
        p.start_time = Some(start);
        p.response_time = Some(start - arrival);
        p.completion_time = Some(completion);
        p.remaining = 0;
        p
    }

    fn fcfs_result() -> ProcessSet {
        // P1(0,5) P2(1,3) P3(2,1) under FCFS
        vec![
            finished("P1", 0, 5, 0, 5),
            finished("P2", 1, 3, 5, 8),
            finished("P3", 2, 1, 8, 9),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = ScheduleKpi::calculate(&fcfs_result()).unwrap();
        // TAT: 5, 7, 7 → 19/3; WT: 0, 4, 6 → 10/3; RT same as WT here
        assert!((kpi.avg_turnaround - 19.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_response - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 9);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let err = ScheduleKpi::calculate(&ProcessSet::new()).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_kpi_incomplete() {
        let set = ProcessSet::new()
            .with_process(finished("P1", 0, 1, 0, 1))
            .with_process(Process::new("P2", 0, 1));
        let err = ScheduleKpi::calculate(&set).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IncompleteProcess);
    }

    #[test]
    fn test_report_table_sorted() {
        let set: ProcessSet = vec![finished("P2", 1, 3, 5, 8), finished("P1", 0, 5, 0, 5)]
            .into_iter()
            .collect();
        let rows = ProcessReport::table(&set).unwrap();
        assert_eq!(rows[0].pid, "P1");
        assert_eq!(rows[1].turnaround, 7);
        assert_eq!(rows[1].waiting, 4);
        assert_eq!(rows[1].response, 4);
    }

    #[test]
    fn test_report_requires_completion() {
        assert!(ProcessReport::from_process(&Process::new("P1", 0, 1)).is_none());
    }
}
