//! Process model.
//!
//! A process is the unit of CPU work being simulated. Input fields
//! (`pid`, `arrival`, `burst`, `priority`) are fixed; runtime fields
//! (`remaining`, `start_time`, `completion_time`, `response_time`) are
//! written by the scheduling engine.
//!
//! # Time Representation
//! All times are integers in an abstract clock unit relative to t=0.
//! Translating them to wall-clock time is the consumer's business.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// Plain process specification, as entered by a user or loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total service time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

/// Lifecycle state of a process relative to a clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Arrival not yet reached.
    Waiting,
    /// Eligible, not running.
    Ready,
    /// Currently dispatched.
    Running,
    /// No remaining work.
    Done,
}

/// A simulated process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival: i64,
    /// Total service time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Service time left. Starts at `burst`, ends at 0.
    pub remaining: i64,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// Time at which `remaining` reached 0.
    pub completion_time: Option<i64>,
    /// `start_time - arrival`, fixed at first dispatch.
    pub response_time: Option<i64>,
}

impl Process {
    /// Creates a fresh process with priority 0.
    pub fn new(pid: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            start_time: None,
            completion_time: None,
            response_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Clears all runtime fields so the process can be simulated again.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.start_time = None;
        self.completion_time = None;
        self.response_time = None;
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process may be dispatched at `clock`.
    #[inline]
    pub fn is_ready_at(&self, clock: i64) -> bool {
        self.arrival <= clock && self.remaining > 0
    }

    /// Lifecycle state as seen at `clock`.
    ///
    /// Never returns `Running`: that state only exists inside the engine.
    pub fn state_at(&self, clock: i64) -> ProcessState {
        if self.remaining == 0 {
            ProcessState::Done
        } else if clock < self.arrival {
            ProcessState::Waiting
        } else {
            ProcessState::Ready
        }
    }

    /// Turnaround time: `completion - arrival`.
    pub fn turnaround(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival)
    }

    /// Waiting time: `turnaround - burst`.
    pub fn waiting(&self) -> Option<i64> {
        self.turnaround().map(|t| t - self.burst)
    }

    /// Records a dispatch at `clock`. Only the first dispatch is kept.
    pub(crate) fn mark_dispatched(&mut self, clock: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(clock);
            self.response_time = Some(clock - self.arrival);
        }
    }

    /// Consumes `run` units of service, stamping completion at `clock + run`.
    pub(crate) fn consume(&mut self, clock: i64, run: i64) {
        self.remaining -= run;
        if self.remaining == 0 {
            self.completion_time = Some(clock + run);
        }
    }
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Process::new(spec.pid, spec.arrival, spec.burst).with_priority(spec.priority)
    }
}

/// An ordered collection of processes.
///
/// The engine never mutates a caller's set mid-run: it works on a
/// [`working_copy`](Self::working_copy) and [`commit`](Self::commit)s the
/// runtime fields back once the run has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    /// Processes in caller order.
    pub processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set of fresh processes from input specifications.
    pub fn from_specs(specs: impl IntoIterator<Item = ProcessSpec>) -> Self {
        Self {
            processes: specs.into_iter().map(Process::from).collect(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates processes in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Finds a process by pid.
    pub fn get(&self, pid: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Sum of all bursts.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst).sum()
    }

    /// Whether every process has a completion time.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Resets every process's runtime fields.
    pub fn reset(&mut self) {
        self.processes.iter_mut().for_each(Process::reset);
    }

    /// Independent, reset snapshot for a simulation run.
    pub fn working_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    /// Copies runtime fields from a finished run back onto these records,
    /// matched by pid.
    ///
    /// Fails without modifying anything if a pid has no counterpart in
    /// `finished` or appears in it more than once.
    pub fn commit(&mut self, finished: &ProcessSet) -> Result<(), ValidationError> {
        let mut sources = Vec::with_capacity(self.processes.len());
        for orig in &self.processes {
            let mut matches = finished.processes.iter().filter(|p| p.pid == orig.pid);
            let source = matches.next().ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownId,
                    format!("No finished record for process '{}'", orig.pid),
                )
            })?;
            if matches.next().is_some() {
                return Err(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate finished record for process '{}'", orig.pid),
                ));
            }
            sources.push(source);
        }

        for (orig, source) in self.processes.iter_mut().zip(sources) {
            orig.start_time = source.start_time;
            orig.completion_time = source.completion_time;
            orig.response_time = source.response_time;
            orig.remaining = source.remaining;
        }
        Ok(())
    }
}

impl FromIterator<Process> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
