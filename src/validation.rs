//! Input validation for scheduling runs.
//!
//! Checks the process set before any simulation starts, so the engine
//! never partially simulates invalid input. Detects:
//! - Empty process sets
//! - Duplicate pids
//! - Non-positive bursts
//! - Negative arrivals
//! - Non-positive round-robin quanta
//!
//! All problems are collected and reported together.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The operation needs at least one process.
    EmptyProcessSet,
    /// Two processes share the same pid.
    DuplicateId,
    /// A burst is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// A round-robin quantum is zero or negative.
    NonPositiveQuantum,
    /// A process has no completion time where one is required.
    IncompleteProcess,
    /// A pid has no matching record.
    UnknownId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set for simulation.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate pids
/// 3. Every burst is positive
/// 4. Every arrival is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.pid, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.pid, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round-robin quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Validates that a set is non-empty and fully simulated.
///
/// Returns the first problem found; used by the metric reducers.
pub fn validate_completed(processes: &[Process]) -> Result<(), ValidationError> {
    if processes.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Cannot compute metrics for an empty process set",
        ));
    }
    match processes.iter().find(|p| !p.is_complete()) {
        Some(p) => Err(ValidationError::new(
            ValidationErrorKind::IncompleteProcess,
            format!("Process '{}' has no completion time", p.pid),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 1, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", -1, 0), Process::new("P1", 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
        assert!(validate_quantum(-3).is_err());
    }

    #[test]
    fn test_completed() {
        let mut p = Process::new("P1", 0, 1);
        assert_eq!(
            validate_completed(&[p.clone()]).unwrap_err().kind,
            ValidationErrorKind::IncompleteProcess
        );
        p.completion_time = Some(1);
        assert!(validate_completed(&[p]).is_ok());
        assert_eq!(
            validate_completed(&[]).unwrap_err().kind,
            ValidationErrorKind::EmptyProcessSet
        );
    }

    #[test]
    fn test_display() {
        let err = ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1");
        assert_eq!(err.to_string(), "Duplicate process ID: P1");
    }
}
