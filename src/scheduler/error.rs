//! Errors reported by a scheduling run.

use std::fmt;

use crate::validation::ValidationError;

/// Why a scheduling run produced no result.
///
/// Failures are synchronous and deterministic: the same input always
/// fails the same way, and the caller's process set is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Input was rejected before simulation started.
    InvalidInput(Vec<ValidationError>),
    /// No process was eligible and none were left to arrive, while some
    /// still had work. Unreachable for validated input.
    Stalled {
        /// Clock value when the engine stalled.
        clock: i64,
        /// Pids that still had remaining work.
        pending: Vec<String>,
    },
    /// The finished run violated a timeline or timing invariant.
    Inconsistent(String),
}

impl ScheduleError {
    pub(crate) fn stalled(clock: i64, pending: impl IntoIterator<Item = String>) -> Self {
        Self::Stalled {
            clock,
            pending: pending.into_iter().collect(),
        }
    }

    /// Validation errors, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                f.write_str("invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::Stalled { clock, pending } => write!(
                f,
                "scheduler stalled at t={clock} with pending processes {}",
                pending.join(", ")
            ),
            Self::Inconsistent(msg) => write!(f, "inconsistent schedule: {msg}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(vec![err])
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_invalid_input() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "Process set is empty"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "bad quantum"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Process set is empty; bad quantum"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_display_stalled() {
        let err = ScheduleError::stalled(4, vec!["P1".to_string(), "P2".to_string()]);
        assert_eq!(
            err.to_string(),
            "scheduler stalled at t=4 with pending processes P1, P2"
        );
        assert!(err.validation_errors().is_empty());
    }
}
