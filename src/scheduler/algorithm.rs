//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default round-robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// One of the six supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Static priority, non-preemptive.
    PriorityNonPreemptive,
    /// Static priority, preemptive.
    PriorityPreemptive,
    /// Round robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous time granted per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// All six disciplines, round robin using `quantum`.
    pub fn all(quantum: i64) -> [Algorithm; 6] {
        [
            Algorithm::Fcfs,
            Algorithm::SjfNonPreemptive,
            Algorithm::SjfPreemptive,
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// Display label.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "SJF (Non-Preemptive)",
            Algorithm::SjfPreemptive => "SJF (Preemptive)",
            Algorithm::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive | Algorithm::PriorityPreemptive | Algorithm::RoundRobin { .. }
        )
    }

    /// Round-robin quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Algorithm::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts display labels ("SJF (Preemptive)") and short codes
    /// ("sjf-p", "srtf", "rr"). Round robin takes an optional quantum
    /// suffix ("rr:4"); otherwise [`DEFAULT_QUANTUM`] is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAlgorithmError(s.to_string());
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|&c| !matches!(c, ' ' | '(' | ')' | '-' | '_'))
            .collect();

        // "rr:4", "rr=4" and the Display form "Round Robin (q=4)"
        let (name, quantum) = match normalized.split_once(|c: char| c == ':' || c == '=') {
            Some((name, q)) => (
                name.trim_end_matches('q'),
                Some(q.parse::<i64>().map_err(|_| err())?),
            ),
            None => (normalized.as_str(), None),
        };

        let algorithm = match name {
            "fcfs" | "fifo" | "firstcomefirstserved" => Algorithm::Fcfs,
            "sjf" | "sjfnp" | "sjfnonpreemptive" => Algorithm::SjfNonPreemptive,
            "sjfp" | "sjfpreemptive" | "srtf" | "srt" => Algorithm::SjfPreemptive,
            "priority" | "prionp" | "prioritynp" | "prioritynonpreemptive" => {
                Algorithm::PriorityNonPreemptive
            }
            "priop" | "priorityp" | "prioritypreemptive" => Algorithm::PriorityPreemptive,
            "rr" | "roundrobin" => Algorithm::RoundRobin {
                quantum: quantum.unwrap_or(DEFAULT_QUANTUM),
            },
            _ => return Err(err()),
        };

        if quantum.is_some() && algorithm.quantum().is_none() {
            return Err(err());
        }
        Ok(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for alg in Algorithm::all(DEFAULT_QUANTUM) {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_short_codes() {
        assert_eq!("fcfs".parse(), Ok(Algorithm::Fcfs));
        assert_eq!("sjf-np".parse(), Ok(Algorithm::SjfNonPreemptive));
        assert_eq!("SRTF".parse(), Ok(Algorithm::SjfPreemptive));
        assert_eq!("prio-np".parse(), Ok(Algorithm::PriorityNonPreemptive));
        assert_eq!("prio_p".parse(), Ok(Algorithm::PriorityPreemptive));
        assert_eq!("rr".parse(), Ok(Algorithm::RoundRobin { quantum: 2 }));
        assert_eq!("rr:4".parse(), Ok(Algorithm::RoundRobin { quantum: 4 }));
    }

    #[test]
    fn test_parse_display_form() {
        for alg in Algorithm::all(5) {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("lottery".parse::<Algorithm>().is_err());
        assert!("rr:x".parse::<Algorithm>().is_err());
        assert!("fcfs:3".parse::<Algorithm>().is_err());
        let err = "lottery".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scheduling algorithm 'lottery'");
    }

    #[test]
    fn test_preemptive_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::SjfNonPreemptive.is_preemptive());
        assert!(Algorithm::SjfPreemptive.is_preemptive());
        assert!(Algorithm::RoundRobin { quantum: 3 }.is_preemptive());
        assert_eq!(Algorithm::RoundRobin { quantum: 3 }.quantum(), Some(3));
        assert_eq!(Algorithm::Fcfs.quantum(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::Fcfs.to_string(), "FCFS");
        assert_eq!(
            Algorithm::RoundRobin { quantum: 3 }.to_string(),
            "Round Robin (q=3)"
        );
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":3}"#);
        let back: Algorithm = serde_json::from_str(r#"{"kind":"sjf_preemptive"}"#).unwrap();
        assert_eq!(back, Algorithm::SjfPreemptive);
    }
}
