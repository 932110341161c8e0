//! Selection rules for dispatching the next process.
//!
//! The SJF and priority disciplines share one control flow and differ
//! only in the key used to pick among ready processes. Each key is a
//! [`SelectionRule`]; ties are always broken by earliest arrival, then
//! by pid.
//!
//! # Usage
//!
//! ```
//! use cpu_schedsim::dispatching::{rules, select_ready};
//! use cpu_schedsim::models::Process;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 2)];
//! assert_eq!(select_ready(&processes, 0, &rules::ShortestBurst), Some(1));
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Process;

/// Key returned by a selection rule. Lower key = dispatched first.
pub type RuleKey = i64;

/// A rule ranking ready processes.
///
/// # Key Convention
/// **Lower key = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Ranking key of a process at the current decision point.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// First-come ordering: earliest arrival, then pid.
pub fn arrival_order(a: &Process, b: &Process) -> Ordering {
    a.arrival.cmp(&b.arrival).then_with(|| a.pid.cmp(&b.pid))
}

/// Orders two processes by `rule`, falling back to [`arrival_order`].
pub fn compare<R: SelectionRule + ?Sized>(rule: &R, a: &Process, b: &Process) -> Ordering {
    rule.key(a)
        .cmp(&rule.key(b))
        .then_with(|| arrival_order(a, b))
}

/// Index of the best process that is ready at `clock`, if any.
pub fn select_ready<R: SelectionRule + ?Sized>(
    processes: &[Process],
    clock: i64,
    rule: &R,
) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready_at(clock))
        .min_by(|(_, a), (_, b)| compare(rule, a, b))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_pid_tie_break() {
        let a = Process::new("P2", 0, 1);
        let b = Process::new("P1", 0, 1);
        assert_eq!(arrival_order(&a, &b), Ordering::Greater);
        let c = Process::new("P9", 0, 1);
        let d = Process::new("P1", 1, 1);
        assert_eq!(arrival_order(&c, &d), Ordering::Less);
    }

    #[test]
    fn test_select_skips_unarrived_and_finished() {
        let mut done = Process::new("P1", 0, 1);
        done.remaining = 0;
        let processes = vec![done, Process::new("P2", 5, 1), Process::new("P3", 2, 9)];
        assert_eq!(select_ready(&processes, 3, &rules::ShortestBurst), Some(2));
        assert_eq!(select_ready(&processes, 1, &rules::ShortestBurst), None);
    }

    #[test]
    fn test_select_tie_breaks() {
        let processes = vec![
            Process::new("P3", 1, 2),
            Process::new("P2", 0, 2),
            Process::new("P1", 0, 2),
        ];
        // Equal bursts → earliest arrival → lowest pid
        assert_eq!(select_ready(&processes, 1, &rules::ShortestBurst), Some(2));
    }
}
