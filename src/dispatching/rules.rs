//! Built-in selection rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ShortestBurst` | total burst | SJF (non-preemptive) |
//! | `ShortestRemaining` | remaining service | SJF (preemptive) / SRTF |
//! | `HighestPriority` | priority value | Priority (both variants) |

use super::{RuleKey, SelectionRule};
use crate::models::Process;

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst. Minimizes mean
/// waiting time among non-preemptive disciplines.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Re-evaluated every tick, so a newly arrived short process preempts
/// the running one.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Static priority. Lower numeric value = more important.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
