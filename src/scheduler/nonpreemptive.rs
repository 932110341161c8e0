//! Non-preemptive key-driven scheduling (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Among processes with `arrival <= clock` that are not finished,
//!    pick the smallest key (ties: arrival, then pid).
//! 2. Run it to completion as one slice.
//! 3. If nothing is ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n²): one linear selection per process.

use log::debug;

use super::idle_jump;
use super::ScheduleError;
use crate::dispatching::{select_ready, SelectionRule};
use crate::models::{Process, Timeline};

/// Runs a non-preemptive discipline ordered by `rule`.
pub(crate) fn run_to_completion<R: SelectionRule + ?Sized>(
    processes: &mut [Process],
    rule: &R,
) -> Result<Timeline, ScheduleError> {
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let Some(idx) = select_ready(processes, clock, rule) else {
            clock = idle_jump(processes, clock)?;
            continue;
        };

        let p = &mut processes[idx];
        let run = p.remaining;
        debug!(
            "t={clock}: {} dispatch {} (key {}) for {run}",
            rule.name(),
            p.pid,
            rule.key(p)
        );
        p.mark_dispatched(clock);
        timeline.push(&p.pid, clock, run);
        p.consume(clock, run);
        clock += run;
        completed += 1;
    }

    Ok(timeline)
}
