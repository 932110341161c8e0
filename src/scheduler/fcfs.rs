//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival, then pid.
//! 2. For each process, advance the clock to `max(clock, arrival)`.
//! 3. Run it to completion as a single slice.
//!
//! # Complexity
//! O(n log n).

use log::debug;

use crate::dispatching::arrival_order;
use crate::models::{Process, Timeline};

/// Runs FCFS over a working copy, stamping timing fields in place.
pub(crate) fn fcfs(processes: &mut [Process]) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by(|&a, &b| arrival_order(&processes[a], &processes[b]));

    let mut timeline = Timeline::new();
    let mut clock = 0;

    for idx in order {
        let p = &mut processes[idx];
        if clock < p.arrival {
            debug!("idle {}..{}", clock, p.arrival);
            clock = p.arrival;
        }

        let run = p.remaining;
        debug!("t={clock}: dispatch {} for {run}", p.pid);
        p.mark_dispatched(clock);
        timeline.push(&p.pid, clock, run);
        p.consume(clock, run);
        clock += run;
    }

    timeline
}
