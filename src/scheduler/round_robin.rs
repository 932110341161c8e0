//! Round Robin.
//!
//! # Algorithm
//!
//! FIFO ready queue, one slice per quantum:
//! 1. If the queue is empty, jump to the next arrival.
//! 2. Admit every process with `arrival <= clock` (arrival, then pid order).
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the run, *then* re-queue the
//!    preempted process if it still has work.
//!
//! # Complexity
//! O(n log n + B / q) where B = total burst, q = quantum.

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec::IntoIter;

use log::debug;

use crate::dispatching::arrival_order;
use crate::models::{Process, Timeline};

/// Runs round robin with the given quantum over a working copy.
///
/// The quantum must be positive; callers validate it first.
pub(crate) fn round_robin(processes: &mut [Process], quantum: i64) -> Timeline {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by(|&a, &b| arrival_order(&processes[a], &processes[b]));
    let mut unarrived = order.into_iter().peekable();

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut clock = 0;

    loop {
        admit(processes, &mut unarrived, &mut queue, clock);

        let idx = match queue.pop_front() {
            Some(idx) => idx,
            None => match unarrived.peek() {
                Some(&next) => {
                    debug!("t={clock}: idle until {}", processes[next].arrival);
                    clock = processes[next].arrival;
                    continue;
                }
                None => break,
            },
        };

        let p = &mut processes[idx];
        let run = quantum.min(p.remaining);
        debug!("t={clock}: RR dispatch {} for {run}", p.pid);
        p.mark_dispatched(clock);
        timeline.push(&p.pid, clock, run);
        p.consume(clock, run);
        clock += run;

        admit(processes, &mut unarrived, &mut queue, clock);

        if processes[idx].remaining > 0 {
            queue.push_back(idx);
        } else {
            debug!("t={clock}: {} done", processes[idx].pid);
        }
    }

    timeline
}

/// Moves every process that has arrived by `clock` onto the ready queue.
fn admit(
    processes: &[Process],
    unarrived: &mut Peekable<IntoIter<usize>>,
    queue: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(idx) = unarrived.next_if(|&i| processes[i].arrival <= clock) {
        queue.push_back(idx);
    }
}
