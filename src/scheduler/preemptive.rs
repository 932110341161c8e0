//! Preemptive key-driven scheduling (SRTF, preemptive Priority).
//!
//! # Algorithm
//!
//! Tick-based. At every time unit:
//! 1. Among ready processes pick the smallest key (ties: arrival, pid).
//! 2. Run it for one unit, extending the previous slice when it is the
//!    same process with no gap.
//! 3. If nothing is ready, jump to the next arrival. No slice is emitted
//!    and the next dispatch always opens a fresh slice.
//!
//! # Complexity
//! O(B * n) where B = total burst.

use log::{debug, trace};

use super::idle_jump;
use super::ScheduleError;
use crate::dispatching::{select_ready, SelectionRule};
use crate::models::{Process, Timeline};

/// Runs a preemptive discipline ordered by `rule`.
pub(crate) fn run_preemptive<R: SelectionRule + ?Sized>(
    processes: &mut [Process],
    rule: &R,
) -> Result<Timeline, ScheduleError> {
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut finished = 0;
    let mut last: Option<usize> = None;

    while finished < processes.len() {
        let Some(idx) = select_ready(processes, clock, rule) else {
            clock = idle_jump(processes, clock)?;
            last = None;
            continue;
        };

        if last != Some(idx) {
            match last {
                Some(prev) if processes[prev].remaining > 0 => debug!(
                    "t={clock}: {} preempts {} with {}",
                    rule.name(),
                    processes[prev].pid,
                    processes[idx].pid
                ),
                _ => debug!("t={clock}: {} dispatch {}", rule.name(), processes[idx].pid),
            }
        }

        let p = &mut processes[idx];
        trace!("t={clock}: tick {} (key {})", p.pid, rule.key(p));
        p.mark_dispatched(clock);
        timeline.push(&p.pid, clock, 1);
        p.consume(clock, 1);
        clock += 1;

        if p.remaining == 0 {
            debug!("t={clock}: {} done", p.pid);
            finished += 1;
        }
        last = Some(idx);
    }

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestRemaining};
    use crate::models::Slice;

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let mut processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let timeline = run_preemptive(&mut processes, &ShortestRemaining).unwrap();
        assert_eq!(
            timeline.slices,
            vec![
                Slice::new("P1", 0, 1),
                Slice::new("P2", 1, 4),
                Slice::new("P4", 5, 5),
                Slice::new("P1", 10, 7),
                Slice::new("P3", 17, 9),
            ]
        );
        assert_eq!(processes[0].start_time, Some(0));
        assert_eq!(processes[0].completion_time, Some(17));
        assert_eq!(processes[1].completion_time, Some(5));
        assert_eq!(processes[3].response_time, Some(2));
    }

    #[test]
    fn test_srtf_no_preemption_without_arrivals() {
        let mut processes = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 2)];
        let timeline = run_preemptive(&mut processes, &ShortestRemaining).unwrap();
        assert_eq!(
            timeline.slices,
            vec![Slice::new("P2", 0, 2), Slice::new("P1", 2, 3)]
        );
    }

    #[test]
    fn test_idle_gap_opens_fresh_slice() {
        let mut processes = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 1)];
        let timeline = run_preemptive(&mut processes, &ShortestRemaining).unwrap();
        assert_eq!(
            timeline.slices,
            vec![Slice::new("P1", 0, 2), Slice::new("P2", 5, 1)]
        );
        assert_eq!(processes[1].start_time, Some(5));
    }

    #[test]
    fn test_priority_preemptive() {
        let mut processes = vec![
            Process::new("P1", 0, 4).with_priority(3),
            Process::new("P2", 1, 2).with_priority(1),
            Process::new("P3", 2, 1).with_priority(2),
        ];
        let timeline = run_preemptive(&mut processes, &HighestPriority).unwrap();
        assert_eq!(
            timeline.slices,
            vec![
                Slice::new("P1", 0, 1),
                Slice::new("P2", 1, 2),
                Slice::new("P3", 3, 1),
                Slice::new("P1", 4, 3),
            ]
        );
        assert_eq!(processes[0].completion_time, Some(7));
        assert_eq!(processes[0].start_time, Some(0));
    }

    #[test]
    fn test_priority_tie_keeps_earlier_arrival() {
        let mut processes = vec![
            Process::new("P1", 0, 3).with_priority(1),
            Process::new("P0", 1, 1).with_priority(1),
        ];
        let timeline = run_preemptive(&mut processes, &HighestPriority).unwrap();
        assert_eq!(
            timeline.slices,
            vec![Slice::new("P1", 0, 3), Slice::new("P0", 3, 1)]
        );
    }
}
