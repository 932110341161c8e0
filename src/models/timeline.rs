//! Execution timeline (Gantt sequence).
//!
//! A timeline is the dispatch history of one simulation run: an ordered,
//! non-overlapping sequence of slices. Gaps between slices are CPU idle
//! time. Adjacent slices of the same process with contiguous time ranges
//! are always merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that held the CPU.
    pub pid: String,
    /// Start time.
    pub start: i64,
    /// Length of the stretch (always positive).
    pub duration: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, duration: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            duration,
        }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}..{}]", self.pid, self.start, self.end())
    }
}

/// Ordered, compressed sequence of execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in time order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timeline from arbitrary slices, merging contiguous runs of
    /// the same pid. Zero-length slices are dropped.
    pub fn compress(slices: impl IntoIterator<Item = Slice>) -> Self {
        let mut timeline = Self::new();
        for slice in slices {
            timeline.push(slice.pid, slice.start, slice.duration);
        }
        timeline
    }

    /// Appends `duration` units for `pid` starting at `start`.
    ///
    /// Extends the last slice in place when it belongs to the same pid and
    /// ends exactly at `start`; otherwise appends a new slice. Non-positive
    /// durations are ignored.
    pub fn push(&mut self, pid: impl AsRef<str>, start: i64, duration: i64) {
        if duration <= 0 {
            return;
        }
        let pid = pid.as_ref();
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end() == start {
                last.duration += duration;
                return;
            }
        }
        self.slices.push(Slice::new(pid, start, duration));
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterates slices in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    /// Total CPU time covered by slices.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// End time of the last slice (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(Slice::end).unwrap_or(0)
    }

    /// Idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// CPU utilization over `[0, makespan)`.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// All slices of one process.
    pub fn slices_for(&self, pid: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of boundaries where one process hands the CPU to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Whether slices are positive, time-ordered, non-overlapping and
    /// fully merged.
    pub fn is_well_formed(&self) -> bool {
        if self.slices.iter().any(|s| s.duration <= 0 || s.start < 0) {
            return false;
        }
        self.slices.windows(2).all(|w| {
            let (prev, next) = (&w[0], &w[1]);
            next.start >= prev.end() && !(next.pid == prev.pid && next.start == prev.end())
        })
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slice) in self.slices.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slice}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
