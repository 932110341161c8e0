//! Random workload generation.
//!
//! Produces process sets with pids `P1..Pn` and uniformly drawn arrival,
//! burst and priority values. Pass a seeded RNG for reproducible sets.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Process, ProcessSet};

/// Parameters for a random process set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWorkload {
    /// Number of processes.
    pub count: usize,
    /// Arrival time range.
    pub arrival: RangeInclusive<i64>,
    /// Burst range. Its lower bound should be at least 1.
    pub burst: RangeInclusive<i64>,
    /// Priority range.
    pub priority: RangeInclusive<i32>,
}

impl RandomWorkload {
    /// Five processes, arrivals 0..=5, bursts 1..=8, priorities 1..=5.
    pub fn new() -> Self {
        Self {
            count: 5,
            arrival: 0..=5,
            burst: 1..=8,
            priority: 1..=5,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the arrival range.
    pub fn with_arrival(mut self, arrival: RangeInclusive<i64>) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst(mut self, burst: RangeInclusive<i64>) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        self.priority = priority;
        self
    }

    /// Draws a fresh process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ProcessSet {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(self.arrival.clone()),
                    rng.random_range(self.burst.clone()),
                )
                .with_priority(rng.random_range(self.priority.clone()))
            })
            .collect()
    }
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self::new()
    }
}
