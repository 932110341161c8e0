//! CPU scheduling simulator.
//!
//! Given a set of processes (arrival, burst, priority) and a discipline,
//! computes the execution timeline (Gantt sequence) and per-process
//! timing metrics on a single simulated CPU.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `Timeline`, `Slice`
//! - **`dispatching`**: Selection rules (SJF, SRTF, priority) and tie-breaks
//! - **`scheduler`**: The six disciplines, `CpuScheduler`, KPIs
//! - **`validation`**: Input integrity checks (duplicate pids, bad bursts)
//! - **`generator`**: Seeded random workloads
//!
//! # Architecture
//!
//! Every run operates on an independent working copy of the caller's
//! process set and writes timing fields back only after it finished.
//! Rendering, tables and wall-clock conversion belong to consumers of
//! the timeline; none of them feed back into scheduling decisions.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;
