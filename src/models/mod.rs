//! CPU scheduling domain models.
//!
//! Provides the process records the engine reads and writes, and the
//! execution timeline it produces.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Plain input record |
//! | `Process` | Input fields plus runtime timing fields |
//! | `ProcessSet` | Ordered collection, copied per run and committed back |
//! | `Timeline` / `Slice` | Merged Gantt sequence of a run |

mod process;
mod timeline;

pub use process::{Process, ProcessSet, ProcessSpec, ProcessState};
pub use timeline::{Slice, Timeline};
