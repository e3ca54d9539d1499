//! Simulation domain models.
//!
//! Provides the core data types for describing a process fleet and the
//! execution timeline a scheduling policy produces. All simulation time
//! is a synthetic integer clock ([`Tick`]); nothing here maps to
//! wall-clock time.
//!
//! # Vocabulary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Arrival | Tick at which a process becomes runnable |
//! | Burst | Total CPU time a process requires |
//! | Slice | One contiguous interval of CPU ownership |
//! | Makespan | End of the last slice in a timeline |
//! | Completion | Latest end among one process's slices |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{Schedule, ScheduleItem};

/// Synthetic simulation clock unit.
///
/// The clock starts at 0 and only moves forward. Consumers decide what a
/// tick stands for (a millisecond, a cycle, a textbook time unit).
pub type Tick = u64;
