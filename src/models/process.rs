//! Process descriptor model.
//!
//! A process is the unit of scheduling: it arrives at some tick, needs a
//! fixed amount of CPU time, and optionally carries a priority. The
//! engine never mutates descriptors; per-run bookkeeping (remaining time,
//! queue membership) lives in engine-local working state.

use serde::{Deserialize, Serialize};

use super::Tick;

/// A process to be scheduled.
///
/// `name` is the timeline key: every schedule slice and statistics row
/// refers to the process by name. Names need not be unique, but processes
/// sharing a name become indistinguishable in the output.
///
/// # Time Representation
/// `arrival` and `burst` are in ticks on the simulation clock. Callers
/// normally keep `burst >= 1`; a zero-burst process never receives CPU
/// time and reports zeroed statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u64,
    /// Display name and timeline key.
    pub name: String,
    /// Tick at which the process becomes runnable.
    pub arrival: Tick,
    /// Total CPU time required (ticks).
    pub burst: Tick,
    /// Scheduling priority (lower = more urgent). Only the priority
    /// policies consult this.
    pub priority: i32,
}

impl Process {
    /// Creates a new process with the given ID and name.
    ///
    /// Defaults: arrival 0, burst 1, priority 0.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            arrival: 0,
            burst: 1,
            priority: 0,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: Tick) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst: Tick) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Tick at which the process would finish if it ran uninterrupted
    /// from its arrival.
    #[inline]
    pub fn earliest_completion(&self) -> Tick {
        self.arrival + self.burst
    }
}
