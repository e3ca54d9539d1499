//! Execution timeline model.
//!
//! A schedule is the ordered sequence of CPU slices a policy produced.
//! Items are appended in non-decreasing start order and never overlap;
//! after merging, no two consecutive items belong to the same process.
//! Idle CPU time shows up as a gap between one item's end and the next
//! item's start, never as an explicit entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tick;

/// One contiguous CPU slice: `process` owns the CPU for `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Name of the process that holds the CPU.
    pub process: String,
    /// Slice start (inclusive).
    pub start: Tick,
    /// Slice end (exclusive).
    pub end: Tick,
}

impl ScheduleItem {
    /// Creates a new slice.
    pub fn new(process: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            process: process.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{})", self.process, self.start, self.end)
    }
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU slices in execution order.
    pub items: Vec<ScheduleItem>,
}

impl Schedule {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Callers append in non-decreasing start order.
    pub fn push(&mut self, item: ScheduleItem) {
        self.items.push(item);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Makespan: latest end time across all slices (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.items.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total CPU-busy time: the sum of all slice lengths.
    ///
    /// Equals the makespan minus idle gaps, and under any work-conserving
    /// policy equals the fleet's total burst.
    pub fn busy_time(&self) -> Tick {
        self.items.iter().map(|i| i.duration()).sum()
    }

    /// Completion time for a process: latest end among its slices.
    ///
    /// `None` if the process never appears in the timeline.
    pub fn completion_time(&self, process: &str) -> Option<Tick> {
        self.items
            .iter()
            .filter(|i| i.process == process)
            .map(|i| i.end)
            .max()
    }

    /// Returns all slices belonging to a process.
    pub fn items_for(&self, process: &str) -> Vec<&ScheduleItem> {
        self.items.iter().filter(|i| i.process == process).collect()
    }

    /// Coalesces consecutive slices of the same process.
    ///
    /// Every run of consecutive items sharing a process name collapses
    /// into one item spanning from the first start to the last end.
    /// Slices of the same process separated by another process's slice
    /// stay separate. Idempotent.
    pub fn merged(&self) -> Schedule {
        let mut items: Vec<ScheduleItem> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match items.last_mut() {
                Some(last) if last.process == item.process => last.end = item.end,
                _ => items.push(item.clone()),
            }
        }
        Schedule { items }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
