//! Policy strategy implementations and schedule statistics.
//!
//! Each strategy maps a process fleet to an execution timeline. The six
//! supported disciplines share a few control-flow families:
//!
//! # Families
//!
//! - **Arrival order**: FCFS (stable sort by arrival, one run each)
//! - **Pick-minimum, run to completion**: SJF, Priority non-preemptive
//! - **Pick-minimum, event-driven**: SRTF, Priority preemptive
//! - **Time slicing**: Round Robin (FIFO ready queue, fixed quanta)
//!
//! # Score Convention
//! Selection keys return lower scores for processes that should run
//! first; ties resolve toward the earliest input position, so every
//! strategy is stable with respect to the caller's ordering.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod nonpreemptive;
mod preemptive;
mod round_robin;
mod stats;

pub use fcfs::fcfs;
pub use nonpreemptive::nonpreemptive;
pub use preemptive::preemptive;
pub use round_robin::round_robin;
pub use stats::{ProcessStats, SchedulingResult};

use crate::models::{Process, Tick};

/// Selection key for the pick-minimum strategies.
///
/// Swapping the key is the only difference between the SJF and priority
/// disciplines; control flow stays identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    /// Score by remaining CPU time. Before a process first runs this
    /// equals its full burst, so a run-to-completion strategy using it
    /// is plain shortest-job-first.
    RemainingTime,
    /// Score by static priority (lower = more urgent).
    Priority,
}

impl SelectionKey {
    fn score(&self, workload: &Workload<'_>) -> i64 {
        match self {
            SelectionKey::RemainingTime => workload.remaining as i64,
            SelectionKey::Priority => i64::from(workload.process.priority),
        }
    }
}

/// Engine-local working record for one process.
///
/// Strategies consume CPU time from `remaining`; the caller's descriptor
/// is never touched.
struct Workload<'a> {
    process: &'a Process,
    remaining: Tick,
}

/// Builds the working set for a run. Input order is preserved, which is
/// what makes tie-breaking stable.
fn workloads(processes: &[Process]) -> Vec<Workload<'_>> {
    processes
        .iter()
        .map(|p| Workload {
            process: p,
            remaining: p.burst,
        })
        .collect()
}

/// Index of the first eligible workload with the minimum selection
/// score, or `None` when nothing has arrived or everything is done.
///
/// Eligible means arrived by `now` with CPU time left. Later workloads
/// replace the best only on a strictly smaller score, so ties keep the
/// earliest input position.
fn select_min(pool: &[Workload<'_>], key: SelectionKey, now: Tick) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, workload) in pool.iter().enumerate() {
        if workload.remaining == 0 || workload.process.arrival > now {
            continue;
        }
        let score = key.score(workload);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Earliest arrival among unfinished workloads, for jumping the clock
/// over idle gaps.
fn next_arrival(pool: &[Workload<'_>]) -> Option<Tick> {
    pool.iter()
        .filter(|w| w.remaining > 0)
        .map(|w| w.process.arrival)
        .min()
}
