//! Event-driven preemptive strategies.
//!
//! Shortest Remaining Time First and preemptive priority scheduling
//! share one algorithm. The run decision can only change when a process
//! arrives or runs out of work, so instead of stepping tick by tick the
//! simulation advances over an event horizon built from every arrival
//! and every uninterrupted completion time.

use std::collections::BTreeSet;

use crate::models::{Process, Schedule, ScheduleItem, Tick};

use super::{select_min, workloads, SelectionKey};

/// Runs the eligible process with the minimum selection score between
/// consecutive horizon events, preempting whenever a reselection picks
/// someone else.
///
/// Within each inter-event interval the current process runs for
/// `min(interval, remaining)`; the clock then advances to the event and
/// the minimum-score eligible process is reselected. [`SelectionKey`]
/// decides the discipline: remaining time gives SRTF, static priority
/// gives preemptive priority scheduling. Ties keep input order.
///
/// Preemption can push work past the last horizon event; whatever is
/// left over drains sequentially in input order. The returned timeline
/// is merged, so back-to-back slices of one process read as a single
/// item.
pub fn preemptive(processes: &[Process], key: SelectionKey) -> Schedule {
    let mut pool = workloads(processes);
    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;
    let mut current: Option<usize> = None;

    for event in event_horizon(processes) {
        if let Some(idx) = current {
            if clock < event {
                let span = (event - clock).min(pool[idx].remaining);
                extend_or_push(&mut schedule, &pool[idx].process.name, clock, clock + span);
                pool[idx].remaining -= span;
                clock += span;
            }
        }
        clock = clock.max(event);
        current = select_min(&pool, key, clock);
    }

    // Leftover work after the final event drains in input order.
    for workload in pool.iter_mut() {
        if workload.remaining > 0 {
            let end = clock + workload.remaining;
            schedule.push(ScheduleItem::new(&workload.process.name, clock, end));
            clock = end;
            workload.remaining = 0;
        }
    }

    schedule.merged()
}

/// Distinct ticks at which the run decision can change: every arrival
/// and every uninterrupted completion time, in ascending order.
fn event_horizon(processes: &[Process]) -> BTreeSet<Tick> {
    processes
        .iter()
        .flat_map(|p| [p.arrival, p.earliest_completion()])
        .collect()
}

/// Appends a slice, extending the previous one when the same process
/// keeps the CPU across an event boundary.
fn extend_or_push(schedule: &mut Schedule, name: &str, start: Tick, end: Tick) {
    match schedule.items.last_mut() {
        Some(last) if last.process == name => last.end = end,
        _ => schedule.push(ScheduleItem::new(name, start, end)),
    }
}
