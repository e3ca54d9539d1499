//! First Come First Serve.
//!
//! The baseline discipline and the fallback for unrecognized policy
//! identifiers: processes run to completion in arrival order.

use crate::models::{Process, Schedule, ScheduleItem, Tick};

/// Schedules every process once, in arrival order.
///
/// Arrival ties keep the caller's ordering (the sort is stable). When
/// the clock trails the next arrival it jumps forward, leaving an idle
/// gap in the timeline. Each process runs exactly once, so no merge
/// pass is needed. Zero-burst processes are skipped.
pub fn fcfs(processes: &[Process]) -> Schedule {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival);

    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;
    for process in order {
        if process.burst == 0 {
            continue;
        }
        let start = clock.max(process.arrival);
        let end = start + process.burst;
        schedule.push(ScheduleItem::new(&process.name, start, end));
        clock = end;
    }
    schedule
}
