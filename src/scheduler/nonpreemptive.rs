//! Run-to-completion selection strategies.
//!
//! Shortest Job First and non-preemptive priority scheduling are the
//! same loop with the selection key swapped: pick the minimum-score
//! eligible process, run it to completion, rescan.

use crate::models::{Process, Schedule, ScheduleItem, Tick};

use super::{next_arrival, select_min, workloads, SelectionKey};

/// Repeatedly runs the eligible process with the minimum selection score
/// to completion.
///
/// [`SelectionKey::RemainingTime`] yields Shortest Job First;
/// [`SelectionKey::Priority`] yields non-preemptive priority scheduling.
/// A more attractive process arriving mid-run waits for the current one
/// to finish. When nothing has arrived yet, the clock jumps to the
/// earliest pending arrival. Ties keep input order.
pub fn nonpreemptive(processes: &[Process], key: SelectionKey) -> Schedule {
    let mut pool = workloads(processes);
    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;

    loop {
        match select_min(&pool, key, clock) {
            Some(idx) => {
                let span = pool[idx].remaining;
                schedule.push(ScheduleItem::new(
                    &pool[idx].process.name,
                    clock,
                    clock + span,
                ));
                clock += span;
                pool[idx].remaining = 0;
            }
            // Nothing eligible: idle until the next arrival, or done.
            None => match next_arrival(&pool) {
                Some(arrival) => clock = arrival,
                None => break,
            },
        }
    }
    schedule
}
