//! Round Robin time slicing.
//!
//! An explicit FIFO ready queue hands out fixed quanta. Processes that
//! arrived while a slice ran enter the queue before the preempted
//! process re-enters, which decides who owns the next quantum when
//! several become ready at once.

use std::collections::VecDeque;

use crate::models::{Process, Schedule, ScheduleItem, Tick};

use super::{workloads, Workload};

/// Time-slices the fleet with the given quantum.
///
/// Each process joins the ready queue exactly once, in arrival order
/// (ties keep input order), and re-enters at the tail after an
/// unfinished slice. A quantum of 0 is treated as 1 so the simulation
/// always advances. The returned timeline is merged, so back-to-back
/// quanta granted to one process read as a single slice.
pub fn round_robin(processes: &[Process], quantum: Tick) -> Schedule {
    let quantum = quantum.max(1);
    let mut pool = workloads(processes);

    // Admission scans an arrival-sorted view with a cursor, so each
    // process is admitted at most once. Zero-burst processes never queue.
    let mut arrivals: Vec<usize> = (0..pool.len()).collect();
    arrivals.retain(|&idx| pool[idx].remaining > 0);
    arrivals.sort_by_key(|&idx| pool[idx].process.arrival);
    let mut cursor = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;

    loop {
        admit(&pool, &arrivals, &mut cursor, clock, &mut queue);

        let idx = match queue.pop_front() {
            Some(idx) => idx,
            None => {
                if cursor >= arrivals.len() {
                    break;
                }
                // Idle: jump to the next pending arrival.
                clock = pool[arrivals[cursor]].process.arrival;
                continue;
            }
        };

        let span = quantum.min(pool[idx].remaining);
        schedule.push(ScheduleItem::new(
            &pool[idx].process.name,
            clock,
            clock + span,
        ));
        pool[idx].remaining -= span;
        clock += span;

        if pool[idx].remaining > 0 {
            // Slice-period arrivals queue ahead of the preempted process.
            admit(&pool, &arrivals, &mut cursor, clock, &mut queue);
            queue.push_back(idx);
        }
    }

    schedule.merged()
}

/// Moves every process that has arrived by `now` from the pending view
/// into the ready queue.
fn admit(
    pool: &[Workload<'_>],
    arrivals: &[usize],
    cursor: &mut usize,
    now: Tick,
    queue: &mut VecDeque<usize>,
) {
    while *cursor < arrivals.len() && pool[arrivals[*cursor]].process.arrival <= now {
        queue.push_back(arrivals[*cursor]);
        *cursor += 1;
    }
}
