//! Schedule statistics.
//!
//! Derives per-process records and fleet-wide aggregates from a
//! completed timeline and its input descriptors.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest end among the process's slices |
//! | Turnaround | Completion - arrival |
//! | Waiting | Turnaround - burst |
//! | Avg Turnaround | Mean turnaround across the fleet |
//! | Avg Waiting | Mean waiting across the fleet |
//! | CPU Utilization | Total burst / final end time |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule, Tick};

/// Derived timing record for one process.
///
/// Rows follow the caller's input order regardless of execution order.
/// A process that never ran reports completion 0 with zeroed derived
/// times; the subtractions saturate so even a mismatched timeline cannot
/// wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process name (timeline key).
    pub process: String,
    /// Arrival tick, copied from the descriptor.
    pub arrival: Tick,
    /// Burst time, copied from the descriptor.
    pub burst: Tick,
    /// Latest end among the process's slices (0 if it never ran).
    pub completion: Tick,
    /// Completion - arrival.
    pub turnaround: Tick,
    /// Turnaround - burst: time spent ready but not running.
    pub waiting: Tick,
}

impl ProcessStats {
    fn derive(process: &Process, schedule: &Schedule) -> Self {
        let completion = schedule.completion_time(&process.name).unwrap_or(0);
        let turnaround = completion.saturating_sub(process.arrival);
        let waiting = turnaround.saturating_sub(process.burst);
        debug_assert!(
            completion == 0 || turnaround >= process.burst,
            "process '{}' completed at {} before consuming its burst",
            process.name,
            completion
        );

        Self {
            process: process.name.clone(),
            arrival: process.arrival,
            burst: process.burst,
            completion,
            turnaround,
            waiting,
        }
    }
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// The merged execution timeline.
    pub schedule: Schedule,
    /// Per-process statistics, in input order.
    pub process_stats: Vec<ProcessStats>,
    /// Mean turnaround time (0.0 for an empty fleet).
    pub average_turnaround: f64,
    /// Mean waiting time (0.0 for an empty fleet).
    pub average_waiting: f64,
    /// Total burst over final end time, in `[0.0, 1.0]`. 0.0 when the
    /// timeline is empty.
    pub cpu_utilization: f64,
}

impl SchedulingResult {
    /// Derives statistics for a fleet from its completed timeline.
    ///
    /// Aggregate denominators are guarded: an empty fleet reports 0.0
    /// averages rather than NaN, and an empty timeline reports 0.0
    /// utilization.
    ///
    /// # Arguments
    /// * `processes` - The input fleet (for arrivals and bursts).
    /// * `schedule` - The completed timeline the fleet produced.
    pub fn calculate(processes: &[Process], schedule: Schedule) -> Self {
        let process_stats: Vec<ProcessStats> = processes
            .iter()
            .map(|p| ProcessStats::derive(p, &schedule))
            .collect();

        let (average_turnaround, average_waiting) = if process_stats.is_empty() {
            (0.0, 0.0)
        } else {
            let count = process_stats.len() as f64;
            let turnaround: Tick = process_stats.iter().map(|s| s.turnaround).sum();
            let waiting: Tick = process_stats.iter().map(|s| s.waiting).sum();
            (turnaround as f64 / count, waiting as f64 / count)
        };

        let total_burst: Tick = processes.iter().map(|p| p.burst).sum();
        let makespan = schedule.makespan();
        let cpu_utilization = if makespan > 0 {
            total_burst as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            schedule,
            process_stats,
            average_turnaround,
            average_waiting,
            cpu_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{fcfs, nonpreemptive, SelectionKey};

    fn make_process(id: u64, arrival: Tick, burst: Tick) -> Process {
        Process::new(id, format!("P{id}"))
            .with_arrival(arrival)
            .with_burst(burst)
    }

    fn sample_fleet() -> Vec<Process> {
        vec![
            make_process(1, 0, 5),
            make_process(2, 1, 3),
            make_process(3, 2, 8),
            make_process(4, 3, 2),
        ]
    }

    #[test]
    fn test_stats_fcfs_sample_fleet() {
        let fleet = sample_fleet();
        let result = SchedulingResult::calculate(&fleet, fcfs(&fleet));

        let expected = [
            ("P1", 5, 5, 0),
            ("P2", 8, 7, 4),
            ("P3", 16, 14, 6),
            ("P4", 18, 15, 13),
        ];
        for (row, (name, completion, turnaround, waiting)) in
            result.process_stats.iter().zip(expected)
        {
            assert_eq!(row.process, name);
            assert_eq!(row.completion, completion);
            assert_eq!(row.turnaround, turnaround);
            assert_eq!(row.waiting, waiting);
        }

        assert!((result.average_turnaround - 10.25).abs() < 1e-10);
        assert!((result.average_waiting - 5.75).abs() < 1e-10);
        assert!((result.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_rows_follow_input_order() {
        let fleet = sample_fleet();
        // SJF runs P4 second and P2 third; the rows must not reorder.
        let result =
            SchedulingResult::calculate(&fleet, nonpreemptive(&fleet, SelectionKey::RemainingTime));

        let names: Vec<&str> = result
            .process_stats
            .iter()
            .map(|s| s.process.as_str())
            .collect();
        assert_eq!(names, ["P1", "P2", "P3", "P4"]);
        assert!((result.average_waiting - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_counts_idle_gaps() {
        let fleet = vec![make_process(1, 2, 3), make_process(2, 10, 1)];
        let result = SchedulingResult::calculate(&fleet, fcfs(&fleet));

        // Busy 4 of 11 ticks; the [0,2) and [5,10) gaps count against it.
        assert!((result.cpu_utilization - 4.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty_fleet() {
        let result = SchedulingResult::calculate(&[], Schedule::new());
        assert!(result.schedule.is_empty());
        assert!(result.process_stats.is_empty());
        assert_eq!(result.average_turnaround, 0.0);
        assert_eq!(result.average_waiting, 0.0);
        assert_eq!(result.cpu_utilization, 0.0);
    }

    #[test]
    fn test_stats_process_missing_from_timeline() {
        let fleet = vec![make_process(1, 3, 4)];
        let result = SchedulingResult::calculate(&fleet, Schedule::new());

        let row = &result.process_stats[0];
        assert_eq!(row.completion, 0);
        assert_eq!(row.turnaround, 0);
        assert_eq!(row.waiting, 0);
        assert_eq!(result.cpu_utilization, 0.0);
    }

    #[test]
    fn test_shared_name_shares_completion() {
        // Two descriptors with one name are indistinguishable in the
        // timeline, so both report the later completion.
        let fleet = vec![
            Process::new(1, "P").with_arrival(0).with_burst(2),
            Process::new(2, "P").with_arrival(4).with_burst(2),
        ];
        let result = SchedulingResult::calculate(&fleet, fcfs(&fleet));

        assert_eq!(result.schedule.to_string(), "P[0,2) P[4,6)");
        assert_eq!(result.process_stats[0].completion, 6);
        assert_eq!(result.process_stats[1].completion, 6);
        assert_eq!(result.process_stats[0].waiting, 4);
        assert_eq!(result.process_stats[1].waiting, 0);
    }

    #[test]
    fn test_result_serde_shape() {
        let fleet = sample_fleet();
        let result = SchedulingResult::calculate(&fleet, fcfs(&fleet));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["schedule"]["items"][0]["process"], "P1");
        assert_eq!(value["schedule"]["items"][0]["start"], 0);
        assert_eq!(value["schedule"]["items"][0]["end"], 5);
        assert_eq!(value["process_stats"][3]["waiting"], 13);
        assert_eq!(value["average_waiting"], 5.75);
        assert_eq!(value["cpu_utilization"], 1.0);

        let back: SchedulingResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
