//! Simulation entry points.
//!
//! One dispatcher maps a policy to its strategy, runs it over the fleet,
//! and derives the statistics: the whole pipeline behind a single call.
//! The engine is a pure synchronous computation over caller-supplied
//! slices; concurrent calls from independent threads need no
//! synchronization because every run clones what it needs into run-local
//! working state.

use crate::models::{Process, Tick};
use crate::policy::Policy;
use crate::scheduler::{
    fcfs, nonpreemptive, preemptive, round_robin, SchedulingResult, SelectionKey,
};

/// Round Robin time quantum used when a host does not configure one.
pub const DEFAULT_TIME_QUANTUM: Tick = 2;

/// A configured simulation run.
///
/// # Example
/// ```
/// use cpu_sched::engine::Simulation;
/// use cpu_sched::models::Process;
/// use cpu_sched::policy::Policy;
///
/// let fleet = vec![
///     Process::new(1, "P1").with_burst(5),
///     Process::new(2, "P2").with_arrival(1).with_burst(3),
/// ];
///
/// let result = Simulation::new(Policy::RoundRobin).with_quantum(2).run(&fleet);
/// assert_eq!(result.schedule.makespan(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    policy: Policy,
    quantum: Tick,
}

impl Simulation {
    /// Creates a simulation with the default time quantum.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_TIME_QUANTUM,
        }
    }

    /// Sets the Round Robin time quantum. Ignored by every other policy.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    /// Runs the configured policy over the fleet and derives statistics.
    ///
    /// Descriptors are read, never mutated; the same fleet slice can be
    /// simulated under any number of policies.
    pub fn run(&self, processes: &[Process]) -> SchedulingResult {
        let schedule = match self.policy {
            Policy::Fcfs => fcfs(processes),
            Policy::SjfNonPreemptive => nonpreemptive(processes, SelectionKey::RemainingTime),
            Policy::SjfPreemptive => preemptive(processes, SelectionKey::RemainingTime),
            Policy::PriorityNonPreemptive => nonpreemptive(processes, SelectionKey::Priority),
            Policy::PriorityPreemptive => preemptive(processes, SelectionKey::Priority),
            Policy::RoundRobin => round_robin(processes, self.quantum),
        };
        SchedulingResult::calculate(processes, schedule)
    }
}

/// Simulates a fleet under the policy named by `policy_id`.
///
/// The identifier goes through [`Policy::resolve`], so anything outside
/// the published table runs as FCFS instead of failing. `time_quantum`
/// only matters when the identifier names Round Robin.
///
/// # Example
/// ```
/// use cpu_sched::engine::simulate;
/// use cpu_sched::models::Process;
///
/// let fleet = vec![
///     Process::new(1, "P1").with_arrival(0).with_burst(5),
///     Process::new(2, "P2").with_arrival(1).with_burst(3),
///     Process::new(3, "P3").with_arrival(2).with_burst(8),
///     Process::new(4, "P4").with_arrival(3).with_burst(2),
/// ];
///
/// let result = simulate(&fleet, "fcfs", 2);
/// assert_eq!(result.schedule.to_string(), "P1[0,5) P2[5,8) P3[8,16) P4[16,18)");
/// assert!((result.average_waiting - 5.75).abs() < 1e-10);
/// ```
pub fn simulate(processes: &[Process], policy_id: &str, time_quantum: Tick) -> SchedulingResult {
    Simulation::new(Policy::resolve(policy_id))
        .with_quantum(time_quantum)
        .run(processes)
}
