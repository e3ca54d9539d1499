//! CPU scheduling simulation engine.
//!
//! Simulates how a single CPU executes a fixed fleet of processes under
//! one of six classical dispatch disciplines, producing the execution
//! timeline and the statistics derived from it. Time is a synthetic
//! integer clock: nothing here touches wall-clock time, threads, or
//! real processes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ScheduleItem`, `Schedule`
//! - **`policy`**: The closed set of disciplines and their identifiers
//! - **`scheduler`**: Policy strategies and schedule statistics
//! - **`engine`**: The `simulate` dispatcher and `Simulation` builder
//! - **`validation`**: Input integrity checks and clamping for hosts
//!
//! # Pipeline
//!
//! A run flows one way: descriptors feed a policy strategy, the strategy
//! emits a timeline, adjacent same-process slices merge, and statistics
//! are derived at the end. Strategies work on run-local state, so caller
//! descriptors are never mutated and concurrent runs need no locking.
//!
//! # Example
//!
//! ```
//! use cpu_sched::engine::simulate;
//! use cpu_sched::models::Process;
//!
//! let fleet = vec![
//!     Process::new(1, "P1").with_burst(5),
//!     Process::new(2, "P2").with_arrival(1).with_burst(3),
//! ];
//!
//! let result = simulate(&fleet, "sjf-preemptive", 2);
//! assert_eq!(result.schedule.to_string(), "P1[0,1) P2[1,4) P1[4,8)");
//! assert_eq!(result.schedule.busy_time(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod validation;
