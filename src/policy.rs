//! Scheduling policy identifiers.
//!
//! The engine supports a closed set of six classical disciplines. Hosts
//! usually address them by wire identifier (`"fcfs"`, `"sjf-preemptive"`,
//! ...): [`Policy::resolve`] maps any string to a policy by falling back
//! to FCFS for unknown values, while the [`FromStr`] impl rejects them.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A CPU scheduling discipline.
///
/// Serializes to the same kebab-case identifiers [`Policy::id`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First Come First Serve: run in arrival order, to completion.
    Fcfs,
    /// Shortest Job First: pick the smallest burst among arrived
    /// processes, run it to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First: preempt whenever another arrived
    /// process has less remaining time.
    SjfPreemptive,
    /// Priority scheduling without preemption (lower value = more urgent).
    PriorityNonPreemptive,
    /// Priority scheduling with preemption on arrival of a more urgent
    /// process.
    PriorityPreemptive,
    /// Fixed time quantum, FIFO ready queue.
    RoundRobin,
}

impl Policy {
    /// All supported policies, in presentation order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::SjfNonPreemptive,
        Policy::SjfPreemptive,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
        Policy::RoundRobin,
    ];

    /// Stable wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::SjfNonPreemptive => "sjf-non-preemptive",
            Policy::SjfPreemptive => "sjf-preemptive",
            Policy::PriorityNonPreemptive => "priority-non-preemptive",
            Policy::PriorityPreemptive => "priority-preemptive",
            Policy::RoundRobin => "round-robin",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Serve (FCFS)",
            Policy::SjfNonPreemptive => "Shortest Job First (Non-Preemptive)",
            Policy::SjfPreemptive => "Shortest Job First (Preemptive)",
            Policy::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Policy::PriorityPreemptive => "Priority (Preemptive)",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Resolves a wire identifier, falling back to FCFS for anything
    /// unknown.
    ///
    /// The fallback keeps identifier-driven entry points total: a host
    /// passing a stale or misspelled identifier gets a valid FCFS
    /// simulation instead of an error. Use [`FromStr`] where an unknown
    /// identifier should fail instead.
    pub fn resolve(id: &str) -> Policy {
        id.parse().unwrap_or(Policy::Fcfs)
    }

    /// Whether the policy can take the CPU away from a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::SjfPreemptive | Policy::PriorityPreemptive | Policy::RoundRobin
        )
    }

    /// Whether the policy consults [`Process::priority`].
    ///
    /// [`Process::priority`]: crate::models::Process::priority
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Policy::PriorityNonPreemptive | Policy::PriorityPreemptive
        )
    }

    /// Whether the policy consumes a time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unrecognized policy identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy {
    /// The identifier that failed to parse.
    pub id: String,
}

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling policy identifier: '{}'", self.id)
    }
}

impl Error for UnknownPolicy {}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPolicy { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for policy in Policy::ALL {
            assert_eq!(policy.id().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_resolve_known_identifiers() {
        assert_eq!(Policy::resolve("sjf-preemptive"), Policy::SjfPreemptive);
        assert_eq!(Policy::resolve("round-robin"), Policy::RoundRobin);
    }

    #[test]
    fn test_resolve_falls_back_to_fcfs() {
        assert_eq!(Policy::resolve("lottery"), Policy::Fcfs);
        assert_eq!(Policy::resolve(""), Policy::Fcfs);
        assert_eq!(Policy::resolve("SJF-Preemptive"), Policy::Fcfs);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "mlfq".parse::<Policy>().unwrap_err();
        assert_eq!(err.id, "mlfq");
        assert!(err.to_string().contains("mlfq"));
    }

    #[test]
    fn test_serde_uses_wire_identifiers() {
        for policy in Policy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.id()));
            let back: Policy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, policy);
        }
    }

    #[test]
    fn test_classification() {
        assert!(!Policy::Fcfs.is_preemptive());
        assert!(!Policy::SjfNonPreemptive.is_preemptive());
        assert!(Policy::SjfPreemptive.is_preemptive());
        assert!(Policy::RoundRobin.is_preemptive());

        assert!(Policy::PriorityPreemptive.uses_priority());
        assert!(!Policy::SjfPreemptive.uses_priority());

        assert!(Policy::RoundRobin.uses_quantum());
        assert!(!Policy::Fcfs.uses_quantum());
    }

    #[test]
    fn test_labels_are_distinct() {
        for (i, a) in Policy::ALL.iter().enumerate() {
            for b in &Policy::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
