//! Input validation for process fleets.
//!
//! The engine itself is total over whatever it is given; these helpers
//! implement the caller contract for hosts that want well-formed fleets
//! rejected or repaired up front. Detects:
//! - Duplicate process IDs
//! - Zero bursts

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a zero burst and can never hold the CPU.
    ZeroBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process fleet.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst", process.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns a copy of the fleet with every burst raised to at least 1.
///
/// Interactive hosts typically apply this clamp at the form layer
/// instead of surfacing a [`ValidationErrorKind::ZeroBurst`] error.
/// Callers that skip both get the engine's degenerate zero-burst
/// behavior: no CPU time, zeroed statistics.
pub fn normalize(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .map(|p| {
            let mut p = p.clone();
            p.burst = p.burst.max(1);
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fleet() -> Vec<Process> {
        vec![
            Process::new(1, "P1").with_burst(5),
            Process::new(2, "P2").with_arrival(1).with_burst(3),
            Process::new(3, "P3").with_arrival(2).with_burst(8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_fleet()).is_ok());
        assert!(validate_input(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_process_id() {
        let mut fleet = sample_fleet();
        fleet.push(Process::new(1, "P4").with_burst(2));

        let errors = validate_input(&fleet).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_zero_burst() {
        let fleet = vec![Process::new(1, "P1").with_burst(0)];

        let errors = validate_input(&fleet).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst && e.message.contains("P1")));
    }

    #[test]
    fn test_multiple_errors() {
        let fleet = vec![
            Process::new(1, "P1").with_burst(0),
            Process::new(1, "P2").with_burst(3),
        ];

        let errors = validate_input(&fleet).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_normalize_clamps_zero_burst() {
        let fleet = vec![
            Process::new(1, "P1").with_arrival(4).with_burst(0),
            Process::new(2, "P2").with_burst(6),
        ];
        let normalized = normalize(&fleet);

        assert_eq!(normalized[0].burst, 1);
        assert_eq!(normalized[0].arrival, 4);
        assert_eq!(normalized[1].burst, 6);
        assert!(validate_input(&normalized).is_ok());
    }
}
