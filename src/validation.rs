//! Input validation for scheduling runs.
//!
//! Checks caller input before the engine runs. The engine itself
//! assumes validated input; every failure mode below is a local
//! caller-input error surfaced up front. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities under the Priority policy
//! - Non-positive time quanta under Round-Robin

use std::collections::HashSet;

use crate::models::Process;
use crate::policies::Policy;

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
    /// A process arrives before time zero.
    NegativeArrival,
    /// A process demands zero or negative CPU time.
    NonPositiveBurst,
    /// The Priority policy was selected but a process has no priority.
    MissingPriority,
    /// Round-Robin was selected with a quantum below one tick.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list against the selected policy.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All arrival times >= 0
/// 3. All burst times > 0
/// 4. Every process carries a priority when the policy is Priority
/// 5. The quantum is > 0 when the policy is Round-Robin
///
/// An empty process list is valid: the engine treats it as a no-op run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival_time
                ),
            ));
        }

        if process.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    process.id, process.burst_time
                ),
            ));
        }

        if matches!(policy, Policy::Priority { .. }) && process.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", process.id),
            ));
        }
    }

    if let Policy::RoundRobin { quantum } = policy {
        if *quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Time quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
