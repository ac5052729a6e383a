//! Types for the session module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::formats::{CanonicalType, OutputFormat};

/// Lifecycle status of a conversion attempt.
///
/// Legal transitions: pending → converting → completed | failed, with
/// pending → failed allowed for attempts rejected before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Pending,
    Converting,
    Completed,
    Failed,
}

impl AttemptStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether a transition from `self` to `to` is legal.
    pub fn can_transition(&self, to: AttemptStatus) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Converting)
                | (Self::Pending, Self::Failed)
                | (Self::Converting, Self::Completed)
                | (Self::Converting, Self::Failed)
        )
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Converting => "converting",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One conversion attempt, from request to terminal status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionAttempt {
    /// Unique attempt ID.
    pub id: Uuid,
    /// Name of the uploaded file.
    pub original_name: String,
    /// Resolved input type.
    pub original_type: CanonicalType,
    /// Chosen conversion target.
    pub output_format: OutputFormat,
    /// Current lifecycle status.
    pub status: AttemptStatus,
    /// Progress in percent (0-100). Jumps to 100 on completion and
    /// resets to 0 on failure.
    pub progress_percent: u8,
    /// Human-readable size of the uploaded file.
    pub size_label: String,
    /// When the attempt was created.
    pub created_at: DateTime<Utc>,
}

/// Errors raised by session history mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No attempt with the given ID exists in this session.
    #[error("Unknown conversion attempt: {id}")]
    UnknownAttempt { id: Uuid },

    /// The requested status change is not a legal transition.
    #[error("Illegal status transition from {from} to {to}")]
    InvalidTransition {
        from: AttemptStatus,
        to: AttemptStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert!(AttemptStatus::Pending.can_transition(AttemptStatus::Converting));
        assert!(AttemptStatus::Pending.can_transition(AttemptStatus::Failed));
        assert!(AttemptStatus::Converting.can_transition(AttemptStatus::Completed));
        assert!(AttemptStatus::Converting.can_transition(AttemptStatus::Failed));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!AttemptStatus::Pending.can_transition(AttemptStatus::Completed));
        assert!(!AttemptStatus::Completed.can_transition(AttemptStatus::Failed));
        assert!(!AttemptStatus::Failed.can_transition(AttemptStatus::Converting));
        assert!(!AttemptStatus::Converting.can_transition(AttemptStatus::Pending));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(AttemptStatus::Completed.is_terminal());
        assert!(AttemptStatus::Failed.is_terminal());
        assert!(!AttemptStatus::Pending.is_terminal());
        assert!(!AttemptStatus::Converting.is_terminal());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttemptStatus::Converting).unwrap(),
            "\"converting\""
        );
    }
}
