//! In-memory history of conversion attempts.

use chrono::Utc;
use uuid::Uuid;

use crate::formats::{CanonicalType, OutputFormat};
use crate::intake::UploadedFile;

use super::types::{AttemptStatus, ConversionAttempt, SessionError};

/// Running list of conversion attempts for one session.
///
/// New attempts are prepended, so iteration order is newest-first.
/// Attempts are never removed; retention ends with the session (there is
/// no persistence layer).
#[derive(Debug, Default)]
pub struct SessionHistory {
    attempts: Vec<ConversionAttempt>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new attempt in `pending` status and returns its ID.
    pub fn begin_attempt(
        &mut self,
        file: &UploadedFile,
        original_type: CanonicalType,
        output_format: OutputFormat,
    ) -> Uuid {
        let attempt = ConversionAttempt {
            id: Uuid::new_v4(),
            original_name: file.name.clone(),
            original_type,
            output_format,
            status: AttemptStatus::Pending,
            progress_percent: 0,
            size_label: file.size_label(),
            created_at: Utc::now(),
        };
        let id = attempt.id;
        self.attempts.insert(0, attempt);
        id
    }

    /// Moves an attempt to `converting`.
    pub fn mark_converting(&mut self, id: Uuid) -> Result<(), SessionError> {
        self.transition(id, AttemptStatus::Converting, None)
    }

    /// Moves an attempt to `completed` with progress at 100.
    pub fn complete(&mut self, id: Uuid) -> Result<(), SessionError> {
        self.transition(id, AttemptStatus::Completed, Some(100))
    }

    /// Moves an attempt to `failed` and resets progress to 0.
    pub fn fail(&mut self, id: Uuid) -> Result<(), SessionError> {
        self.transition(id, AttemptStatus::Failed, Some(0))
    }

    /// All attempts, newest first.
    pub fn attempts(&self) -> &[ConversionAttempt] {
        &self.attempts
    }

    pub fn find(&self, id: Uuid) -> Option<&ConversionAttempt> {
        self.attempts.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    fn transition(
        &mut self,
        id: Uuid,
        to: AttemptStatus,
        progress: Option<u8>,
    ) -> Result<(), SessionError> {
        let attempt = self
            .attempts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(SessionError::UnknownAttempt { id })?;

        if !attempt.status.can_transition(to) {
            return Err(SessionError::InvalidTransition {
                from: attempt.status,
                to,
            });
        }

        attempt.status = to;
        if let Some(progress) = progress {
            attempt.progress_percent = progress;
        }
        Ok(())
    }
}
