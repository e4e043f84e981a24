//! Form state - submission status and read-only snapshots of the form

use charsheet_domain::{CharacterDraft, ValidationErrors};

/// Outcome of the latest submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// No attempt yet, or a new attempt has just started
    #[default]
    Idle,
    /// The webhook accepted the character
    Success,
    /// Validation failed or the webhook call failed
    Error,
}

impl SubmissionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Point-in-time copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: CharacterDraft,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    pub submitting: bool,
}
