//! Events published by the form controller
//!
//! Every state mutation on the controller publishes one of these so a
//! rendering layer can redraw without polling.

use crate::state::SubmissionStatus;

/// Message shown to the user after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The character was saved
    Success { message: String },
    /// The character could not be saved; `detail` is the raw reason
    Failure { message: String, detail: String },
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message, .. } => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// A change in the form controller's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A draft field, the image or a skill changed (also fired on reset)
    DraftChanged,
    /// The validation error map changed
    ErrorsChanged,
    /// The submission status changed
    StatusChanged(SubmissionStatus),
    /// The in-flight flag changed
    SubmittingChanged(bool),
    /// A notification should be surfaced to the user
    Notification(Notification),
}
