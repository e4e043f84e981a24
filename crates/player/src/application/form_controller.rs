//! Form Controller - owns the character draft and drives submission
//!
//! The controller holds all state for one editing session: the draft, the
//! current validation errors, the submission status and the in-flight flag.
//! Every mutation is published on a [`FormEventBus`] so any rendering layer
//! can subscribe and redraw.
//!
//! Submission lifecycle:
//!
//! ```text
//! Idle --validate fails--------------------------> Error
//! Idle --submitting=true--> webhook 2xx ----------> Success (draft reset)
//!                       \-> non-2xx / no response -> Error   (draft kept)
//! ```

use std::sync::Arc;

use charsheet_domain::{
    validate, CharacterDraft, DomainError, FieldError, FieldId, ImageFile, SkillAxis,
    SubmissionPayload, ValidatedField, ValidationErrors,
};

use crate::application::events::{FormEvent, Notification};
use crate::infrastructure::messaging::{FormEventBus, SubscriptionId};
use crate::ports::outbound::{SubmitError, WebhookPort};
use crate::state::{FormSnapshot, SubmissionStatus};

/// Shown after the webhook accepts the character
pub const SUCCESS_MESSAGE: &str = "¡Personaje guardado exitosamente!";

/// Prefix of the message shown when saving fails
pub const FAILURE_PREFIX: &str = "Error al guardar el personaje";

/// Controller for the character sheet form.
pub struct FormController {
    draft: CharacterDraft,
    errors: ValidationErrors,
    status: SubmissionStatus,
    submitting: bool,
    last_failure: Option<SubmitError>,
    webhook: Arc<dyn WebhookPort>,
    events: FormEventBus,
}

impl FormController {
    /// Start a new editing session with an empty draft.
    pub fn new(webhook: Arc<dyn WebhookPort>) -> Self {
        Self {
            draft: CharacterDraft::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            submitting: false,
            last_failure: None,
            webhook,
            events: FormEventBus::new(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: ValidatedField) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether a submission is in flight; the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Why the most recent submission failed, if it reached the webhook step
    pub fn last_failure(&self) -> Option<&SubmitError> {
        self.last_failure.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            status: self.status,
            submitting: self.submitting,
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Observers
    // ──────────────────────────────────────────────────────────────────────────

    pub fn subscribe(&self, callback: impl FnMut(&FormEvent) + Send + 'static) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The bus itself, for renderers that want to share it
    pub fn events(&self) -> &FormEventBus {
        &self.events
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Edits
    // ──────────────────────────────────────────────────────────────────────────

    /// Set a text or dropdown field.
    ///
    /// Clears the field's validation error without re-validating it. A
    /// dropdown value outside its closed set is rejected and nothing changes.
    pub fn update_field(&mut self, field: FieldId, value: &str) -> Result<(), DomainError> {
        self.draft.set_field(field, value)?;
        tracing::debug!(field = %field, "Draft field updated");
        self.events.dispatch(FormEvent::DraftChanged);

        if let Some(validated) = ValidatedField::for_field(field) {
            self.clear_error(validated);
        }
        Ok(())
    }

    /// Set a field by its wire name (`realName`, `race`, ...).
    pub fn update_field_by_name(&mut self, name: &str, value: &str) -> Result<(), DomainError> {
        let field = FieldId::from_wire(name)?;
        self.update_field(field, value)
    }

    /// Replace the image and clear its validation error.
    pub fn update_image(&mut self, image: ImageFile) {
        tracing::debug!(file_name = image.file_name(), len = image.len(), "Image selected");
        self.draft.set_image(image);
        self.events.dispatch(FormEvent::DraftChanged);
        self.clear_error(ValidatedField::Image);
    }

    /// Set one skill score. The slider keeps values in range; no clamping here.
    pub fn update_skill(&mut self, axis: SkillAxis, value: u8) {
        self.draft.set_skill(axis, value);
        tracing::debug!(axis = %axis, value, "Skill updated");
        self.events.dispatch(FormEvent::DraftChanged);
    }

    fn clear_error(&mut self, field: ValidatedField) {
        if self.errors.clear_field(field) {
            self.events.dispatch(FormEvent::ErrorsChanged);
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Validation and submission
    // ──────────────────────────────────────────────────────────────────────────

    /// Recompute the error map from the draft. Returns whether it is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft);
        self.events.dispatch(FormEvent::ErrorsChanged);
        self.errors.is_empty()
    }

    /// Validate and, if valid, send the draft to the webhook once.
    ///
    /// On success the draft is reset; on any failure it is kept so the user
    /// can submit again.
    pub async fn submit(&mut self) -> SubmissionStatus {
        self.last_failure = None;
        self.set_status(SubmissionStatus::Idle);

        if !self.validate() {
            tracing::warn!(
                fields = ?self.errors.iter().map(|(f, _)| f.wire_name()).collect::<Vec<_>>(),
                "Character sheet failed validation"
            );
            self.set_status(SubmissionStatus::Error);
            return self.status;
        }

        self.set_submitting(true);
        tracing::info!(
            character_name = %self.draft.character_name,
            "Submitting character sheet"
        );

        let result = match SubmissionPayload::from_draft(&self.draft) {
            Ok(payload) => self.webhook.submit(payload).await,
            Err(e) => Err(SubmitError::payload(e)),
        };

        match result {
            Ok(receipt) => {
                tracing::info!(status = receipt.status, "Character sheet saved");
                self.set_status(SubmissionStatus::Success);
                self.draft.reset();
                self.events.dispatch(FormEvent::DraftChanged);
                self.events
                    .dispatch(FormEvent::Notification(Notification::Success {
                        message: SUCCESS_MESSAGE.to_string(),
                    }));
            }
            Err(error) => {
                tracing::error!(error = %error, status = ?error.status(), "Failed to save character sheet");
                self.set_status(SubmissionStatus::Error);
                self.events
                    .dispatch(FormEvent::Notification(Notification::Failure {
                        message: format!("{}: {}", FAILURE_PREFIX, error),
                        detail: error.detail().to_string(),
                    }));
                self.last_failure = Some(error);
            }
        }

        self.set_submitting(false);
        self.status
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        if self.status != status {
            self.status = status;
            self.events.dispatch(FormEvent::StatusChanged(status));
        }
    }

    fn set_submitting(&mut self, submitting: bool) {
        if self.submitting != submitting {
            self.submitting = submitting;
            self.events.dispatch(FormEvent::SubmittingChanged(submitting));
        }
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        // Observers may hold a clone of the bus; detach them with the session.
        self.events.clear();
        tracing::debug!("Form session closed");
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("status", &self.status)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}
