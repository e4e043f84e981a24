//! Form view - labels and derived display state for the character sheet
//!
//! Pure functions of controller state, so any renderer (desktop, web or a
//! terminal) shows the same copy.

use charsheet_domain::{FieldId, LORE_MAX_CHARS, MAX_SKILL_SCORE};

use crate::state::{FormSnapshot, SubmissionStatus};

pub const IMAGE_LABEL: &str = "Sube la imagen de tu personaje:";

pub const IMAGE_HINT: &str = "Nota: Es mejor generarla con IA para tener tu propio personaje.";

pub const LORE_PLACEHOLDER: &str =
    "Cuenta los orígenes, motivaciones y rasgos de tu personaje (50 - 2000 caracteres)";

const SUBMIT_LABEL: &str = "Guardar personaje";
const SUBMITTING_LABEL: &str = "Guardando...";
const ERROR_BANNER: &str = "Por favor, corrige los errores antes de guardar.";

/// Label shown next to an editable field
pub fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::RealName => "Nombre Real:",
        FieldId::CharacterName => "Nombre del Personaje:",
        FieldId::Race => "Raza/Clase:",
        FieldId::Profession => "Profesión:",
        FieldId::WorkStatus => "Estado Laboral:",
        FieldId::Lore => "Lore (Historia):",
    }
}

/// Visual tone of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Idle,
    Busy,
    Success,
    Error,
}

/// Derived state of the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub tone: ButtonTone,
}

impl SubmitButtonView {
    /// The button is disabled while a submission is in flight.
    pub fn from_state(status: SubmissionStatus, submitting: bool) -> Self {
        if submitting {
            return Self {
                label: SUBMITTING_LABEL,
                enabled: false,
                tone: ButtonTone::Busy,
            };
        }

        let tone = match status {
            SubmissionStatus::Idle => ButtonTone::Idle,
            SubmissionStatus::Success => ButtonTone::Success,
            SubmissionStatus::Error => ButtonTone::Error,
        };

        Self {
            label: SUBMIT_LABEL,
            enabled: true,
            tone,
        }
    }

    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self::from_state(snapshot.status, snapshot.submitting)
    }
}

/// Banner under the submit button, shown after a failed attempt
pub fn status_banner(status: SubmissionStatus) -> Option<&'static str> {
    status.is_error().then_some(ERROR_BANNER)
}

/// "7 /10"
pub fn skill_label(value: u8) -> String {
    format!("{} /{}", value, MAX_SKILL_SCORE)
}

/// "123/2000"
pub fn lore_counter(lore: &str) -> String {
    format!("{}/{}", lore.trim().chars().count(), LORE_MAX_CHARS)
}
