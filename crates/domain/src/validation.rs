//! Submit-time validation of a [`CharacterDraft`]
//!
//! Validation is a pure function of the draft. Each field carries at most one
//! error; lore rules are checked in priority order (required, too short, too
//! long) and the first failing rule wins.

use std::collections::BTreeMap;

use crate::draft::{CharacterDraft, FieldId};

/// Minimum lore length, in characters, after trimming
pub const LORE_MIN_CHARS: usize = 50;

/// Maximum lore length, in characters, after trimming
pub const LORE_MAX_CHARS: usize = 2000;

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidatedField {
    RealName,
    CharacterName,
    Lore,
    Image,
}

impl ValidatedField {
    pub const ALL: [ValidatedField; 4] = [
        ValidatedField::RealName,
        ValidatedField::CharacterName,
        ValidatedField::Lore,
        ValidatedField::Image,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            ValidatedField::RealName => "realName",
            ValidatedField::CharacterName => "characterName",
            ValidatedField::Lore => "lore",
            ValidatedField::Image => "image",
        }
    }

    /// The validated counterpart of an editable field, if it has one
    pub fn for_field(field: FieldId) -> Option<Self> {
        match field {
            FieldId::RealName => Some(ValidatedField::RealName),
            FieldId::CharacterName => Some(ValidatedField::CharacterName),
            FieldId::Lore => Some(ValidatedField::Lore),
            FieldId::Race | FieldId::Profession | FieldId::WorkStatus => None,
        }
    }
}

impl std::fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
}

impl FieldError {
    /// User-facing message for this error on the given field
    pub fn message(&self, field: ValidatedField) -> String {
        match (field, self) {
            (ValidatedField::RealName, _) => "El nombre real es requerido".to_string(),
            (ValidatedField::CharacterName, _) => {
                "El nombre del personaje es requerido".to_string()
            }
            (ValidatedField::Lore, FieldError::Required) => {
                "La historia del personaje es requerida".to_string()
            }
            (ValidatedField::Lore, FieldError::TooShort { min }) => {
                format!("La historia debe tener al menos {} caracteres", min)
            }
            (ValidatedField::Lore, FieldError::TooLong { max }) => {
                format!("La historia no puede exceder los {} caracteres", max)
            }
            (ValidatedField::Image, _) => "La imagen del personaje es requerida".to_string(),
        }
    }
}

/// Current validation errors, one per field at most.
///
/// An absent key means the field is currently considered valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ValidatedField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous one for the field
    pub fn insert(&mut self, field: ValidatedField, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: ValidatedField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: ValidatedField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Remove the error for a field. Returns whether one was present.
    pub fn clear_field(&mut self, field: ValidatedField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValidatedField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// User-facing message for a field, if it has an error
    pub fn message(&self, field: ValidatedField) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    /// All messages keyed by wire name, in field order
    pub fn messages(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(field, error)| (field.wire_name(), error.message(field)))
            .collect()
    }
}

/// Validate a draft for submission.
pub fn validate(draft: &CharacterDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.real_name.trim().is_empty() {
        errors.insert(ValidatedField::RealName, FieldError::Required);
    }

    if draft.character_name.trim().is_empty() {
        errors.insert(ValidatedField::CharacterName, FieldError::Required);
    }

    if let Some(error) = check_lore(&draft.lore) {
        errors.insert(ValidatedField::Lore, error);
    }

    if draft.image.is_none() {
        errors.insert(ValidatedField::Image, FieldError::Required);
    }

    errors
}

fn check_lore(lore: &str) -> Option<FieldError> {
    let trimmed = lore.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    let length = trimmed.chars().count();
    if length < LORE_MIN_CHARS {
        Some(FieldError::TooShort {
            min: LORE_MIN_CHARS,
        })
    } else if length > LORE_MAX_CHARS {
        Some(FieldError::TooLong {
            max: LORE_MAX_CHARS,
        })
    } else {
        None
    }
}
