//! Character sheet domain.
//!
//! Pure types for the character creator: the draft being edited, the closed
//! option sets, the skill tree, submit-time validation and the multipart
//! payload model. Nothing in this crate performs I/O.

pub mod draft;
pub mod error;
pub mod payload;
pub mod validation;
pub mod value_objects;

pub use draft::{CharacterDraft, FieldId};
pub use error::DomainError;
pub use payload::{FormPart, SubmissionPayload, IMAGE_PART, SKILLS_PART};
pub use validation::{
    validate, FieldError, ValidatedField, ValidationErrors, LORE_MAX_CHARS, LORE_MIN_CHARS,
};
pub use value_objects::{
    mime_type_for, ImageFile, Profession, Race, SkillAxis, SkillTree, WorkStatus,
    FALLBACK_MIME_TYPE, MAX_SKILL_SCORE, MIN_SKILL_SCORE,
};
