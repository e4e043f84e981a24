//! Submission payload - the multipart form built from a draft
//!
//! Transport-neutral: an HTTP adapter turns each [`FormPart`] into a
//! multipart field without looking at the draft again.

use crate::draft::{CharacterDraft, FieldId};
use crate::error::DomainError;
use crate::value_objects::ImageFile;

/// Name of the multipart part carrying the skills JSON
pub const SKILLS_PART: &str = "skills";

/// Name of the multipart part carrying the image
pub const IMAGE_PART: &str = "image";

/// One part of the submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: ImageFile },
}

impl FormPart {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Ordered multipart parts for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    parts: Vec<FormPart>,
}

impl SubmissionPayload {
    /// Serialize a draft.
    ///
    /// Scalars become text parts keyed by their wire name, the image becomes
    /// a file part when present, and the skill tree becomes one JSON text
    /// part.
    pub fn from_draft(draft: &CharacterDraft) -> Result<Self, DomainError> {
        let mut payload = Self::default();

        for field in [
            FieldId::RealName,
            FieldId::CharacterName,
            FieldId::Race,
            FieldId::Profession,
            FieldId::WorkStatus,
        ] {
            payload.push_text(field.wire_name(), draft.field(field));
        }

        if let Some(image) = &draft.image {
            payload.parts.push(FormPart::File {
                name: IMAGE_PART,
                file: image.clone(),
            });
        }

        payload.push_text(FieldId::Lore.wire_name(), &draft.lore);
        payload.push_text(SKILLS_PART, &draft.skills.to_json()?);

        Ok(payload)
    }

    fn push_text(&mut self, name: &'static str, value: &str) {
        self.parts.push(FormPart::Text {
            name,
            value: value.to_string(),
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Value of a text part by name
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The image part, if any
    pub fn file(&self) -> Option<&ImageFile> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { file, .. } => Some(file),
            FormPart::Text { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
