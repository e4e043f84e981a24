//! CharacterDraft - the in-progress character record being edited
//!
//! The draft is deliberately permissive: names and lore may hold any text
//! while the user types. Required/length rules live in [`crate::validation`]
//! and are only applied on submit.

use crate::error::DomainError;
use crate::value_objects::{ImageFile, Profession, Race, SkillAxis, SkillTree, WorkStatus};

/// Identifier of an editable text or dropdown field.
///
/// Replaces lookup by attribute name: every edit goes through one of these
/// tags, and the wire name is only used at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    RealName,
    CharacterName,
    Race,
    Profession,
    WorkStatus,
    Lore,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::RealName,
        FieldId::CharacterName,
        FieldId::Race,
        FieldId::Profession,
        FieldId::WorkStatus,
        FieldId::Lore,
    ];

    /// Name of the field in the submitted form data
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldId::RealName => "realName",
            FieldId::CharacterName => "characterName",
            FieldId::Race => "race",
            FieldId::Profession => "profession",
            FieldId::WorkStatus => "workStatus",
            FieldId::Lore => "lore",
        }
    }

    /// Resolve a wire name back to its field
    pub fn from_wire(name: &str) -> Result<Self, DomainError> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.wire_name() == name)
            .ok_or_else(|| DomainError::parse(format!("Unknown field: {}", name)))
    }

    /// Whether the field is one of the closed-set dropdowns
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldId::Race | FieldId::Profession | FieldId::WorkStatus
        )
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The character being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterDraft {
    pub real_name: String,
    pub character_name: String,
    pub race: Race,
    pub profession: Profession,
    pub work_status: WorkStatus,
    pub image: Option<ImageFile>,
    pub lore: String,
    pub skills: SkillTree,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text or dropdown field from its raw input value.
    ///
    /// Text fields take the value verbatim. Dropdown fields must name a
    /// member of their closed set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` when a dropdown value is not in its set;
    /// the draft is left unchanged in that case.
    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<(), DomainError> {
        match field {
            FieldId::RealName => self.real_name = value.to_string(),
            FieldId::CharacterName => self.character_name = value.to_string(),
            FieldId::Race => self.race = value.parse()?,
            FieldId::Profession => self.profession = value.parse()?,
            FieldId::WorkStatus => self.work_status = value.parse()?,
            FieldId::Lore => self.lore = value.to_string(),
        }
        Ok(())
    }

    /// Current value of a text or dropdown field as it would be sent
    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::RealName => &self.real_name,
            FieldId::CharacterName => &self.character_name,
            FieldId::Race => self.race.as_str(),
            FieldId::Profession => self.profession.as_str(),
            FieldId::WorkStatus => self.work_status.as_str(),
            FieldId::Lore => &self.lore,
        }
    }

    pub fn set_image(&mut self, image: ImageFile) {
        self.image = Some(image);
    }

    pub fn set_skill(&mut self, axis: SkillAxis, value: u8) {
        self.skills.set(axis, value);
    }

    /// Put every field back to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the draft still holds the initial values
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_resolve() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::from_wire(field.wire_name()), Ok(field));
        }
        assert!(FieldId::from_wire("skills").is_err());
        assert!(FieldId::from_wire("image").is_err());
    }

    #[test]
    fn text_fields_are_stored_verbatim() {
        let mut draft = CharacterDraft::new();
        draft.set_field(FieldId::RealName, "  Ana ").unwrap();
        draft.set_field(FieldId::Lore, "").unwrap();

        assert_eq!(draft.real_name, "  Ana ");
        assert_eq!(draft.field(FieldId::RealName), "  Ana ");
        assert_eq!(draft.lore, "");
    }

    #[test]
    fn choice_fields_parse_labels() {
        let mut draft = CharacterDraft::new();
        draft.set_field(FieldId::Race, "Fantasma").unwrap();
        draft.set_field(FieldId::Profession, "Vendedor").unwrap();
        draft.set_field(FieldId::WorkStatus, "Freelancer").unwrap();

        assert_eq!(draft.race, Race::Ghost);
        assert_eq!(draft.profession, Profession::Salesperson);
        assert_eq!(draft.work_status, WorkStatus::Freelancer);
        assert_eq!(draft.field(FieldId::Race), "Fantasma");
    }

    #[test]
    fn invalid_choice_leaves_draft_unchanged() {
        let mut draft = CharacterDraft::new();
        draft.set_field(FieldId::Race, "Mago").unwrap();

        let result = draft.set_field(FieldId::Race, "Dragón");

        assert!(matches!(result, Err(DomainError::Parse(_))));
        assert_eq!(draft.race, Race::Mage);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = CharacterDraft::new();
        draft.set_field(FieldId::CharacterName, "Zar").unwrap();
        draft.set_field(FieldId::WorkStatus, "Empleado").unwrap();
        draft.set_skill(SkillAxis::Efficiency, 9);
        draft.set_image(ImageFile::with_inferred_mime("zar.png", vec![1]).unwrap());
        assert!(!draft.is_pristine());

        draft.reset();

        assert!(draft.is_pristine());
        assert_eq!(draft.race, Race::Orc);
        assert_eq!(draft.work_status, WorkStatus::Student);
        assert!(draft.image.is_none());
        assert_eq!(draft.skills.get(SkillAxis::Efficiency), 1);
    }
}
