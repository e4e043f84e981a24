//! Skill tree - the four fixed skill axes scored 1 to 10

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lowest score a skill slider produces
pub const MIN_SKILL_SCORE: u8 = 1;

/// Highest score a skill slider produces
pub const MAX_SKILL_SCORE: u8 = 10;

/// One of the four fixed skill axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillAxis {
    Negotiation,
    LearningCapacity,
    Efficiency,
    Intelligence,
}

impl SkillAxis {
    /// All axes in the order the skill tree displays them
    pub const ALL: [SkillAxis; 4] = [
        SkillAxis::Negotiation,
        SkillAxis::LearningCapacity,
        SkillAxis::Efficiency,
        SkillAxis::Intelligence,
    ];

    /// Key used in the serialized skills object
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillAxis::Negotiation => "Negociación",
            SkillAxis::LearningCapacity => "Cap. de Aprendizaje",
            SkillAxis::Efficiency => "Eficiencia",
            SkillAxis::Intelligence => "Inteligencia",
        }
    }
}

impl std::fmt::Display for SkillAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillAxis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillAxis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown skill axis: {}", s)))
    }
}

/// Scores for the four skill axes.
///
/// The struct shape guarantees exactly the four keys exist. Scores are
/// stored as given: the slider is responsible for keeping them in
/// `MIN_SKILL_SCORE..=MAX_SKILL_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTree {
    #[serde(rename = "Negociación")]
    negotiation: u8,
    #[serde(rename = "Cap. de Aprendizaje")]
    learning_capacity: u8,
    #[serde(rename = "Eficiencia")]
    efficiency: u8,
    #[serde(rename = "Inteligencia")]
    intelligence: u8,
}

impl SkillTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for one axis
    pub fn get(&self, axis: SkillAxis) -> u8 {
        match axis {
            SkillAxis::Negotiation => self.negotiation,
            SkillAxis::LearningCapacity => self.learning_capacity,
            SkillAxis::Efficiency => self.efficiency,
            SkillAxis::Intelligence => self.intelligence,
        }
    }

    /// Set the score for one axis (not re-clamped)
    pub fn set(&mut self, axis: SkillAxis, value: u8) {
        let slot = match axis {
            SkillAxis::Negotiation => &mut self.negotiation,
            SkillAxis::LearningCapacity => &mut self.learning_capacity,
            SkillAxis::Efficiency => &mut self.efficiency,
            SkillAxis::Intelligence => &mut self.intelligence,
        };
        *slot = value;
    }

    /// Iterate `(axis, score)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (SkillAxis, u8)> + '_ {
        SkillAxis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
    }

    /// JSON object with the four axis keys, as sent in the `skills` part
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::validation(format!("Failed to encode skills: {}", e)))
    }
}

impl Default for SkillTree {
    fn default() -> Self {
        Self {
            negotiation: MIN_SKILL_SCORE,
            learning_capacity: MIN_SKILL_SCORE,
            efficiency: MIN_SKILL_SCORE,
            intelligence: MIN_SKILL_SCORE,
        }
    }
}
