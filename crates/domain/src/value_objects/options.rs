//! Closed option sets for the character sheet dropdowns
//!
//! Each set has a fixed list of members whose wire label is the Spanish text
//! shown in the form and sent to the webhook. The first member is the default.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// ============================================================================
// Race
// ============================================================================

/// Race/class of the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Race {
    #[default]
    #[serde(rename = "Orco")]
    Orc,
    #[serde(rename = "Mago")]
    Mage,
    #[serde(rename = "Guerrero")]
    Warrior,
    #[serde(rename = "Humano")]
    Human,
    #[serde(rename = "Furtivo")]
    Rogue,
    #[serde(rename = "Fantasma")]
    Ghost,
}

impl Race {
    /// All races in dropdown order
    pub const ALL: [Race; 6] = [
        Race::Orc,
        Race::Mage,
        Race::Warrior,
        Race::Human,
        Race::Rogue,
        Race::Ghost,
    ];

    /// Wire label sent to the webhook
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Orc => "Orco",
            Race::Mage => "Mago",
            Race::Warrior => "Guerrero",
            Race::Human => "Humano",
            Race::Rogue => "Furtivo",
            Race::Ghost => "Fantasma",
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    }
}

// ============================================================================
// Profession
// ============================================================================

/// Profession of the person behind the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profession {
    #[default]
    #[serde(rename = "Programador")]
    Programmer,
    #[serde(rename = "Vendedor")]
    Salesperson,
    #[serde(rename = "Automatizaciones")]
    Automation,
}

impl Profession {
    /// All professions in dropdown order
    pub const ALL: [Profession; 3] = [
        Profession::Programmer,
        Profession::Salesperson,
        Profession::Automation,
    ];

    /// Wire label sent to the webhook
    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Programmer => "Programador",
            Profession::Salesperson => "Vendedor",
            Profession::Automation => "Automatizaciones",
        }
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profession {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::ALL
            .into_iter()
            .find(|profession| profession.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown profession: {}", s)))
    }
}

// ============================================================================
// WorkStatus
// ============================================================================

/// Current work status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkStatus {
    #[default]
    #[serde(rename = "Estudiante")]
    Student,
    #[serde(rename = "Desempleado")]
    Unemployed,
    #[serde(rename = "Empleado")]
    Employed,
    #[serde(rename = "Empleador")]
    Employer,
    #[serde(rename = "Freelancer")]
    Freelancer,
}

impl WorkStatus {
    /// All work statuses in dropdown order
    pub const ALL: [WorkStatus; 5] = [
        WorkStatus::Student,
        WorkStatus::Unemployed,
        WorkStatus::Employed,
        WorkStatus::Employer,
        WorkStatus::Freelancer,
    ];

    /// Wire label sent to the webhook
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Student => "Estudiante",
            WorkStatus::Unemployed => "Desempleado",
            WorkStatus::Employed => "Empleado",
            WorkStatus::Employer => "Empleador",
            WorkStatus::Freelancer => "Freelancer",
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown work status: {}", s)))
    }
}
