//! Value objects for the character sheet

mod image;
mod options;
mod skills;

pub use image::{mime_type_for, ImageFile, FALLBACK_MIME_TYPE};
pub use options::{Profession, Race, WorkStatus};
pub use skills::{SkillAxis, SkillTree, MAX_SKILL_SCORE, MIN_SKILL_SCORE};
