//! View-model helpers for renderers of the character sheet form

mod form_view;

pub use form_view::{
    field_label, lore_counter, skill_label, status_banner, ButtonTone, SubmitButtonView,
    IMAGE_HINT, IMAGE_LABEL, LORE_PLACEHOLDER,
};
