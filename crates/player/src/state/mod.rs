//! State held by the form controller for one editing session

mod form_state;

pub use form_state::{FormSnapshot, SubmissionStatus};
