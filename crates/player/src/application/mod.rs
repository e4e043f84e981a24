//! Application layer: the form controller and the events it publishes

pub mod events;
pub mod form_controller;

pub use events::{FormEvent, Notification};
pub use form_controller::{FormController, FAILURE_PREFIX, SUCCESS_MESSAGE};
