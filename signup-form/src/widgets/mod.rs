//! In-memory widgets implementing the form bindings.
//!
//! These stand in for a real UI toolkit: tests and demos edit the inputs,
//! push the matching events into the controller, and inspect the messages
//! and the submit flag afterwards.

pub mod form;
pub mod input;

pub use form::SignupForm;
pub use input::Input;
