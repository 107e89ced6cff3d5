//! Validation engine for a six-field sign-up form.
//!
//! [`rules::RuleSet`] holds one pure predicate and message per field.
//! [`controller::ValidationController`] reacts to blur, input and change
//! events, shows or clears messages through an [`validation::ErrorSink`],
//! and gates submit on the validity of the whole form, read fresh from a
//! [`validation::FieldSource`].

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod field;
pub mod prelude;
pub mod rules;
pub mod validation;
pub mod widgets;

pub use controller::ValidationController;
pub use error::{ConfigError, FormError};
pub use field::FieldId;
