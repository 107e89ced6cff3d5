//! Prelude module for convenient imports.
//!
//! ```ignore
//! use signup_form::prelude::*;
//! ```

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{FormConfig, Messages};
pub use crate::controller::ValidationController;
pub use crate::error::{ConfigError, FormError};
pub use crate::events::{EventResult, FieldEvent, FieldEventKind};
pub use crate::field::FieldId;
pub use crate::rules::{Rule, RuleContext, RuleSet};
pub use crate::validation::{ErrorDisplay, ErrorSink, FieldError, FieldSource, ValidationResult};
pub use crate::widgets::{Input, SignupForm};
