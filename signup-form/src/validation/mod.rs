//! Validation state shared between the controller and the UI binding.
//!
//! The controller never touches widgets directly. It reads values through a
//! [`FieldSource`] and reports messages, the invalid marker and the submit
//! flag through an [`ErrorSink`]. [`ValidationResult`] is the fresh,
//! display-independent view of which fields block submission.
//!
//! # Example
//!
//! ```ignore
//! let result = controller.validate_all();
//! if let Some(id) = result.first_invalid_element() {
//!     ui.focus(id);
//! }
//! ```

mod binding;
mod error_display;
mod result;

pub use binding::{ErrorSink, FieldSource};
pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
