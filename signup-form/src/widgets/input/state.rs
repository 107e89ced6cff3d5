use std::sync::{Arc, RwLock};

use crate::validation::ErrorDisplay;

/// Internal state for an Input widget
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value
    value: String,
    /// Validation message shown next to the field (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// A text input with shared state.
///
/// Cloning an `Input` yields another handle to the same state, so the
/// controller and the UI can hold it at the same time.
///
/// Editing methods work at the end of the value and return `true` when the
/// value changed; the caller turns that into an `Input` event. The
/// validation message is never touched by edits: it belongs to whoever
/// drives validation.
#[derive(Debug, Clone, Default)]
pub struct Input {
    inner: Arc<RwLock<InputInner>>,
}

impl Input {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_value(value);
        input
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Replace the whole value.
    pub fn set_value(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.value == value {
            return false;
        }
        guard.value = value;
        true
    }

    /// Clear the input value
    pub fn clear(&self) -> bool {
        self.set_value(String::new())
    }

    /// Append a typed character.
    pub fn insert_char(&self, c: char) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        guard.value.push(c);
        true
    }

    /// Append pasted text.
    pub fn insert_str(&self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        guard.value.push_str(s);
        true
    }

    /// Delete the last character (backspace)
    pub fn delete_char_before(&self) -> bool {
        self.inner
            .write()
            .map(|mut guard| guard.value.pop().is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Show a validation message and mark the input invalid.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
        }
    }

    /// Remove the validation message and the invalid marker.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = None;
        }
    }

    /// Check if this input has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Whether the field carries the invalid marker.
    ///
    /// The marker follows the message, including in
    /// [`ErrorDisplay::MarkerOnly`] mode where the message itself is hidden.
    pub fn is_marked_invalid(&self) -> bool {
        self.has_error()
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Message as it should be rendered, honoring the display mode.
    pub fn visible_error(&self) -> Option<String> {
        match self.error_display() {
            ErrorDisplay::MarkerOnly => None,
            ErrorDisplay::Message => self.error(),
        }
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
        }
    }
}
