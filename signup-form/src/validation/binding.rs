//! Capabilities the UI layer hands to the controller.

use crate::field::FieldId;

/// Read access to the current field values.
///
/// Values are owned by the UI layer; the controller only reads them, except
/// on reset.
pub trait FieldSource {
    /// Current text value of `field`.
    fn value(&self, field: FieldId) -> String;

    /// Reset `field` to an empty value.
    fn clear(&self, field: FieldId);

    /// Reset every field.
    fn clear_all(&self) {
        for field in FieldId::ALL {
            self.clear(field);
        }
    }
}

/// Where the controller reports validation state.
pub trait ErrorSink {
    /// Show `message` next to `field` and mark the field invalid.
    ///
    /// Replaces any message already shown for the field.
    fn show_error(&self, field: FieldId, message: &str);

    /// Remove the message and the invalid marker from `field`.
    fn clear_error(&self, field: FieldId);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Placeholder notification for an accepted submission.
    fn notify_success(&self, message: &str);

    fn clear_all_errors(&self) {
        for field in FieldId::ALL {
            self.clear_error(field);
        }
    }
}
