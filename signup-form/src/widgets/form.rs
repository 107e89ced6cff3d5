//! In-memory sign-up form: six inputs, a submit button and a notification log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::field::FieldId;
use crate::validation::{ErrorSink, FieldSource};

use super::Input;

/// The sign-up form's widget state.
///
/// Implements both [`FieldSource`] and [`ErrorSink`]. Clones share state,
/// so one clone can be handed to the controller as source, another as sink,
/// while the UI keeps a third.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    inputs: [Input; 6],
    submit_enabled: Arc<AtomicBool>,
    notifications: Arc<RwLock<Vec<String>>>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input bound to `field`.
    pub fn input(&self, field: FieldId) -> &Input {
        &self.inputs[field.index()]
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::SeqCst)
    }

    /// Messages currently shown, in form order.
    pub fn errors(&self) -> Vec<(FieldId, String)> {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| self.input(field).error().map(|msg| (field, msg)))
            .collect()
    }

    /// Success notifications received so far.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl FieldSource for SignupForm {
    fn value(&self, field: FieldId) -> String {
        self.input(field).value()
    }

    fn clear(&self, field: FieldId) {
        self.input(field).clear();
    }
}

impl ErrorSink for SignupForm {
    fn show_error(&self, field: FieldId, message: &str) {
        self.input(field).set_error(message);
    }

    fn clear_error(&self, field: FieldId) {
        self.input(field).clear_error();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.store(enabled, Ordering::SeqCst);
    }

    fn notify_success(&self, message: &str) {
        if let Ok(mut guard) = self.notifications.write() {
            guard.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_are_distinct() {
        let form = SignupForm::new();
        form.input(FieldId::FirstName).set_value("Иван");
        assert_eq!(form.value(FieldId::FirstName), "Иван");
        assert_eq!(form.value(FieldId::LastName), "");
    }

    #[test]
    fn test_sink_round_trip() {
        let form = SignupForm::new();
        form.show_error(FieldId::Email, "bad email");
        assert_eq!(form.errors(), vec![(FieldId::Email, "bad email".to_string())]);
        assert!(form.input(FieldId::Email).is_marked_invalid());

        form.clear_all_errors();
        assert!(form.errors().is_empty());

        form.set_submit_enabled(true);
        assert!(form.is_submit_enabled());
        form.notify_success("ok");
        assert_eq!(form.notifications(), vec!["ok".to_string()]);
    }

    #[test]
    fn test_clear_all_values() {
        let form = SignupForm::new();
        for field in FieldId::ALL {
            form.input(field).set_value("x");
        }
        form.clear_all();
        assert!(FieldId::ALL.into_iter().all(|f| form.input(f).is_empty()));
    }
}
