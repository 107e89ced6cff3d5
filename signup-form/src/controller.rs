//! Validation controller: wires field events to rules, messages and the
//! submit flag.
//!
//! Each handler runs to completion before the next event is processed:
//! read the value, evaluate the rule, update the message, recompute the
//! aggregate validity. The aggregate is always derived fresh from the
//! current values, never from what is on screen.
//!
//! Display and gating treat empty values differently. An empty field never
//! shows a message ("not judged yet"), but it still counts as invalid when
//! deciding whether submit is enabled.

use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::events::{EventResult, FieldEvent, FieldEventKind};
use crate::field::FieldId;
use crate::rules::RuleSet;
use crate::validation::{ErrorSink, FieldError, FieldSource, ValidationResult};

/// Drives validation for one sign-up form.
///
/// # Example
///
/// ```ignore
/// let form = SignupForm::new();
/// let mut controller =
///     ValidationController::new(form.clone(), form.clone(), &FormConfig::default());
///
/// form.input(FieldId::Email).set_value("user@example");
/// controller.dispatch(FieldEvent::blur(FieldId::Email));
/// assert!(form.input(FieldId::Email).has_error());
/// ```
pub struct ValidationController<S, E> {
    source: S,
    sink: E,
    rules: RuleSet,
    clock: Box<dyn Clock>,
    success_message: String,
    /// Result of the most recent aggregate computation.
    submit_enabled: bool,
}

impl<S: FieldSource, E: ErrorSink> ValidationController<S, E> {
    /// Create a controller using the wall-clock date.
    pub fn new(source: S, sink: E, config: &FormConfig) -> Self {
        Self::with_clock(source, sink, config, SystemClock)
    }

    /// Create a controller with an explicit source of "today".
    ///
    /// Runs the initial aggregate computation and pushes the submit flag.
    pub fn with_clock(source: S, sink: E, config: &FormConfig, clock: impl Clock + 'static) -> Self {
        let mut controller = Self {
            source,
            sink,
            rules: RuleSet::new(config),
            clock: Box::new(clock),
            success_message: config.messages.success.clone(),
            submit_enabled: false,
        };
        controller.recompute();
        controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Result of the most recent aggregate computation.
    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: FieldEvent) -> EventResult {
        let result = match event.kind {
            FieldEventKind::Blur => self.on_blur(event.field),
            FieldEventKind::Input => self.on_input(event.field),
            FieldEventKind::Change => self.on_change(event.field),
        };
        if !result.is_handled() {
            log::trace!("[form] no {:?} handler for {}", event.kind, event.field);
        }
        result
    }

    /// Route an event addressed by element id (`"first-name"`, ...).
    pub fn dispatch_by_id(
        &mut self,
        kind: FieldEventKind,
        element_id: &str,
    ) -> Result<EventResult, FormError> {
        let field: FieldId = element_id.parse()?;
        Ok(self.dispatch(FieldEvent::new(kind, field)))
    }

    /// Field lost focus.
    ///
    /// A non-empty value is judged: the message is shown on failure and
    /// cleared on success. An empty value leaves the display as it is.
    /// Only the four text fields have a blur handler.
    pub fn on_blur(&mut self, field: FieldId) -> EventResult {
        if !is_text_field(field) {
            return EventResult::Ignored;
        }

        let value = self.source.value(field);
        if !value.is_empty() {
            self.apply_rule(field, &value);
        }
        self.recompute();
        EventResult::Consumed
    }

    /// Raw value edit.
    ///
    /// Emptying a field clears its message. Editing the password re-checks a
    /// non-empty confirmation right away. The confirmation is judged on every
    /// edit. Birth date has no input handler; it reacts to [`on_change`].
    ///
    /// [`on_change`]: Self::on_change
    pub fn on_input(&mut self, field: FieldId) -> EventResult {
        match field {
            FieldId::BirthDate => return EventResult::Ignored,
            FieldId::PasswordConfirm => self.judge_or_clear(field),
            _ => {
                if self.source.value(field).is_empty() {
                    self.sink.clear_error(field);
                }
                if field == FieldId::Password {
                    self.recheck_confirmation();
                }
            }
        }
        self.recompute();
        EventResult::Consumed
    }

    /// Value changed and committed. Only birth date reacts to it.
    pub fn on_change(&mut self, field: FieldId) -> EventResult {
        if field != FieldId::BirthDate {
            return EventResult::Ignored;
        }

        self.judge_or_clear(field);
        self.recompute();
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Aggregate validity
    // -------------------------------------------------------------------------

    /// Whether every field is non-empty and passes its rule.
    ///
    /// Reads all values fresh; displayed messages play no part.
    pub fn compute_aggregate_validity(&self) -> bool {
        let password = self.source.value(FieldId::Password);
        let cx = self.rules.context(&password, self.clock.today());

        FieldId::ALL
            .into_iter()
            .all(|field| self.rules.rule(field).is_valid(&self.source.value(field), &cx))
    }

    /// Fresh evaluation of every field, reporting the ones that fail.
    ///
    /// Does not touch the displayed messages.
    pub fn validate_all(&self) -> ValidationResult {
        let password = self.source.value(FieldId::Password);
        let cx = self.rules.context(&password, self.clock.today());

        let errors = FieldId::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.source.value(field);
                self.rules
                    .check(field, &value, &cx)
                    .err()
                    .map(|message| FieldError::new(field, message))
            })
            .collect();

        ValidationResult::from_errors(errors)
    }

    /// Recompute the aggregate validity and push it to the submit control.
    pub fn recompute(&mut self) -> bool {
        let valid = self.compute_aggregate_validity();
        if valid != self.submit_enabled {
            log::debug!("[form] submit {}", if valid { "enabled" } else { "disabled" });
        }
        self.submit_enabled = valid;
        self.sink.set_submit_enabled(valid);
        valid
    }

    // -------------------------------------------------------------------------
    // Submit / reset
    // -------------------------------------------------------------------------

    /// Accept the form if submit is enabled.
    ///
    /// On success the sink gets the success notification and the form is
    /// reset, which disables submit again.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if !self.submit_enabled {
            let invalid = self.validate_all().invalid_fields();
            log::debug!("[form] submit rejected, invalid fields: {:?}", invalid);
            return Err(FormError::SubmitDisabled { invalid });
        }

        log::info!("[form] {}", self.success_message);
        self.sink.notify_success(&self.success_message);
        self.reset();
        Ok(())
    }

    /// Clear every value and message, then recompute.
    pub fn reset(&mut self) {
        self.source.clear_all();
        self.sink.clear_all_errors();
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Show or clear the message for `field` according to its rule.
    fn apply_rule(&self, field: FieldId, value: &str) {
        let password = self.source.value(FieldId::Password);
        let cx = self.rules.context(&password, self.clock.today());

        match self.rules.check(field, value, &cx) {
            Ok(()) => self.sink.clear_error(field),
            Err(message) => {
                log::debug!("[form] {} failed validation", field);
                self.sink.show_error(field, message);
            }
        }
    }

    /// Clear the message on an empty value, judge a non-empty one.
    fn judge_or_clear(&self, field: FieldId) {
        let value = self.source.value(field);
        if value.is_empty() {
            self.sink.clear_error(field);
        } else {
            self.apply_rule(field, &value);
        }
    }

    /// Re-check a confirmation that is already filled in.
    fn recheck_confirmation(&self) {
        let confirm = self.source.value(FieldId::PasswordConfirm);
        if !confirm.is_empty() {
            self.apply_rule(FieldId::PasswordConfirm, &confirm);
        }
    }
}

fn is_text_field(field: FieldId) -> bool {
    matches!(
        field,
        FieldId::FirstName | FieldId::LastName | FieldId::Email | FieldId::Password
    )
}
