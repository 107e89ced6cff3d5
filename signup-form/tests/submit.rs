//! Submit gating and form reset.

use signup_form::prelude::*;

fn setup() -> (SignupForm, ValidationController<SignupForm, SignupForm>) {
    let form = SignupForm::new();
    let clock = FixedClock::from_ymd(2024, 6, 15).unwrap();
    let controller =
        ValidationController::with_clock(form.clone(), form.clone(), &FormConfig::default(), clock);
    (form, controller)
}

fn fill_valid(form: &SignupForm) {
    form.input(FieldId::FirstName).set_value("Анна");
    form.input(FieldId::LastName).set_value("Ёлкина");
    form.input(FieldId::Email).set_value("anna.yolkina@mail.ru");
    form.input(FieldId::Password).set_value("Aa1!aaaa");
    form.input(FieldId::PasswordConfirm).set_value("Aa1!aaaa");
    form.input(FieldId::BirthDate).set_value("2006-06-15");
}

#[test]
fn test_submit_when_enabled_resets_form() {
    let (form, mut controller) = setup();
    fill_valid(&form);
    controller.dispatch(FieldEvent::change(FieldId::BirthDate));
    assert!(controller.is_submit_enabled());

    // A leftover message must be gone after submit too.
    form.input(FieldId::Email).set_error("stale");

    controller.submit().expect("submit accepted");

    assert_eq!(form.notifications(), vec!["Форма успешно отправлена".to_string()]);
    assert!(FieldId::ALL.into_iter().all(|f| form.input(f).is_empty()));
    assert!(form.errors().is_empty());
    assert!(!controller.is_submit_enabled());
    assert!(!form.is_submit_enabled());
}

#[test]
fn test_submit_when_disabled_changes_nothing() {
    let (form, mut controller) = setup();
    fill_valid(&form);
    form.input(FieldId::PasswordConfirm).set_value("Aa1!aaab");
    controller.dispatch(FieldEvent::input(FieldId::PasswordConfirm));
    assert!(!controller.is_submit_enabled());

    let err = controller.submit().unwrap_err();
    match err {
        FormError::SubmitDisabled { invalid } => {
            assert_eq!(invalid, vec![FieldId::PasswordConfirm]);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(form.notifications().is_empty());
    assert_eq!(form.input(FieldId::FirstName).value(), "Анна");
    assert!(form.input(FieldId::PasswordConfirm).has_error());
}

#[test]
fn test_submit_uses_last_computed_flag() {
    let (form, mut controller) = setup();
    // Values are valid but no tracked event has run since they were set.
    fill_valid(&form);
    assert!(controller.submit().is_err());

    controller.recompute();
    assert!(controller.submit().is_ok());
}

#[test]
fn test_submit_disabled_error_message() {
    let (_form, mut controller) = setup();
    let err = controller.submit().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("6 field(s) invalid"));
    assert!(message.contains("first-name"));
    assert!(message.contains("birth-day"));
}

#[test]
fn test_second_submission_after_refill() {
    let (form, mut controller) = setup();
    fill_valid(&form);
    controller.recompute();
    controller.submit().unwrap();

    fill_valid(&form);
    controller.dispatch(FieldEvent::blur(FieldId::FirstName));
    controller.submit().unwrap();

    assert_eq!(form.notifications().len(), 2);
}

#[test]
fn test_reset_clears_everything() {
    let (form, mut controller) = setup();
    fill_valid(&form);
    form.input(FieldId::Email).set_value("bad");
    controller.dispatch(FieldEvent::blur(FieldId::Email));
    assert!(form.input(FieldId::Email).has_error());

    controller.reset();
    assert!(form.errors().is_empty());
    assert!(form.input(FieldId::Password).is_empty());
    assert!(!controller.is_submit_enabled());
    assert!(form.notifications().is_empty());
}
