//! Sign-up Example
//!
//! Replays a short user session against the in-memory form:
//! - typing names keystroke by keystroke, leaving fields (blur)
//! - a password/confirmation mismatch that the password edit fixes
//! - picking an underage birth date, then a valid one
//! - submitting, which resets the form
//!
//! Debug logs go to `signup.log`.

use std::fs::File;

use chrono::Months;
use log::LevelFilter;
use signup_form::prelude::*;
use simplelog::{Config, WriteLogger};

type Controller = ValidationController<SignupForm, SignupForm>;

/// Type `text` into `field` one character at a time.
fn type_text(form: &SignupForm, controller: &mut Controller, field: FieldId, text: &str) {
    let input = form.input(field);
    for c in text.chars() {
        if input.insert_char(c) {
            controller.dispatch(FieldEvent::input(field));
        }
    }
}

/// Select the whole value and delete it.
fn erase(form: &SignupForm, controller: &mut Controller, field: FieldId) {
    if form.input(field).clear() {
        controller.dispatch(FieldEvent::input(field));
    }
}

/// Commit a date picker selection.
fn pick_date(form: &SignupForm, controller: &mut Controller, date: &str) {
    if form.input(FieldId::BirthDate).set_value(date) {
        controller.dispatch(FieldEvent::change(FieldId::BirthDate));
    }
}

fn blur(controller: &mut Controller, field: FieldId) {
    controller.dispatch(FieldEvent::blur(field));
}

fn print_state(step: &str, form: &SignupForm) {
    println!("── {step}");
    for field in FieldId::ALL {
        let input = form.input(field);
        let marker = if input.is_marked_invalid() { "✗" } else { " " };
        print!("  {marker} {:<22} {:?}", field.name(), input.value());
        if let Some(error) = input.visible_error() {
            print!("  ← {error}");
        }
        println!();
    }
    let submit = if form.is_submit_enabled() { "enabled" } else { "disabled" };
    println!("  submit: {submit}");
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let form = SignupForm::new();
    let mut controller = ValidationController::new(form.clone(), form.clone(), &FormConfig::default());
    print_state("empty form", &form);

    type_text(&form, &mut controller, FieldId::FirstName, "иван");
    blur(&mut controller, FieldId::FirstName);
    print_state("lowercase first name", &form);

    erase(&form, &mut controller, FieldId::FirstName);
    type_text(&form, &mut controller, FieldId::FirstName, "Иван");
    blur(&mut controller, FieldId::FirstName);
    type_text(&form, &mut controller, FieldId::LastName, "Петров");
    blur(&mut controller, FieldId::LastName);
    type_text(&form, &mut controller, FieldId::Email, "ivan@example.com");
    blur(&mut controller, FieldId::Email);
    print_state("names and email", &form);

    type_text(&form, &mut controller, FieldId::Password, "Passw0rd");
    type_text(&form, &mut controller, FieldId::PasswordConfirm, "Passw0rd!");
    blur(&mut controller, FieldId::Password);
    print_state("password missing a symbol", &form);

    type_text(&form, &mut controller, FieldId::Password, "!");
    blur(&mut controller, FieldId::Password);
    print_state("password fixed", &form);

    let today = SystemClock.today();
    let underage = today
        .checked_sub_months(Months::new(10 * 12))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string();
    pick_date(&form, &mut controller, &underage);
    print_state("underage birth date", &form);

    pick_date(&form, &mut controller, "1990-03-08");
    print_state("valid birth date", &form);

    match controller.submit() {
        Ok(()) => {
            for note in form.notifications() {
                println!("  ✓ {note}");
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    print_state("after submit", &form);
}
