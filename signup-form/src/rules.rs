//! Per-field validation rules.
//!
//! Every rule is a pure predicate over the field's text value plus a
//! [`RuleContext`] holding the bits of outside state a rule may read: the
//! current password (for the confirmation rule), today's date and the age
//! threshold (for the birth date rule).

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FormConfig;
use crate::field::FieldId;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[А-ЯЁ][а-яё]{1,19}$").expect("name regex"));
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Symbols accepted (and one of which is required) in a password.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Date format accepted by the birth date rule.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Outside state a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Current value of the password field.
    pub password: &'a str,
    /// The evaluation date.
    pub today: NaiveDate,
    /// Minimum age in whole years.
    pub min_age: u32,
}

/// Predicate signature shared by all rules.
pub type RuleFn = fn(&str, &RuleContext<'_>) -> bool;

/// A predicate with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    check: RuleFn,
    message: String,
}

impl Rule {
    pub fn new(check: RuleFn, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// Evaluate the predicate.
    pub fn is_valid(&self, value: &str, cx: &RuleContext<'_>) -> bool {
        (self.check)(value, cx)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The fixed mapping from field to rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: [Rule; 6],
    min_age: u32,
}

impl RuleSet {
    /// Build the rule set with messages and age threshold from `config`.
    pub fn new(config: &FormConfig) -> Self {
        let rules = FieldId::ALL.map(|field| {
            let check: RuleFn = match field {
                FieldId::FirstName | FieldId::LastName => |v, _| is_valid_name(v),
                FieldId::Email => |v, _| is_valid_email(v),
                FieldId::Password => |v, _| is_valid_password(v),
                FieldId::PasswordConfirm => |v, cx| passwords_match(cx.password, v),
                FieldId::BirthDate => |v, cx| is_of_age(v, cx.today, cx.min_age),
            };
            Rule::new(check, config.message(field))
        });

        Self {
            rules,
            min_age: config.min_age,
        }
    }

    /// Rule bound to `field`.
    pub fn rule(&self, field: FieldId) -> &Rule {
        &self.rules[field.index()]
    }

    /// Message shown when `field` fails.
    pub fn message(&self, field: FieldId) -> &str {
        self.rule(field).message()
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Build a context for evaluating rules against `password` on `today`.
    pub fn context<'a>(&self, password: &'a str, today: NaiveDate) -> RuleContext<'a> {
        RuleContext {
            password,
            today,
            min_age: self.min_age,
        }
    }

    /// Check `value` against the rule for `field`, returning its message on failure.
    pub fn check(&self, field: FieldId, value: &str, cx: &RuleContext<'_>) -> Result<(), &str> {
        let rule = self.rule(field);
        if rule.is_valid(value, cx) {
            Ok(())
        } else {
            log::trace!("[rules] {} rejected {:?}", field, value);
            Err(rule.message())
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

// -----------------------------------------------------------------------------
// Predicates
// -----------------------------------------------------------------------------

/// One uppercase Cyrillic letter followed by 1–19 lowercase Cyrillic letters.
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// `local@domain.tld` with the restricted alphabet the form accepts.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// At least eight characters from `[A-Za-z0-9!@#$%^&*]`, with at least one
/// of each class: lowercase, uppercase, digit, symbol.
pub fn is_valid_password(value: &str) -> bool {
    let is_symbol = |c: char| PASSWORD_SYMBOLS.contains(c);

    value.chars().count() >= PASSWORD_MIN_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_symbol(c))
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(is_symbol)
}

/// Non-empty confirmation exactly equal to the password.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password == confirm
}

/// Parse a birth date in `YYYY-MM-DD` form.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).ok()
}

/// Age in whole years on `today`.
///
/// Negative when `birth` is in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Non-empty, parseable birth date at least `min_age` years before `today`.
pub fn is_of_age(value: &str, today: NaiveDate, min_age: u32) -> bool {
    if value.is_empty() {
        return false;
    }
    match parse_birth_date(value) {
        Some(birth) => i64::from(age_on(birth, today)) >= i64::from(min_age),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_name_rule() {
        assert!(is_valid_name("Иван"));
        assert!(is_valid_name("Ёж"));
        assert!(is_valid_name("Алёна"));
        assert!(!is_valid_name("иван"));
        assert!(!is_valid_name("И"));
        assert!(!is_valid_name("Ivan"));
        assert!(!is_valid_name("ИВАН"));
        assert!(!is_valid_name("Иван-Петр"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_name_length_bounds() {
        let twenty = format!("Б{}", "а".repeat(19));
        let twenty_one = format!("Б{}", "а".repeat(20));
        assert_eq!(twenty.chars().count(), 20);
        assert!(is_valid_name(&twenty));
        assert!(!is_valid_name(&twenty_one));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last-1_x@mail.example.ru"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user+tag@example.com"));
        assert!(!is_valid_email("user@exa_mple.com"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_rule() {
        assert!(is_valid_password("Passw0rd!"));
        assert!(is_valid_password("Aa1!aaaa"));
        assert!(!is_valid_password("password!"));
        assert!(!is_valid_password("PASSWORD1!"));
        assert!(!is_valid_password("Passw0rd"));
        assert!(!is_valid_password("Pass1!"));
        assert!(!is_valid_password("Passw0rd!?"));
        assert!(!is_valid_password("Passw0rd! "));
        assert!(!is_valid_password("Пароль1!Aa"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Aa1!aaaa", "Aa1!aaaa"));
        assert!(!passwords_match("Aa1!aaaa", "aa1!aaaa"));
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("Aa1!aaaa", ""));
    }

    #[test]
    fn test_age_boundary() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(date(2006, 6, 15), today), 18);
        assert_eq!(age_on(date(2006, 6, 16), today), 17);
        assert_eq!(age_on(date(2006, 7, 1), today), 17);
        assert_eq!(age_on(date(2006, 5, 31), today), 18);
        assert_eq!(age_on(date(2030, 1, 1), today), -6);

        assert!(is_of_age("2006-06-15", today, 18));
        assert!(!is_of_age("2006-06-16", today, 18));
    }

    #[test]
    fn test_birth_date_rejects_garbage() {
        let today = date(2024, 6, 15);
        assert!(!is_of_age("", today, 18));
        assert!(!is_of_age("not a date", today, 18));
        assert!(!is_of_age("2006-02-30", today, 18));
        assert!(!is_of_age("2030-01-01", today, 18));
    }

    #[test]
    fn test_rule_set_check() {
        let rules = RuleSet::default();
        let cx = rules.context("Aa1!aaaa", date(2024, 6, 15));

        assert!(rules.check(FieldId::FirstName, "Иван", &cx).is_ok());
        assert_eq!(
            rules.check(FieldId::PasswordConfirm, "Aa1!aaab", &cx),
            Err("Пароли не совпадают")
        );
        assert!(rules.check(FieldId::PasswordConfirm, "Aa1!aaaa", &cx).is_ok());
        assert_eq!(
            rules.check(FieldId::BirthDate, "2010-01-01", &cx),
            Err("Вам должно быть не менее 18 лет")
        );
    }

    #[test]
    fn test_rule_set_uses_config() {
        let config = FormConfig {
            min_age: 21,
            ..FormConfig::default()
        };
        let rules = RuleSet::new(&config);
        let cx = rules.context("", date(2024, 6, 15));

        assert_eq!(rules.min_age(), 21);
        assert!(rules.check(FieldId::BirthDate, "2004-06-15", &cx).is_err());
        assert!(rules.check(FieldId::BirthDate, "2003-06-15", &cx).is_ok());
    }
}
