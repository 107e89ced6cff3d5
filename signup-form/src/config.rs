//! Form configuration: message texts and the age threshold.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::FieldId;

/// Default minimum age for the birth date rule.
pub const DEFAULT_MIN_AGE: u32 = 18;

const MAX_MIN_AGE: u32 = 150;

/// Messages shown next to invalid fields, plus the submit notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    /// Underage message. When unset it is built from the configured
    /// minimum age, see [`age_message`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub success: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            first_name: "Имя должно начинаться с заглавной буквы и содержать только русские буквы"
                .to_string(),
            last_name:
                "Фамилия должна начинаться с заглавной буквы и содержать только русские буквы"
                    .to_string(),
            email: "Введите корректный email адрес".to_string(),
            password: "Пароль должен содержать минимум 8 символов, одну заглавную букву, \
                       одну строчную букву, одну цифру и один специальный символ"
                .to_string(),
            password_confirm: "Пароли не совпадают".to_string(),
            birth_date: None,
            success: "Форма успешно отправлена".to_string(),
        }
    }
}

/// Configuration for a [`RuleSet`](crate::rules::RuleSet) and its controller.
///
/// All keys are optional when loading from JSON; missing keys keep their
/// defaults.
///
/// ```ignore
/// let config = FormConfig::from_json(r#"{ "min_age": 21 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum age in whole years for the birth date rule.
    pub min_age: u32,
    pub messages: Messages,
}

impl FormConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Message shown when `field` fails its rule.
    pub fn message(&self, field: FieldId) -> Cow<'_, str> {
        let messages = &self.messages;
        match field {
            FieldId::FirstName => Cow::Borrowed(messages.first_name.as_str()),
            FieldId::LastName => Cow::Borrowed(messages.last_name.as_str()),
            FieldId::Email => Cow::Borrowed(messages.email.as_str()),
            FieldId::Password => Cow::Borrowed(messages.password.as_str()),
            FieldId::PasswordConfirm => Cow::Borrowed(messages.password_confirm.as_str()),
            FieldId::BirthDate => match &messages.birth_date {
                Some(message) => Cow::Borrowed(message.as_str()),
                None => Cow::Owned(age_message(self.min_age)),
            },
        }
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_age == 0 || self.min_age > MAX_MIN_AGE {
            return Err(ConfigError::InvalidMinAge(self.min_age));
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            messages: Messages::default(),
        }
    }
}

/// Default underage message for `min_age`.
pub fn age_message(min_age: u32) -> String {
    // "не менее 21 года", "не менее 18 лет"
    let unit = if min_age % 10 == 1 && min_age % 100 != 11 {
        "года"
    } else {
        "лет"
    };
    format!("Вам должно быть не менее {min_age} {unit}")
}
