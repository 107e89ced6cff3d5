//! Field identifiers for the sign-up form.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One of the six fields on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirm,
    BirthDate,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::PasswordConfirm,
        FieldId::BirthDate,
    ];

    /// Element id used by the UI layer to bind this field.
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::PasswordConfirm => "password-confirm",
            FieldId::BirthDate => "birth-day",
        }
    }

    /// Human-readable field name for logs and demos.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "first name",
            FieldId::LastName => "last name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::PasswordConfirm => "password confirmation",
            FieldId::BirthDate => "birth date",
        }
    }

    /// Position of this field in [`FieldId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.element_id() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
