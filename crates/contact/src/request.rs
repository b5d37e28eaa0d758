use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use validator::Validate;

use crate::ValidationError;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_EVENT_TYPE: &str = "event-type";
pub const FIELD_EVENT_DATE: &str = "event-date";
pub const FIELD_MESSAGE: &str = "message";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Raw values of the contact form at the moment it was submitted, keyed by
/// the form control name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Missing controls read as an empty string.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A validated quote request. Lives for one submission attempt only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), regex(path = *EMAIL))]
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactRequest {
    /// Trims name, email and message, then validates.
    ///
    /// Missing required fields are reported before a malformed email.
    pub fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        let request = Self {
            name: form.get(FIELD_NAME).trim().to_owned(),
            email: form.get(FIELD_EMAIL).trim().to_owned(),
            phone: form.get(FIELD_PHONE).to_owned(),
            event_type: form.get(FIELD_EVENT_TYPE).to_owned(),
            event_date: form.get(FIELD_EVENT_DATE).to_owned(),
            message: form.get(FIELD_MESSAGE).trim().to_owned(),
        };

        request.validate()?;

        Ok(request)
    }
}
