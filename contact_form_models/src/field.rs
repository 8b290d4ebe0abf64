use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{FirstName, LastName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The name used in error messages and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The label of the input element. Required fields are marked with `*`.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// The caption used when displaying a submitted value.
    pub fn caption(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    pub fn min_length(self) -> Option<usize> {
        match self {
            Self::FirstName => Some(FirstName::MIN_LENGTH),
            Self::LastName => Some(LastName::MIN_LENGTH),
            Self::Email | Self::Message => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{0}'")]
pub struct ParseFieldNameError(pub String);

impl FromStr for FieldName {
    type Err = ParseFieldNameError;

    /// Accepts `firstName`, `first_name`, `first-name` and any casing thereof.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ParseFieldNameError(s.into()))
    }
}

/// The raw text of every input, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Replaces the value of `field` and returns the previous one.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) -> String {
        std::mem::replace(self.get_mut(field), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }
}
