use std::{collections::BTreeMap, fmt};

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::field::FieldName;

/// Controls when single fields are validated besides on submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only a submit attempt creates errors. Afterwards edits revalidate the
    /// edited field.
    #[default]
    OnSubmit,
    /// Every edit revalidates the edited field.
    OnChange,
    /// Leaving a field revalidates it.
    OnBlur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationRule {
    Required,
    MinLength { min: usize },
    Email,
}

/// A failed rule of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationError {
    pub field: FieldName,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(field: FieldName, rule: ValidationRule) -> Self {
        Self { field, rule }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match self.rule {
            ValidationRule::Required => write!(f, "{field} is a required field"),
            ValidationRule::MinLength { min } => {
                write!(f, "{field} must have at least {min} characters")
            }
            ValidationRule::Email => write!(f, "{field} must be a valid email address"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("rule", &self.rule)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// The errors of one validation run, holding at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `error`, replacing and returning a previous error of the same
    /// field.
    pub fn insert(&mut self, error: ValidationError) -> Option<ValidationError> {
        self.0.insert(error.field, error)
    }

    pub fn remove(&mut self, field: FieldName) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    /// Stores the outcome of validating a single field.
    pub fn update(&mut self, field: FieldName, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                debug_assert_eq!(error.field, field);
                self.insert(error);
            }
            None => {
                self.remove(field);
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ValidationError::message).collect()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        for error in iter {
            self.insert(error);
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::collections::btree_map::IntoValues<FieldName, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
