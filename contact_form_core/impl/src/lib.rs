use contact_form_core_contracts::FormValidatorService;
use contact_form_models::{
    contact::{ContactMessage, FirstName, LastName, SubmissionResult},
    email_address::EmailAddress,
    field::{FieldName, FormValues},
    validation::{ValidationError, ValidationErrors, ValidationRule},
};

pub use form::{ContactForm, ContactFormConfig};

mod form;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidatorServiceImpl;

impl FormValidatorService for FormValidatorServiceImpl {
    fn validate_field(&self, field: FieldName, value: &str) -> Option<ValidationError> {
        match field {
            FieldName::FirstName => first_name(value).err(),
            FieldName::LastName => last_name(value).err(),
            FieldName::Email => email(value).err(),
            FieldName::Message => None,
        }
    }

    fn validate(&self, values: &FormValues) -> ValidationErrors {
        values
            .iter()
            .filter_map(|(field, value)| self.validate_field(field, value))
            .collect()
    }

    fn submit(&self, values: &FormValues) -> Result<SubmissionResult, ValidationErrors> {
        match (
            first_name(&values.first_name),
            last_name(&values.last_name),
            email(&values.email),
        ) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(SubmissionResult {
                first_name,
                last_name,
                email,
                message: ContactMessage::try_new(values.message.as_str()).ok(),
            }),
            (first_name, last_name, email) => Err([first_name.err(), last_name.err(), email.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

fn first_name(value: &str) -> Result<FirstName, ValidationError> {
    required(FieldName::FirstName, value)?;
    FirstName::try_new(value).map_err(|_| too_short(FieldName::FirstName))
}

fn last_name(value: &str) -> Result<LastName, ValidationError> {
    required(FieldName::LastName, value)?;
    LastName::try_new(value).map_err(|_| too_short(FieldName::LastName))
}

fn email(value: &str) -> Result<EmailAddress, ValidationError> {
    required(FieldName::Email, value)?;
    EmailAddress::try_new(value)
        .map_err(|_| ValidationError::new(FieldName::Email, ValidationRule::Email))
}

fn required(field: FieldName, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, ValidationRule::Required));
    }
    Ok(())
}

fn too_short(field: FieldName) -> ValidationError {
    let min = field.min_length().unwrap_or_default();
    ValidationError::new(field, ValidationRule::MinLength { min })
}
