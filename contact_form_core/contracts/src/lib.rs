use contact_form_models::{
    contact::SubmissionResult,
    field::{FieldName, FormValues},
    validation::{ValidationError, ValidationErrors},
};
use serde::Serialize;

/// Pure validation of contact form values.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormValidatorService: Send + Sync + 'static {
    /// Applies the rule of a single field.
    fn validate_field(&self, field: FieldName, value: &str) -> Option<ValidationError>;

    /// Applies the rules of all fields and returns every violation.
    fn validate(&self, values: &FormValues) -> ValidationErrors;

    /// Validates `values` and, if there are no errors, returns a snapshot of
    /// the submitted fields.
    fn submit(&self, values: &FormValues) -> Result<SubmissionResult, ValidationErrors>;
}

#[cfg(feature = "mock")]
impl MockFormValidatorService {
    pub fn with_validate_field(
        mut self,
        field: FieldName,
        value: String,
        result: Option<ValidationError>,
    ) -> Self {
        self.expect_validate_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_once(move |_, _| result);
        self
    }

    pub fn with_submit(
        mut self,
        values: FormValues,
        result: Result<SubmissionResult, ValidationErrors>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(move |_| result);
        self
    }
}

/// What the rendering surface currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    /// Inputs are being edited. Errors of revalidated fields may be visible.
    Editing,
    /// The last submit attempt failed.
    Rejected,
    /// The last submit attempt succeeded.
    Submitted { result: SubmissionResult },
}

impl FormPhase {
    pub fn submission(&self) -> Option<&SubmissionResult> {
        match self {
            Self::Submitted { result } => Some(result),
            Self::Editing | Self::Rejected => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}
