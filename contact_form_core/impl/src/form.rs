use std::collections::BTreeSet;

use contact_form_core_contracts::{FormPhase, FormValidatorService};
use contact_form_models::{
    contact::SubmissionResult,
    field::{FieldName, FormValues},
    validation::{ValidationErrors, ValidationMode},
};
use tracing::{debug, info};

/// State holder of a single contact form.
///
/// Field edits, blurs and submit attempts are dispatched by the rendering
/// surface, which afterwards reads [`values`](Self::values),
/// [`errors`](Self::errors) and [`phase`](Self::phase) to redraw.
#[derive(Debug, Clone)]
pub struct ContactForm<Validator> {
    validator: Validator,
    config: ContactFormConfig,
    values: FormValues,
    errors: ValidationErrors,
    touched: BTreeSet<FieldName>,
    submit_count: usize,
    phase: FormPhase,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormConfig {
    pub validation_mode: ValidationMode,
}

impl<Validator> ContactForm<Validator>
where
    Validator: FormValidatorService,
{
    pub fn new(validator: Validator, config: ContactFormConfig) -> Self {
        Self {
            validator,
            config,
            values: FormValues::default(),
            errors: ValidationErrors::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
            phase: FormPhase::Editing,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The errors currently shown, at most one per field.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn submission(&self) -> Option<&SubmissionResult> {
        self.phase.submission()
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Stores the raw text of `field`.
    ///
    /// Any submit result or rejection stops being displayed. Whether the
    /// field is revalidated depends on the validation mode.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        debug!(%field, len = value.chars().count(), "field changed");

        self.values.set(field, value);
        self.phase = FormPhase::Editing;

        if self.revalidates_on_change() {
            self.revalidate(field);
        }
    }

    /// Types `text` into `field`, dispatching one change per character.
    pub fn type_text(&mut self, field: FieldName, text: &str) {
        for c in text.chars() {
            let mut value = self.values.get(field).to_owned();
            value.push(c);
            self.set_field(field, value);
        }
    }

    pub fn clear_field(&mut self, field: FieldName) {
        self.set_field(field, String::new());
    }

    /// Marks `field` as touched after the user left it.
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);

        if self.config.validation_mode == ValidationMode::OnBlur {
            self.revalidate(field);
        }
    }

    /// Validates all fields without changing the displayed state.
    pub fn validate(&self) -> ValidationErrors {
        self.validator.validate(&self.values)
    }

    /// Validates all fields and either displays the errors or the snapshot
    /// of the submitted values.
    pub fn submit(&mut self) -> Result<SubmissionResult, ValidationErrors> {
        self.submit_count += 1;
        self.touched.extend(FieldName::ALL);

        match self.validator.submit(&self.values) {
            Ok(result) => {
                info!(
                    submit_count = self.submit_count,
                    message = result.message.is_some(),
                    "contact form submitted"
                );
                self.errors.clear();
                self.phase = FormPhase::Submitted {
                    result: result.clone(),
                };
                Ok(result)
            }
            Err(errors) => {
                debug!(
                    submit_count = self.submit_count,
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "contact form submission rejected"
                );
                self.errors = errors.clone();
                self.phase = FormPhase::Rejected;
                Err(errors)
            }
        }
    }

    /// Discards all input and returns to the initial state.
    pub fn reset(&mut self) {
        debug!("contact form reset");
        self.values = FormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.submit_count = 0;
        self.phase = FormPhase::Editing;
    }

    fn revalidates_on_change(&self) -> bool {
        match self.config.validation_mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit | ValidationMode::OnBlur => self.submit_count > 0,
        }
    }

    fn revalidate(&mut self, field: FieldName) {
        let error = self
            .validator
            .validate_field(field, self.values.get(field));
        debug!(%field, valid = error.is_none(), "field revalidated");
        self.errors.update(field, error);
    }
}
