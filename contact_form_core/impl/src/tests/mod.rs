use contact_form_core_contracts::MockFormValidatorService;
use contact_form_models::validation::ValidationMode;

use crate::{ContactForm, ContactFormConfig, FormValidatorServiceImpl};

mod set_field;
mod validate;

type Sut = ContactForm<MockFormValidatorService>;

fn sut(validator: MockFormValidatorService, validation_mode: ValidationMode) -> Sut {
    ContactForm::new(validator, ContactFormConfig { validation_mode })
}

fn form(validation_mode: ValidationMode) -> ContactForm<FormValidatorServiceImpl> {
    ContactForm::new(FormValidatorServiceImpl, ContactFormConfig { validation_mode })
}
