use contact_form_config::Config;
use contact_form_core_impl::{ContactForm, ContactFormConfig, FormValidatorServiceImpl};

pub mod commands;
pub mod render;

/// Creates an empty form configured by `config`.
pub fn build_form(config: &Config) -> ContactForm<FormValidatorServiceImpl> {
    ContactForm::new(
        FormValidatorServiceImpl,
        ContactFormConfig {
            validation_mode: config.form.validation_mode,
        },
    )
}
