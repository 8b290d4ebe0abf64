use clap::Args;
use contact_form_config::Config;
use contact_form_core_contracts::FormValidatorService;
use contact_form_core_impl::ContactForm;
use contact_form_models::field::FieldName;
use contact_form_templates_impl::TemplateServiceImpl;

use crate::{
    build_form,
    render::{render_form, OutputFormat},
};

/// Fills in the given fields, submits the form and prints the result.
#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// First name, at least 5 characters
    #[arg(long)]
    first_name: Option<String>,
    /// Last name, at least 5 characters
    #[arg(long)]
    last_name: Option<String>,
    /// Email address
    #[arg(long)]
    email: Option<String>,
    /// Optional message
    #[arg(long)]
    message: Option<String>,
    /// Output format of the rendered form
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl SubmitCommand {
    /// Returns whether the submission was accepted.
    pub fn invoke(self, config: Config) -> anyhow::Result<bool> {
        let templates = TemplateServiceImpl::new()?;
        let mut form = build_form(&config);

        let format = self.format;
        let accepted = self.fill_and_submit(&mut form);

        println!(
            "{}",
            render_form(&templates, &config.form.header, &form, format)?
        );

        Ok(accepted)
    }

    fn fill_and_submit<V: FormValidatorService>(self, form: &mut ContactForm<V>) -> bool {
        for (field, value) in [
            (FieldName::FirstName, self.first_name),
            (FieldName::LastName, self.last_name),
            (FieldName::Email, self.email),
            (FieldName::Message, self.message),
        ] {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }

        form.submit().is_ok()
    }
}
