use anyhow::Context;
use clap::ValueEnum;
use contact_form_core_contracts::{FormPhase, FormValidatorService};
use contact_form_core_impl::ContactForm;
use contact_form_models::{field::FormValues, validation::ValidationErrors};
use contact_form_templates_contracts::{
    ContactFormHtmlTemplate, ContactFormTextTemplate, ContactFormView, TemplateService,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Serialize)]
struct FormSnapshot<'a> {
    values: &'a FormValues,
    errors: &'a ValidationErrors,
    #[serde(flatten)]
    phase: &'a FormPhase,
}

/// Projects the current state of `form` onto the requested output format.
pub fn render_form<V: FormValidatorService>(
    templates: &impl TemplateService,
    header: &str,
    form: &ContactForm<V>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let view = || ContactFormView::new(header, form.values(), form.errors(), form.submission());

    match format {
        OutputFormat::Text => templates.render(&ContactFormTextTemplate(view())),
        OutputFormat::Html => templates.render(&ContactFormHtmlTemplate(view())),
        OutputFormat::Json => serde_json::to_string_pretty(&FormSnapshot {
            values: form.values(),
            errors: form.errors(),
            phase: form.phase(),
        })
        .context("Failed to serialize form"),
    }
}
