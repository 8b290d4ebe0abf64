use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    str::FromStr,
};

use anyhow::Context;
use clap::Args;
use contact_form_config::Config;
use contact_form_core_contracts::FormValidatorService;
use contact_form_core_impl::ContactForm;
use contact_form_models::field::{FieldName, ParseFieldNameError};
use contact_form_templates_contracts::TemplateService;
use contact_form_templates_impl::TemplateServiceImpl;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    build_form,
    render::{render_form, OutputFormat},
};

/// Reads form events from stdin and prints the form after each of them.
///
/// One event per line:
///
/// ```text
/// set <field> <value>    replace the value of a field
/// type <field> <text>    append text, one change per character
/// clear <field>          empty a field
/// blur <field>           leave a field
/// submit                 submit the form
/// reset                  discard all input
/// show                   print the form again
/// quit                   exit
/// ```
///
/// `<value>` and `<text>` start after the single separator following the
/// field name and are taken as is, including leading and trailing spaces.
#[derive(Debug, Args)]
pub struct InteractiveCommand {
    /// Output format of the rendered form
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl InteractiveCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let templates = TemplateServiceImpl::new()?;
        let mut form = build_form(&config);

        run(
            &mut form,
            &templates,
            &config.form.header,
            self.format,
            std::io::stdin().lock(),
            &mut std::io::stdout().lock(),
        )
    }
}

pub fn run<V: FormValidatorService>(
    form: &mut ContactForm<V>,
    templates: &impl TemplateService,
    header: &str,
    format: OutputFormat,
    input: impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "{}", render_form(templates, header, form, format)?)?;

    for line in input.lines() {
        let line = line.context("Failed to read event")?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<Event>() {
            Ok(event) => event,
            Err(err) => {
                warn!("Invalid event {line:?}: {err}");
                writeln!(output, "{err}")?;
                continue;
            }
        };

        debug!(?event, "dispatch");
        if apply(form, event).is_break() {
            break;
        }

        writeln!(output, "{}", render_form(templates, header, form, format)?)?;
    }

    output.flush()?;
    Ok(())
}

fn apply<V: FormValidatorService>(form: &mut ContactForm<V>, event: Event) -> ControlFlow<()> {
    match event {
        Event::Set { field, value } => form.set_field(field, value),
        Event::Type { field, text } => form.type_text(field, &text),
        Event::Clear { field } => form.clear_field(field),
        Event::Blur { field } => form.blur(field),
        Event::Submit => {
            if let Err(errors) = form.submit() {
                debug!(errors = errors.len(), "showing rejected submit");
            }
        }
        Event::Reset => form.reset(),
        Event::Show => {}
        Event::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Set { field: FieldName, value: String },
    Type { field: FieldName, text: String },
    Clear { field: FieldName },
    Blur { field: FieldName },
    Submit,
    Reset,
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Missing field name")]
    MissingField,
    #[error(transparent)]
    Field(#[from] ParseFieldNameError),
}

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_start().trim_end_matches(['\r', '\n']);
        let (command, rest) = split_word(line);

        let field_and_value = || -> Result<(FieldName, String), ParseEventError> {
            let (field, value) = split_word(rest.trim_start());
            if field.is_empty() {
                return Err(ParseEventError::MissingField);
            }
            Ok((field.parse()?, value.into()))
        };

        Ok(match command.to_lowercase().as_str() {
            "set" => {
                let (field, value) = field_and_value()?;
                Self::Set { field, value }
            }
            "type" => {
                let (field, text) = field_and_value()?;
                Self::Type { field, text }
            }
            "clear" => Self::Clear {
                field: field_and_value()?.0,
            },
            "blur" => Self::Blur {
                field: field_and_value()?.0,
            },
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            _ => return Err(ParseEventError::UnknownCommand(command.into())),
        })
    }
}

/// Splits off the first word. The remainder starts after exactly one
/// whitespace character and is kept verbatim.
fn split_word(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace).unwrap_or((s, ""))
}
