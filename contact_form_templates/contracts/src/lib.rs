use contact_form_models::{
    contact::SubmissionResult,
    field::{FieldName, FormValues},
    validation::ValidationErrors,
};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTextTemplate("contact_form.txt"),
    ContactFormHtmlTemplate("contact_form.html"),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFormTextTemplate(pub ContactFormView);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFormHtmlTemplate(pub ContactFormView);

/// Everything the rendering surface displays for one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub header: String,
    pub fields: Vec<FieldView>,
    /// One row per submitted field, present only after a successful submit.
    pub submission: Option<Vec<SubmissionRow>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub label: String,
    pub input_type: InputType,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRow {
    pub name: FieldName,
    pub caption: String,
    pub value: String,
}

impl ContactFormView {
    pub fn new(
        header: impl Into<String>,
        values: &FormValues,
        errors: &ValidationErrors,
        submission: Option<&SubmissionResult>,
    ) -> Self {
        let fields = values
            .iter()
            .map(|(field, value)| FieldView {
                name: field,
                label: field.label().into(),
                input_type: InputType::of(field),
                value: value.into(),
                error: errors.get(field).map(ToString::to_string),
            })
            .collect();

        let submission = submission.map(|result| {
            result
                .iter()
                .map(|(field, value)| SubmissionRow {
                    name: field,
                    caption: field.caption().into(),
                    value: value.into(),
                })
                .collect()
        });

        Self {
            header: header.into(),
            fields,
            submission,
        }
    }

    /// Number of visible error elements.
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }
}

impl InputType {
    fn of(field: FieldName) -> Self {
        match field {
            FieldName::FirstName | FieldName::LastName => Self::Text,
            FieldName::Email => Self::Email,
            FieldName::Message => Self::Textarea,
        }
    }
}
