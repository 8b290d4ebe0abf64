use std::sync::LazyLock;

use contact_form_models::{contact::SubmissionResult, field::FormValues};

pub static RICARDO: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    first_name: "ricardo".into(),
    last_name: "castillo".into(),
    email: "ricardo@gmail.com".into(),
    message: String::new(),
});

pub static RICARDO_WITH_MESSAGE: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    message: "message".into(),
    ..RICARDO.clone()
});

pub static RICARDO_SUBMISSION: LazyLock<SubmissionResult> = LazyLock::new(|| SubmissionResult {
    first_name: "ricardo".try_into().unwrap(),
    last_name: "castillo".try_into().unwrap(),
    email: "ricardo@gmail.com".try_into().unwrap(),
    message: None,
});

pub static RICARDO_WITH_MESSAGE_SUBMISSION: LazyLock<SubmissionResult> =
    LazyLock::new(|| SubmissionResult {
        message: Some("message".try_into().unwrap()),
        ..RICARDO_SUBMISSION.clone()
    });

/// First name too short, last name missing, email without top-level domain.
pub static INVALID: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    first_name: "123".into(),
    last_name: String::new(),
    email: "ricardo@gmail".into(),
    message: "message".into(),
});
