use contact_form_core_contracts::FormValidatorService;
use contact_form_demo::{INVALID, RICARDO, RICARDO_WITH_MESSAGE};
use contact_form_models::{
    field::{FieldName, FormValues},
    validation::{ValidationError, ValidationRule},
};
use pretty_assertions::assert_eq;

use crate::FormValidatorServiceImpl;

#[test]
fn valid() {
    for values in [&*RICARDO, &*RICARDO_WITH_MESSAGE] {
        assert!(FormValidatorServiceImpl.validate(values).is_empty());
    }
}

#[test]
fn empty_form_has_three_errors() {
    // Act
    let result = FormValidatorServiceImpl.validate(&FormValues::default());

    // Assert
    assert_eq!(
        result.into_iter().collect::<Vec<_>>(),
        [
            ValidationError::new(FieldName::FirstName, ValidationRule::Required),
            ValidationError::new(FieldName::LastName, ValidationRule::Required),
            ValidationError::new(FieldName::Email, ValidationRule::Required),
        ]
    );
}

#[test]
fn message_never_contributes_errors() {
    for message in ["", " ", "message", &"x".repeat(10_000)] {
        let values = FormValues {
            message: message.into(),
            ..Default::default()
        };
        let errors = FormValidatorServiceImpl.validate(&values);
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains(FieldName::Message));
    }
}

#[test]
fn short_first_name_only() {
    // Arrange
    let values = FormValues {
        first_name: "123".into(),
        ..RICARDO.clone()
    };

    // Act
    let result = FormValidatorServiceImpl.validate(&values);

    // Assert
    assert_eq!(
        result.messages(),
        ["firstName must have at least 5 characters"]
    );
}

#[test]
fn missing_email_only() {
    // Arrange
    let values = FormValues {
        email: String::new(),
        ..RICARDO.clone()
    };

    // Act
    let result = FormValidatorServiceImpl.validate(&values);

    // Assert
    assert_eq!(result.messages(), ["email is a required field"]);
}

#[test]
fn every_field_invalid() {
    // Act
    let result = FormValidatorServiceImpl.validate(&INVALID);

    // Assert
    assert_eq!(
        result.messages(),
        [
            "firstName must have at least 5 characters",
            "lastName is a required field",
            "email must be a valid email address",
        ]
    );
}

#[test]
fn email_required_and_malformed_are_exclusive() {
    for (email, expected) in [
        ("", Some(ValidationRule::Required)),
        ("ricardo@gmail", Some(ValidationRule::Email)),
        ("ricardo", Some(ValidationRule::Email)),
        ("ricardo@gmail.com", None),
    ] {
        let error = FormValidatorServiceImpl.validate_field(FieldName::Email, email);
        assert_eq!(error.map(|e| e.rule), expected, "{email}");
    }
}

#[test]
fn name_length_boundaries() {
    for field in [FieldName::FirstName, FieldName::LastName] {
        for (value, expected) in [
            ("", Some(ValidationRule::Required)),
            ("a", Some(ValidationRule::MinLength { min: 5 })),
            ("abcd", Some(ValidationRule::MinLength { min: 5 })),
            ("abcde", None),
            ("abcdefghij", None),
        ] {
            let error = FormValidatorServiceImpl.validate_field(field, value);
            assert_eq!(error.map(|e| e.rule), expected, "{field}: {value:?}");
        }
    }
}

#[test]
fn validate_is_pure() {
    let first = FormValidatorServiceImpl.validate(&INVALID);
    let second = FormValidatorServiceImpl.validate(&INVALID);
    assert_eq!(first, second);
}

#[test]
fn validate_matches_submit() {
    for values in [&*INVALID, &*RICARDO, &FormValues::default()] {
        let errors = FormValidatorServiceImpl.validate(values);
        let submitted = FormValidatorServiceImpl.submit(values);
        assert_eq!(submitted.err().unwrap_or_default(), errors);
    }
}

#[test]
fn length_rule_follows_field_min_length() {
    for field in FieldName::ALL {
        let Some(min) = field.min_length() else {
            continue;
        };

        let short = "x".repeat(min - 1);
        assert_eq!(
            FormValidatorServiceImpl.validate_field(field, &short),
            Some(ValidationError::new(field, ValidationRule::MinLength { min })),
            "{field}"
        );
        assert_eq!(
            FormValidatorServiceImpl.validate_field(field, &"x".repeat(min)),
            None,
            "{field}"
        );
    }
}
