use contact_form_core_contracts::{FormPhase, MockFormValidatorService};
use contact_form_demo::RICARDO;
use contact_form_models::{
    field::FieldName,
    validation::{ValidationError, ValidationMode, ValidationRule},
};
use pretty_assertions::assert_eq;

use super::{form, sut};

#[test]
fn on_submit_does_not_validate() {
    // Arrange
    let mut sut = sut(MockFormValidatorService::new(), ValidationMode::OnSubmit);

    // Act
    sut.set_field(FieldName::FirstName, "123");

    // Assert
    assert_eq!(sut.values().first_name, "123");
    assert!(sut.errors().is_empty());
    assert_eq!(sut.phase(), &FormPhase::Editing);
}

#[test]
fn on_change_validates_edited_field() {
    // Arrange
    let error = ValidationError::new(FieldName::FirstName, ValidationRule::MinLength { min: 5 });
    let validator = MockFormValidatorService::new().with_validate_field(
        FieldName::FirstName,
        "123".into(),
        Some(error),
    );
    let mut sut = sut(validator, ValidationMode::OnChange);

    // Act
    sut.set_field(FieldName::FirstName, "123");

    // Assert
    assert_eq!(sut.errors().iter().collect::<Vec<_>>(), [&error]);
}

#[test]
fn on_change_short_first_name_shows_one_error() {
    // Arrange
    let mut sut = form(ValidationMode::OnChange);

    // Act
    sut.type_text(FieldName::FirstName, "123");

    // Assert
    assert_eq!(
        sut.errors().messages(),
        ["firstName must have at least 5 characters"]
    );
}

#[test]
fn on_change_error_disappears_once_valid() {
    // Arrange
    let mut sut = form(ValidationMode::OnChange);
    sut.type_text(FieldName::FirstName, "rica");
    assert_eq!(sut.errors().len(), 1);

    // Act
    sut.type_text(FieldName::FirstName, "rdo");

    // Assert
    assert_eq!(sut.values().first_name, "ricardo");
    assert!(sut.errors().is_empty());
}

#[test]
fn on_change_invalid_email() {
    // Arrange
    let mut sut = form(ValidationMode::OnChange);

    // Act
    sut.type_text(FieldName::Email, "ricardo@gmail");

    // Assert
    assert_eq!(
        sut.errors().messages(),
        ["email must be a valid email address"]
    );
}

#[test]
fn on_change_clearing_required_field() {
    // Arrange
    let mut sut = form(ValidationMode::OnChange);
    sut.type_text(FieldName::LastName, "castillo");

    // Act
    sut.clear_field(FieldName::LastName);

    // Assert
    assert_eq!(sut.errors().messages(), ["lastName is a required field"]);
}

#[test]
fn on_submit_revalidates_after_failed_submit() {
    // Arrange
    let mut sut = form(ValidationMode::OnSubmit);
    sut.submit().unwrap_err();
    assert_eq!(sut.errors().len(), 3);

    // Act
    sut.set_field(FieldName::FirstName, "ricardo");
    sut.set_field(FieldName::Email, "ricardo@gmail");

    // Assert
    assert_eq!(sut.phase(), &FormPhase::Editing);
    assert_eq!(
        sut.errors().messages(),
        [
            "lastName is a required field",
            "email must be a valid email address",
        ]
    );
}

#[test]
fn edit_ends_submitted_display() {
    // Arrange
    let mut sut = form(ValidationMode::OnSubmit);
    for (field, value) in RICARDO.iter() {
        sut.set_field(field, value);
    }
    sut.submit().unwrap();
    assert!(sut.phase().is_submitted());

    // Act
    sut.set_field(FieldName::Message, "hello");

    // Assert
    assert_eq!(sut.phase(), &FormPhase::Editing);
    assert_eq!(sut.submission(), None);
    assert!(sut.errors().is_empty());
}
