use serde::{Deserialize, Serialize};

use crate::{email_address::EmailAddress, field::FieldName, macros::nutype_string};

nutype_string!(FirstName(validate(len_char_min = FirstName::MIN_LENGTH)));
impl FirstName {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(LastName(validate(len_char_min = LastName::MIN_LENGTH)));
impl LastName {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(ContactMessage(validate(not_empty)));

/// Snapshot of a fully valid form, produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ContactMessage>,
}

impl SubmissionResult {
    /// Returns the submitted value of `field`, or `None` for an absent message.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(self.first_name.as_str()),
            FieldName::LastName => Some(self.last_name.as_str()),
            FieldName::Email => Some(self.email.as_str()),
            FieldName::Message => self.message.as_deref().map(String::as_str),
        }
    }

    /// The submitted fields in display order, skipping absent ones.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }
}
