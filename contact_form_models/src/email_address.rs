use std::sync::LazyLock;

use regex::Regex;

use crate::macros::nutype_string;

/// Dot separated atoms, `@`, one or more dot separated labels and an
/// alphabetic top-level label of at least two characters. `user@localhost`-style
/// addresses are rejected.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+",
        r"(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*",
        r"\.[a-zA-Z]{2,}$",
    ))
    .unwrap()
});

nutype_string!(EmailAddress(validate(
    len_char_max = EmailAddress::MAX_LENGTH,
    regex = EMAIL_ADDRESS_REGEX
)));

impl EmailAddress {
    pub const MAX_LENGTH: usize = 254;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        for email in [
            "ricardo@gmail.com",
            "max.mustermann@example.de",
            "first+last@sub.domain.example.org",
            "o'neil@my-company.io",
            "r.i.c.a.r.d.o@gmail.com",
        ] {
            assert!(EmailAddress::try_new(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn invalid() {
        for email in [
            "",
            "ricardo",
            "ricardo@",
            "ricardo@gmail",
            "ricardo@gmail.c",
            "ricardo@.com",
            "@gmail.com",
            "ricardo gmail@example.com",
            "ricardo@-gmail.com",
            "ricardo@gmail.com.",
            ".ricardo@gmail.com",
            "ri..cardo@gmail.com",
            "ricardo.@gmail.com",
        ] {
            assert!(EmailAddress::try_new(email).is_err(), "{email}");
        }
    }

    #[test]
    fn too_long() {
        let email = format!("{}@example.com", "a".repeat(EmailAddress::MAX_LENGTH));
        assert!(EmailAddress::try_new(email).is_err());
    }
}
