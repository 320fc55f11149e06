//! Validated value types for patient data.
//!
//! Field-level validation happens at construction: once a value of one of
//! these types exists, its content is known to be well-formed. Serde
//! deserialisation goes through the same constructors, so invalid content
//! cannot enter through stored records either.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text exceeded the maximum allowed length
    #[error("Text cannot exceed {max} characters")]
    TooLong { max: usize },
}

/// Errors that can occur when parsing an email address.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The input was not a syntactically valid email address
    #[error("Email address has invalid syntax")]
    Syntax,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A patient's display name: non-empty and bounded in length.
///
/// Bounded at [`PatientName::MAX_LEN`] characters so names remain usable in
/// record listings and downstream systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName(String);

impl PatientName {
    /// Maximum accepted name length, in characters.
    pub const MAX_LEN: usize = 100;

    /// Creates a new `PatientName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty, or
    /// `TextError::TooLong` if it exceeds [`PatientName::MAX_LEN`] characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let text = NonEmptyText::new(input)?;
        if text.as_str().chars().count() > Self::MAX_LEN {
            return Err(TextError::TooLong { max: Self::MAX_LEN });
        }
        Ok(Self(text.0))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A syntactically valid email address.
///
/// Validation is deliberately conservative: exactly one `@`, a non-empty
/// local part, and a dotted domain without whitespace. Deliverability is not
/// checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Syntax` if the input does not look like an
    /// email address.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = input.as_ref().trim();

        let (local, domain) = trimmed.split_once('@').ok_or(EmailError::Syntax)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::Syntax);
        }
        if domain.contains('@') || trimmed.chars().any(char::is_whitespace) {
            return Err(EmailError::Syntax);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::Syntax);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_text_type_traits {
    ($ty:ident, $ctor:expr) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ctor(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text_type_traits!(NonEmptyText, NonEmptyText::new);
impl_text_type_traits!(PatientName, PatientName::new);
impl_text_type_traits!(EmailAddress, EmailAddress::parse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_whitespace() {
        let text = NonEmptyText::new("  1 Main St  ").expect("should accept padded text");
        assert_eq!(text.as_str(), "1 Main St");
    }

    #[test]
    fn non_empty_text_rejects_blank_input() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new("   \t"), Err(TextError::Empty)));
    }

    #[test]
    fn patient_name_accepts_max_length() {
        let name = "a".repeat(PatientName::MAX_LEN);
        let parsed = PatientName::new(&name).expect("100 characters should be accepted");
        assert_eq!(parsed.as_str(), name);
    }

    #[test]
    fn patient_name_rejects_over_max_length() {
        let name = "a".repeat(PatientName::MAX_LEN + 1);
        assert!(matches!(
            PatientName::new(&name),
            Err(TextError::TooLong { max: 100 })
        ));
    }

    #[test]
    fn patient_name_rejects_blank_input() {
        assert!(matches!(PatientName::new("  "), Err(TextError::Empty)));
    }

    #[test]
    fn email_accepts_common_forms() {
        for input in ["ana@x.com", "first.last@clinic.example.org", " padded@x.com "] {
            assert!(
                EmailAddress::parse(input).is_ok(),
                "should accept {input:?}"
            );
        }
    }

    #[test]
    fn email_rejects_malformed_input() {
        for input in [
            "",
            "no-at-sign",
            "@x.com",
            "ana@",
            "ana@nodot",
            "ana@.com",
            "ana@x.com.",
            "two@@x.com",
            "spa ce@x.com",
        ] {
            assert!(
                EmailAddress::parse(input).is_err(),
                "should reject {input:?}"
            );
        }
    }

    #[test]
    fn serde_round_trips_and_validates() {
        let email: EmailAddress =
            serde_json::from_str("\"ana@x.com\"").expect("valid email should deserialize");
        assert_eq!(email.as_str(), "ana@x.com");
        assert_eq!(
            serde_json::to_string(&email).expect("should serialize"),
            "\"ana@x.com\""
        );

        assert!(serde_json::from_str::<EmailAddress>("\"not-an-email\"").is_err());
        assert!(serde_json::from_str::<NonEmptyText>("\"  \"").is_err());
    }
}
