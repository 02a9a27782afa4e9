//! Error types for value object construction and access.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The kind of value that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A North American phone number.
    PhoneNumber,
    /// A short code or North American phone number usable for SMS.
    SmsPhoneNumber,
    /// A five or six digit carrier short code.
    ShortCode,
    /// An email address.
    EmailAddress,
    /// A code over the unambiguous alphabet.
    UnambiguousString,
}

impl ValueKind {
    /// Human-readable description used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Self::PhoneNumber => "North American phone number",
            Self::SmsPhoneNumber => "North American short code or phone number",
            Self::ShortCode => "North American short code",
            Self::EmailAddress => "email address",
            Self::UnambiguousString => "unambiguous string",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Errors raised while constructing or accessing a value object.
///
/// Construction is the only place malformed input is reported
/// ([`ValueError::InvalidFormat`]). [`ValueError::InvalidState`] signals a
/// programming error: asking an SMS short code for its long code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The input could not be parsed into the requested value.
    #[error("The specified value [{input}] does not appear to be a valid {kind}")]
    InvalidFormat {
        /// What the input was parsed as.
        kind: ValueKind,
        /// The input exactly as supplied.
        input: String,
    },

    /// A variant-specific accessor was called on the wrong variant.
    #[error("The SMS phone number [{value}] is not a long code")]
    InvalidState {
        /// Normalized form of the value the accessor was called on.
        value: String,
    },

    /// A generated code must contain at least one character.
    #[error("Character count must be at least 1, got {count}")]
    InvalidCharacterCount { count: usize },

    /// Every candidate drawn within the attempt budget was rejected.
    #[error("Unable to generate an inoffensive code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

impl ValueError {
    pub(crate) fn invalid_format(kind: ValueKind, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            input: input.into(),
        }
    }

    /// Returns true if the error was caused by malformed input.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns true if the error was caused by wrong-variant access.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// The kind of value that failed to parse, if this is a format error.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::InvalidFormat { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = ValueError::invalid_format(ValueKind::PhoneNumber, "abc");
        assert_eq!(
            err.to_string(),
            "The specified value [abc] does not appear to be a valid North American phone number"
        );
        assert!(err.is_invalid_format());
        assert!(!err.is_invalid_state());
        assert_eq!(err.kind(), Some(ValueKind::PhoneNumber));
    }

    #[test]
    fn test_invalid_state_message() {
        let err = ValueError::InvalidState {
            value: "43553".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The SMS phone number [43553] is not a long code"
        );
        assert!(err.is_invalid_state());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_generation_messages() {
        assert_eq!(
            ValueError::InvalidCharacterCount { count: 0 }.to_string(),
            "Character count must be at least 1, got 0"
        );
        assert_eq!(
            ValueError::GenerationExhausted { attempts: 3 }.to_string(),
            "Unable to generate an inoffensive code after 3 attempts"
        );
    }
}
