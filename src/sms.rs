//! SMS-capable numbers: NANP long codes and carrier short codes.

use crate::errors::{ValueError, ValueKind};
use crate::phone::PhoneNumber;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Five or six digits, not starting with 0 or 1.
static RE_SHORT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[2-9][0-9]{4,5}$").unwrap());

// =============================================================================
// ShortCode
// =============================================================================

/// A North American carrier short code (e.g., "43553").
///
/// Short codes registered with the US short code registry are five or six
/// digits and never start with 0 or 1. Three digit provider codes such as
/// `611` are not SMS-capable and are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parse a short code, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        let trimmed = input.trim();
        if RE_SHORT_CODE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValueError::invalid_format(ValueKind::ShortCode, input))
        }
    }

    /// Get the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortCode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        ShortCode::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for ShortCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// SmsPhoneNumber
// =============================================================================

/// A number that can send or receive SMS: either a full NANP phone number
/// (long code) or a carrier short code.
///
/// Long codes never carry an extension.
///
/// ```rust
/// use common_value_objects::SmsPhoneNumber;
///
/// let long = SmsPhoneNumber::parse("(801) 555-1212").unwrap();
/// assert!(long.is_long_code());
/// assert_eq!(long.delivery_number(), "+18015551212");
///
/// let short = SmsPhoneNumber::parse(" 43553 ").unwrap();
/// assert!(short.is_short_code());
/// assert_eq!(short.delivery_number(), "43553");
///
/// assert!(SmsPhoneNumber::parse("8015551212 x123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SmsPhoneNumber {
    /// A ten digit North American number without an extension.
    LongCode(PhoneNumber),
    /// A five or six digit carrier short code.
    ShortCode(ShortCode),
}

impl SmsPhoneNumber {
    /// Parse a North American phone number or short code.
    ///
    /// The input is first tried as a phone number; one that parses but has an
    /// extension is not accepted as a long code. Otherwise the trimmed input
    /// is tried as a short code.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        if let Some(number) = PhoneNumber::try_parse(input) {
            if !number.has_extension() {
                #[cfg(feature = "tracing")]
                trace!(normalized = %number.normalized(), "Classified SMS number as long code");
                return Ok(Self::LongCode(number));
            }
            #[cfg(feature = "tracing")]
            debug!(input = %input, "SMS phone numbers can't contain extensions");
        }

        if let Ok(code) = ShortCode::parse(input) {
            #[cfg(feature = "tracing")]
            trace!(code = %code, "Classified SMS number as short code");
            return Ok(Self::ShortCode(code));
        }

        #[cfg(feature = "tracing")]
        trace!(input = %input, "Rejected SMS phone number");
        Err(ValueError::invalid_format(ValueKind::SmsPhoneNumber, input))
    }

    /// Parse an SMS phone number, returning `None` instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Returns true if this is a carrier short code.
    pub fn is_short_code(&self) -> bool {
        matches!(self, Self::ShortCode(_))
    }

    /// Returns true if this is a full NANP phone number.
    pub fn is_long_code(&self) -> bool {
        matches!(self, Self::LongCode(_))
    }

    /// The long code phone number.
    ///
    /// Calling this on a short code is a programming error and returns
    /// [`ValueError::InvalidState`].
    pub fn get_long_code(&self) -> Result<&PhoneNumber, ValueError> {
        match self {
            Self::LongCode(number) => Ok(number),
            Self::ShortCode(code) => Err(ValueError::InvalidState {
                value: code.as_str().to_string(),
            }),
        }
    }

    /// The long code phone number, if this is one.
    pub fn as_long_code(&self) -> Option<&PhoneNumber> {
        match self {
            Self::LongCode(number) => Some(number),
            Self::ShortCode(_) => None,
        }
    }

    /// The short code, if this is one.
    pub fn as_short_code(&self) -> Option<&ShortCode> {
        match self {
            Self::LongCode(_) => None,
            Self::ShortCode(code) => Some(code),
        }
    }

    /// Display form: the default phone format for long codes, the code itself
    /// for short codes.
    pub fn format(&self) -> String {
        match self {
            Self::LongCode(number) => number.format_default(),
            Self::ShortCode(code) => code.as_str().to_string(),
        }
    }

    /// Canonical form: `1XXXYYYZZZZ` for long codes, the code for short codes.
    pub fn normalized(&self) -> &str {
        match self {
            Self::LongCode(number) => number.normalized(),
            Self::ShortCode(code) => code.as_str(),
        }
    }

    /// The number to hand to a carrier: E.164 for long codes, the code
    /// verbatim for short codes.
    pub fn delivery_number(&self) -> String {
        match self {
            Self::LongCode(number) => number.e164(),
            Self::ShortCode(code) => code.as_str().to_string(),
        }
    }
}

impl Display for SmsPhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for SmsPhoneNumber {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SmsPhoneNumber {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SmsPhoneNumber {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShortCode> for SmsPhoneNumber {
    fn from(code: ShortCode) -> Self {
        Self::ShortCode(code)
    }
}

impl TryFrom<PhoneNumber> for SmsPhoneNumber {
    type Error = ValueError;

    /// Wrap a phone number as a long code; numbers with an extension are rejected.
    fn try_from(number: PhoneNumber) -> Result<Self, Self::Error> {
        if number.has_extension() {
            return Err(ValueError::invalid_format(
                ValueKind::SmsPhoneNumber,
                number.normalized(),
            ));
        }
        Ok(Self::LongCode(number))
    }
}

impl<'de> Deserialize<'de> for SmsPhoneNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        SmsPhoneNumber::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for SmsPhoneNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.normalized())
    }
}
