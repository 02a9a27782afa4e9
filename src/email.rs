//! Email addresses.

use crate::errors::{ValueError, ValueKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Maximum length of the part before the `@`.
pub const MAX_LOCAL_PART_LEN: usize = 64;
/// Maximum length of a whole address.
pub const MAX_ADDRESS_LEN: usize = 254;

/// addr-spec: a dot-atom or quoted-string local part, then a host name with
/// at least two labels or an IPv4 address literal.
static RE_ADDR_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<local>",
        r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r#"|"(?:[^"\\\r\n]|\\[^\r\n])*""#,
        r")@(?P<domain>",
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\]",
        r")$",
    ))
    .unwrap()
});

/// A syntactically valid email address.
///
/// The address is kept exactly as given; surrounding whitespace is an error
/// rather than something to trim.
///
/// ```rust
/// use common_value_objects::EmailAddress;
///
/// let email = EmailAddress::parse("jimmy.lee@sub.example.com").unwrap();
/// assert_eq!(email.local_part(), "jimmy.lee");
/// assert_eq!(email.domain_part(), "sub.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress {
    value: String,
    at: usize,
}

impl EmailAddress {
    /// Parse and validate an email address.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        if is_valid(input) {
            if let Some(at) = input.rfind('@') {
                return Ok(Self {
                    value: input.to_string(),
                    at,
                });
            }
        }

        #[cfg(feature = "tracing")]
        trace!(input = %input, "Rejected email address");
        Err(ValueError::invalid_format(ValueKind::EmailAddress, input))
    }

    /// Parse an email address, returning `None` instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// The address as a string slice.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Alias for [`EmailAddress::value`].
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Everything before the last `@`.
    pub fn local_part(&self) -> &str {
        &self.value[..self.at]
    }

    /// Everything after the last `@`.
    pub fn domain_part(&self) -> &str {
        &self.value[self.at + 1..]
    }
}

fn is_valid(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_ADDRESS_LEN {
        return false;
    }
    match RE_ADDR_SPEC.captures(input) {
        Some(caps) => caps
            .name("local")
            .is_some_and(|local| local.as_str().len() <= MAX_LOCAL_PART_LEN),
        None => false,
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for EmailAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        EmailAddress::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.value)
    }
}
