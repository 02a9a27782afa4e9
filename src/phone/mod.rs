//! North American phone numbers.

pub(crate) mod format;

use crate::errors::{ValueError, ValueKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::trace;

pub use format::{PhoneFormat, PhoneFormatBuilder};

/// Area codes currently assigned to toll-free service.
///
/// 822 is reserved for toll-free use but not yet active, so it is not listed.
pub const TOLL_FREE_AREA_CODES: [&str; 7] = ["800", "888", "877", "866", "855", "844", "833"];

/// The NANP country code.
pub const COUNTRY_CODE: &str = "1";

/// Ten NANP digits after an optional country code, then an optional
/// extension of up to six digits ending at a word boundary.
static RE_NANP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^1?([2-9][0-9]{2}[2-9][0-9]{2}[0-9]{4})(?:x([0-9]{1,6})\b)?").unwrap()
});

/// Length of the canonical form without an extension (`1XXXYYYZZZZ`).
const BASE_LEN: usize = 11;
/// Offset of the first extension digit in the canonical form (`1XXXYYYZZZZ x`).
const EXTENSION_OFFSET: usize = BASE_LEN + 2;

/// A North American (NANP) phone number with an optional extension.
///
/// The number is stored in its canonical form `1XXXYYYZZZZ` or
/// `1XXXYYYZZZZ xNNNNNN`. Equality, ordering and hashing use that form, so
/// differently punctuated inputs compare equal.
///
/// ```rust
/// use common_value_objects::PhoneNumber;
///
/// let number = PhoneNumber::parse("+1 (801) 555-1212 ext. 55").unwrap();
/// assert_eq!(number.normalized(), "18015551212 x55");
/// assert_eq!(number.e164(), "+18015551212");
/// assert_eq!(number.to_string(), "(801) 555-1212 x55");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber {
    normalized: String,
}

impl PhoneNumber {
    /// Parse a loosely formatted North American phone number.
    ///
    /// Every character other than digits and `x`/`X` is discarded before
    /// matching, so `(801) 555-1212`, `801.555.1212` and `+1 801 555 1212`
    /// all parse to the same number. An `x` followed by one to six digits is
    /// kept as the extension.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        match normalize(input) {
            Some(normalized) => Ok(Self { normalized }),
            None => {
                #[cfg(feature = "tracing")]
                trace!(input = %input, "Rejected North American phone number");
                Err(ValueError::invalid_format(ValueKind::PhoneNumber, input))
            }
        }
    }

    /// Parse a phone number, returning `None` instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Country code, always `"1"`.
    pub fn country_code(&self) -> &str {
        &self.normalized[..1]
    }

    /// Three digit area code.
    pub fn area_code(&self) -> &str {
        &self.normalized[1..4]
    }

    /// Three digit exchange (central office code).
    pub fn exchange(&self) -> &str {
        &self.normalized[4..7]
    }

    /// Four digit subscriber number.
    pub fn subscriber_number(&self) -> &str {
        &self.normalized[7..BASE_LEN]
    }

    /// Extension digits, if any.
    pub fn extension(&self) -> Option<&str> {
        if self.normalized.len() > EXTENSION_OFFSET {
            Some(&self.normalized[EXTENSION_OFFSET..])
        } else {
            None
        }
    }

    /// Returns true if the number carries an extension.
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// Canonical form `1XXXYYYZZZZ` or `1XXXYYYZZZZ xNNNNNN`.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// E.164 form `+1XXXYYYZZZZ`. The extension is never included.
    pub fn e164(&self) -> String {
        format!("+{}", &self.normalized[..BASE_LEN])
    }

    /// Returns true if the area code is a currently assigned toll-free code.
    pub fn is_toll_free(&self) -> bool {
        TOLL_FREE_AREA_CODES.contains(&self.area_code())
    }

    /// Format the number with a template and extension prefix.
    ///
    /// See [`PhoneFormat`] for the supported tokens.
    ///
    /// ```rust
    /// use common_value_objects::PhoneNumber;
    ///
    /// let number = PhoneNumber::parse("8015551212").unwrap();
    /// assert_eq!(number.format("(%a) %e-%n %x", "x"), "(801) 555-1212");
    /// ```
    pub fn format(&self, template: &str, extension_prefix: &str) -> String {
        format::render(
            template,
            extension_prefix,
            self.area_code(),
            self.exchange(),
            self.subscriber_number(),
            self.extension(),
        )
    }

    /// Format the number with a [`PhoneFormat`].
    pub fn format_with(&self, format: &PhoneFormat) -> String {
        format.render(
            self.area_code(),
            self.exchange(),
            self.subscriber_number(),
            self.extension(),
        )
    }

    /// Format the number with the default template `(%a) %e-%n %x`.
    pub fn format_default(&self) -> String {
        self.format(format::DEFAULT_TEMPLATE, format::DEFAULT_EXTENSION_PREFIX)
    }
}

/// Reduce input to its canonical `1XXXYYYZZZZ[ xNNNNNN]` form.
fn normalize(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'x' | 'X'))
        .collect();

    let caps = RE_NANP.captures(&cleaned)?;
    let digits = caps.get(1)?.as_str();

    let mut normalized = String::with_capacity(EXTENSION_OFFSET + 6);
    normalized.push_str(COUNTRY_CODE);
    normalized.push_str(digits);
    if let Some(extension) = caps.get(2) {
        normalized.push_str(" x");
        normalized.push_str(extension.as_str());
    }
    Some(normalized)
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_default())
    }
}

impl FromStr for PhoneNumber {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        PhoneNumber::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.normalized)
    }
}
