//! Display templates for phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token replaced with the area code.
pub const AREA_CODE_TOKEN: &str = "%a";
/// Token replaced with the exchange.
pub const EXCHANGE_TOKEN: &str = "%e";
/// Token replaced with the subscriber number.
pub const SUBSCRIBER_TOKEN: &str = "%n";
/// Token replaced with the extension prefix and extension.
pub const EXTENSION_TOKEN: &str = "%x";

/// Template used by `Display` and the default formatting methods.
pub const DEFAULT_TEMPLATE: &str = "(%a) %e-%n %x";
/// Prefix rendered before an extension by default.
pub const DEFAULT_EXTENSION_PREFIX: &str = "x";

/// `%x` together with the whitespace around it, dropped when there is no extension.
static RE_EXTENSION_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*%x\s*").unwrap());

/// Display template for a phone number.
///
/// Tokens allowed in the template are:
///
/// | Token | Replaced with |
/// |-------|---------------|
/// | `%a`  | area code |
/// | `%e`  | exchange |
/// | `%n`  | subscriber number |
/// | `%x`  | extension prefix + extension |
///
/// When the number has no extension, `%x` and any whitespace around it are
/// removed. There is no escape for a literal `%a` etc.
///
/// ```rust
/// use common_value_objects::{PhoneFormat, PhoneNumber};
///
/// let format = PhoneFormat::builder()
///     .template("%a.%e.%n %x")
///     .extension_prefix("ext. ")
///     .build();
///
/// let number = PhoneNumber::parse("801-555-1212 x55").unwrap();
/// assert_eq!(number.format_with(&format), "801.555.1212 ext. 55");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormat {
    /// Template containing `%a`, `%e`, `%n` and `%x` tokens.
    pub template: String,
    /// Rendered before the extension digits when an extension exists.
    pub extension_prefix: String,
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            extension_prefix: DEFAULT_EXTENSION_PREFIX.to_string(),
        }
    }
}

impl PhoneFormat {
    /// Create a format from a template and extension prefix.
    pub fn new(template: impl Into<String>, extension_prefix: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            extension_prefix: extension_prefix.into(),
        }
    }

    /// Create a new builder starting from the default format.
    pub fn builder() -> PhoneFormatBuilder {
        PhoneFormatBuilder::default()
    }

    /// Replace the template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Replace the extension prefix.
    pub fn with_extension_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extension_prefix = prefix.into();
        self
    }

    /// Render the template for the given number parts.
    pub(crate) fn render(
        &self,
        area_code: &str,
        exchange: &str,
        subscriber_number: &str,
        extension: Option<&str>,
    ) -> String {
        render(
            &self.template,
            &self.extension_prefix,
            area_code,
            exchange,
            subscriber_number,
            extension,
        )
    }
}

/// Builder for [`PhoneFormat`].
#[derive(Debug, Clone, Default)]
pub struct PhoneFormatBuilder {
    pub(crate) format: PhoneFormat,
}

impl PhoneFormatBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template.
    ///
    /// Default: `"(%a) %e-%n %x"`
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.format.template = template.into();
        self
    }

    /// Set the extension prefix.
    ///
    /// Default: `"x"`
    pub fn extension_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.format.extension_prefix = prefix.into();
        self
    }

    /// Build the [`PhoneFormat`].
    pub fn build(self) -> PhoneFormat {
        self.format
    }
}

pub(crate) fn render(
    template: &str,
    extension_prefix: &str,
    area_code: &str,
    exchange: &str,
    subscriber_number: &str,
    extension: Option<&str>,
) -> String {
    let formatted = template
        .replace(AREA_CODE_TOKEN, area_code)
        .replace(EXCHANGE_TOKEN, exchange)
        .replace(SUBSCRIBER_TOKEN, subscriber_number);

    match extension {
        Some(extension) => {
            formatted.replace(EXTENSION_TOKEN, &format!("{extension_prefix}{extension}"))
        }
        None => RE_EXTENSION_TOKEN.replace_all(&formatted, "").into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        let format = PhoneFormat::default();
        assert_eq!(format.template, "(%a) %e-%n %x");
        assert_eq!(format.extension_prefix, "x");
    }

    #[test]
    fn test_format_builder() {
        let format = PhoneFormat::builder()
            .template("%a-%e-%n")
            .extension_prefix("#")
            .build();
        assert_eq!(format, PhoneFormat::new("%a-%e-%n", "#"));
    }

    #[test]
    fn test_format_with_methods() {
        let format = PhoneFormat::default()
            .with_template("%a%e%n")
            .with_extension_prefix("");
        assert_eq!(format.template, "%a%e%n");
        assert_eq!(format.extension_prefix, "");
    }

    #[test]
    fn test_render_with_extension() {
        let rendered = render("(%a) %e-%n %x", "ext. ", "801", "555", "1212", Some("55"));
        assert_eq!(rendered, "(801) 555-1212 ext. 55");
    }

    #[test]
    fn test_render_without_extension_strips_token_and_whitespace() {
        assert_eq!(
            render("(%a) %e-%n %x", "x", "801", "555", "1212", None),
            "(801) 555-1212"
        );
        assert_eq!(
            render("%a %x %e", "x", "801", "555", "1212", None),
            "801555"
        );
        assert_eq!(render("%x", "x", "801", "555", "1212", None), "");
    }

    #[test]
    fn test_render_repeated_tokens() {
        assert_eq!(
            render("%a%a %x%x", "x", "801", "555", "1212", Some("9")),
            "801801 x9x9"
        );
    }
}
