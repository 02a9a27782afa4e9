//! # Common Value Objects
//!
//! Validated, immutable identifier types for telephony and messaging code.
//!
//! Every type is checked once when it is constructed and is read-only after
//! that. Parsing never panics: each type has a `parse` returning
//! `Result<_, ValueError>` and a `try_parse` returning `Option`.
//!
//! | Type | Holds |
//! |------|-------|
//! | [`PhoneNumber`] | North American (NANP) number with optional extension |
//! | [`SmsPhoneNumber`] | NANP long code or 5-6 digit carrier short code |
//! | [`EmailAddress`] | Email address with local/domain split |
//! | [`UnambiguousString`] | Random code without look-alike characters |
//!
//! ## Quick Start
//!
//! ```rust
//! use common_value_objects::{PhoneNumber, SmsPhoneNumber};
//!
//! let number = PhoneNumber::parse("801.555.1212 ext. 55").unwrap();
//! assert_eq!(number.normalized(), "18015551212 x55");
//! assert_eq!(number.format("(%a) %e-%n %x", "ext. "), "(801) 555-1212 ext. 55");
//!
//! let to = SmsPhoneNumber::parse("43553").unwrap();
//! assert!(to.is_short_code());
//! assert_eq!(to.delivery_number(), "43553");
//! ```
//!
//! ## Features
//!
//! - `tracing` - emit `tracing` events on rejected input and code generation (enabled by default)
//! - `random` - [`UnambiguousString::generate`] (enabled by default)

#![forbid(unsafe_code)]

pub mod email;
pub mod errors;
pub mod phone;
pub mod sms;
pub mod unambiguous;
pub mod words;

// Re-export commonly used types at the crate root
pub use email::EmailAddress;
pub use errors::{ValueError, ValueKind};
pub use phone::{PhoneFormat, PhoneFormatBuilder, PhoneNumber, TOLL_FREE_AREA_CODES};
pub use sms::{ShortCode, SmsPhoneNumber};
pub use unambiguous::{ALLOWED_CHARACTERS, UnambiguousConfig, UnambiguousString};
pub use words::OffensiveWordSearcher;
