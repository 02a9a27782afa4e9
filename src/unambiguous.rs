//! Human-readable random codes over a confusion-free alphabet.

use crate::errors::{ValueError, ValueKind};
#[cfg(feature = "random")]
use crate::words::OffensiveWordSearcher;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "random")]
use rand::Rng;

#[cfg(all(feature = "random", feature = "tracing"))]
use tracing::trace;

/// Characters a code may contain. `0`, `1`, `I` and `O` are left out because
/// they are easily misread for one another.
pub const ALLOWED_CHARACTERS: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Configuration for code generation.
///
/// ```rust
/// use common_value_objects::UnambiguousConfig;
///
/// let config = UnambiguousConfig::default().with_max_attempts(50);
/// assert_eq!(config.max_attempts, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnambiguousConfig {
    /// Maximum number of candidates drawn before giving up (default: 10 000).
    pub max_attempts: usize,
}

impl Default for UnambiguousConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

impl UnambiguousConfig {
    /// Set the maximum number of candidates drawn.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// A code made only of [`ALLOWED_CHARACTERS`].
///
/// Generated codes are screened with an [`OffensiveWordSearcher`](crate::OffensiveWordSearcher)
/// and redrawn until clean.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnambiguousString(String);

impl UnambiguousString {
    /// Accept an existing code, e.g. one typed back by a user.
    ///
    /// The code must be non-empty and use only [`ALLOWED_CHARACTERS`]; case
    /// matters.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        if input.is_empty() || !input.chars().all(|c| ALLOWED_CHARACTERS.contains(c)) {
            return Err(ValueError::invalid_format(
                ValueKind::UnambiguousString,
                input,
            ));
        }
        Ok(Self(input.to_string()))
    }

    /// Generate a clean code of `count` characters with the thread-local RNG
    /// and the embedded word list.
    ///
    /// ```rust
    /// use common_value_objects::UnambiguousString;
    ///
    /// let code = UnambiguousString::generate(8).unwrap();
    /// assert_eq!(code.len(), 8);
    /// assert!(UnambiguousString::generate(0).is_err());
    /// ```
    #[cfg(feature = "random")]
    pub fn generate(count: usize) -> Result<Self, ValueError> {
        Self::generate_with(
            count,
            &UnambiguousConfig::default(),
            &OffensiveWordSearcher::new(),
            &mut rand::thread_rng(),
        )
    }

    /// Generate a clean code with an explicit configuration, searcher and RNG.
    #[cfg(feature = "random")]
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "UnambiguousString::generate_with",
            skip_all,
            fields(count = count, max_attempts = config.max_attempts)
        )
    )]
    pub fn generate_with<R: Rng + ?Sized>(
        count: usize,
        config: &UnambiguousConfig,
        searcher: &OffensiveWordSearcher,
        rng: &mut R,
    ) -> Result<Self, ValueError> {
        if count == 0 {
            return Err(ValueError::InvalidCharacterCount { count });
        }

        let alphabet = ALLOWED_CHARACTERS.as_bytes();
        for _attempt in 1..=config.max_attempts {
            let candidate: String = (0..count)
                .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
                .collect();

            if !searcher.has_offensive_language(&candidate) {
                return Ok(Self(candidate));
            }

            #[cfg(feature = "tracing")]
            trace!(attempt = _attempt, "Rejected offensive candidate code");
        }

        Err(ValueError::GenerationExhausted {
            attempts: config.max_attempts,
        })
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; codes have at least one character.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for UnambiguousString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnambiguousString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for UnambiguousString {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for UnambiguousString {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        UnambiguousString::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for UnambiguousString {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}
