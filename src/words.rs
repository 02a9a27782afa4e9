//! Offensive language screening.

use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Offensive word list embedded at compile time, one word per line.
static OFFENSIVE_WORDS_TXT: &str = include_str!("../assets/offensive-words.txt");

/// Uppercased offensive words, parsed once on first use.
static OFFENSIVE_WORDS: Lazy<Vec<String>> = Lazy::new(|| parse_words(OFFENSIVE_WORDS_TXT.lines()));

fn parse_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Case-insensitive substring search against a list of offensive words.
///
/// The default list ships with the crate and is shared by every searcher
/// created with [`OffensiveWordSearcher::new`].
///
/// ```rust
/// use common_value_objects::OffensiveWordSearcher;
///
/// let searcher = OffensiveWordSearcher::new();
/// assert!(searcher.has_offensive_language("wankxyz"));
/// assert!(!searcher.has_offensive_language("abcdef"));
/// ```
#[derive(Debug, Clone)]
pub struct OffensiveWordSearcher {
    words: Cow<'static, [String]>,
}

impl OffensiveWordSearcher {
    /// Create a searcher over the embedded word list.
    pub fn new() -> Self {
        Self {
            words: Cow::Borrowed(OFFENSIVE_WORDS.as_slice()),
        }
    }

    /// Create a searcher over a custom word list. Blank entries are skipped.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: Cow::Owned(parse_words(words)),
        }
    }

    /// Returns true if `text` contains any listed word, ignoring ASCII case.
    pub fn has_offensive_language(&self, text: &str) -> bool {
        let text = text.to_ascii_uppercase();
        self.words.iter().any(|word| text.contains(word.as_str()))
    }

    /// The uppercased words this searcher matches.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for OffensiveWordSearcher {
    fn default() -> Self {
        Self::new()
    }
}
