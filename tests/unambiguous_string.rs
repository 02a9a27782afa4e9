//! Integration tests for unambiguous code generation.

#![cfg(feature = "random")]

use common_value_objects::{
    ALLOWED_CHARACTERS, OffensiveWordSearcher, UnambiguousString, ValueError,
};

#[test]
fn test_invalid_character_count() {
    assert_eq!(
        UnambiguousString::generate(0),
        Err(ValueError::InvalidCharacterCount { count: 0 })
    );
}

#[test]
fn test_various_character_counts() {
    let searcher = OffensiveWordSearcher::new();

    for count in [1, 2, 3, 10, 50, 100, 1000] {
        let code = UnambiguousString::generate(count).unwrap();

        assert_eq!(code.len(), count, "Length of generated code");
        assert!(
            !searcher.has_offensive_language(code.as_str()),
            "'{}' contains offensive language",
            code
        );
        assert!(
            code.as_str().chars().all(|c| ALLOWED_CHARACTERS.contains(c)),
            "'{}' contains characters outside the alphabet",
            code
        );
    }
}

#[test]
fn test_serde() {
    let code = UnambiguousString::generate(8).unwrap();
    let json = serde_json::to_string(&code).unwrap();
    let back: UnambiguousString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);

    assert!(serde_json::from_str::<UnambiguousString>(r#""O0I1""#).is_err());
}
