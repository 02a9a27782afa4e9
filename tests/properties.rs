//! Property tests for parsing and formatting invariants.

use common_value_objects::{
    EmailAddress, PhoneNumber, SmsPhoneNumber, TOLL_FREE_AREA_CODES, UnambiguousString,
};
use proptest::prelude::*;

/// A valid NANP number written with assorted punctuation and an optional extension.
fn loose_phone_input() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        "[2-9][0-9]{2}",
        "[2-9][0-9]{2}",
        "[0-9]{4}",
        prop::option::of("[0-9]{1,6}"),
        prop::sample::select(vec!["", " ", "-", ".", "  "]),
    )
        .prop_map(|(country, area, exchange, subscriber, extension, sep)| {
            let mut input = String::new();
            if country {
                input.push_str("+1 ");
            }
            input.push_str(&format!("({area}){sep}{exchange}{sep}{subscriber}"));
            if let Some(extension) = extension {
                input.push_str(&format!(" ext. {extension}"));
            }
            input
        })
}

proptest! {
    #[test]
    fn normalized_form_is_stable_under_reparse(input in loose_phone_input()) {
        let number = PhoneNumber::parse(&input).unwrap();
        let reparsed = PhoneNumber::parse(number.normalized()).unwrap();
        prop_assert_eq!(reparsed.normalized(), number.normalized());
        prop_assert_eq!(&reparsed, &number);
    }

    #[test]
    fn normalized_form_has_eleven_digits_before_extension(input in loose_phone_input()) {
        let number = PhoneNumber::parse(&input).unwrap();
        let base = &number.normalized()[..11];
        prop_assert!(base.starts_with('1'));
        prop_assert!(base.chars().all(|c| c.is_ascii_digit()));
        match number.extension() {
            Some(extension) => {
                prop_assert_eq!(number.normalized(), format!("{base} x{extension}"));
                prop_assert!((1..=6).contains(&extension.len()));
            }
            None => prop_assert_eq!(number.normalized().len(), 11),
        }
    }

    #[test]
    fn missing_extension_collapses_token_and_whitespace(
        area in "[2-9][0-9]{2}",
        prefix in "[-().aen/]{0,8}",
        suffix in "[-().aen/]{0,8}",
        before in "[ \t]{0,3}",
        after in "[ \t]{0,3}",
    ) {
        let number = PhoneNumber::parse(&format!("{area}5551212")).unwrap();
        let with_token = format!("{prefix}%a-%e-%n{before}%x{after}{suffix}");
        let without_token = format!("{prefix}%a-%e-%n{suffix}");

        let formatted = number.format(&with_token, "x");
        prop_assert!(!formatted.contains("%x"));
        prop_assert!(!formatted.contains("  "));
        prop_assert_eq!(formatted, number.format(&without_token, "x"));
    }

    #[test]
    fn toll_free_matches_assigned_area_codes(area in "[2-9][0-9]{2}") {
        let number = PhoneNumber::parse(&format!("{area}5551212")).unwrap();
        prop_assert_eq!(number.is_toll_free(), TOLL_FREE_AREA_CODES.contains(&area.as_str()));
    }

    #[test]
    fn short_codes_are_delivered_verbatim(code in "[2-9][0-9]{4,5}") {
        let sms = SmsPhoneNumber::parse(&code).unwrap();
        prop_assert!(sms.is_short_code());
        prop_assert_eq!(sms.delivery_number(), code.clone());
        prop_assert_eq!(sms.normalized(), code.as_str());
    }

    #[test]
    fn long_and_short_codes_never_compare_equal(
        input in loose_phone_input(),
        code in "[2-9][0-9]{4,5}",
    ) {
        if let Some(long) = SmsPhoneNumber::try_parse(&input) {
            let short = SmsPhoneNumber::parse(&code).unwrap();
            prop_assert_ne!(&long, &short);
            prop_assert_ne!(&short, &long);
        }
    }

    #[test]
    fn parsing_arbitrary_input_never_panics(input in any::<String>()) {
        let _ = PhoneNumber::try_parse(&input);
        let _ = SmsPhoneNumber::try_parse(&input);
        let _ = EmailAddress::try_parse(&input);
        let _ = UnambiguousString::parse(&input);
    }
}
