//! Property tests for zip and phone normalization.

use em_model::PhoneNumber;
use em_transform::{mode, normalize_phone, normalize_zipcode};
use proptest::prelude::*;

fn digits_len(phone: &PhoneNumber) -> Option<usize> {
    match phone {
        PhoneNumber::Valid(digits) => Some(digits.chars().count()),
        PhoneNumber::Invalid => None,
    }
}

proptest! {
    #[test]
    fn zipcode_is_always_five_chars(raw in "\\PC{0,12}") {
        prop_assert_eq!(normalize_zipcode(&raw).chars().count(), 5);
    }

    #[test]
    fn five_digit_zipcodes_are_unchanged(raw in "[0-9]{5}") {
        prop_assert_eq!(normalize_zipcode(&raw), raw);
    }

    #[test]
    fn ten_digit_phones_keep_length(raw in "[0-9]{10}") {
        prop_assert_eq!(digits_len(&normalize_phone(&raw)), Some(10));
    }

    #[test]
    fn country_code_phones_lose_one_digit(rest in "[0-9]{10,14}") {
        let raw = format!("1{rest}");
        let n = raw.len();
        prop_assert_eq!(digits_len(&normalize_phone(&raw)), Some(n - 1));
    }

    #[test]
    fn punctuation_does_not_change_the_result(raw in "[0-9]{10}") {
        let formatted = format!("({}) {}-{}", &raw[..3], &raw[3..6], &raw[6..]);
        prop_assert_eq!(normalize_phone(&formatted), normalize_phone(&raw));
    }

    #[test]
    fn short_phones_are_invalid(raw in "[0-9]{0,9}") {
        prop_assert_eq!(normalize_phone(&raw), PhoneNumber::Invalid);
    }

    #[test]
    fn mode_is_non_empty_for_non_empty_input(values in prop::collection::vec(0u32..24, 1..50)) {
        let modes = mode(values.iter().copied());
        prop_assert!(!modes.is_empty());
        let top = values.iter().filter(|v| **v == *modes.iter().next().unwrap()).count();
        for value in &modes {
            prop_assert_eq!(values.iter().filter(|v| *v == value).count(), top);
        }
    }
}
