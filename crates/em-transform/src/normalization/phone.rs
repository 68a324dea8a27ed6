use em_model::PhoneNumber;
use tracing::trace;

/// Punctuation removed before the length checks.
const PHONE_PUNCTUATION: [char; 5] = ['(', ')', ' ', '-', '.'];

/// Normalize a home phone number.
///
/// After stripping punctuation, ten characters are kept as-is and longer values
/// starting with the `1` country code lose that digit. Anything else is invalid.
/// Characters other than the stripped punctuation are not checked.
pub fn normalize_phone(raw: &str) -> PhoneNumber {
    let stripped: String = raw
        .chars()
        .filter(|ch| !PHONE_PUNCTUATION.contains(ch))
        .collect();
    let len = stripped.chars().count();
    let phone = match len {
        n if n < 10 => PhoneNumber::Invalid,
        10 => PhoneNumber::Valid(stripped),
        _ => match stripped.strip_prefix('1') {
            Some(rest) => PhoneNumber::Valid(rest.to_string()),
            None => PhoneNumber::Invalid,
        },
    };
    if !phone.is_valid() {
        trace!(len, "phone number rejected");
    }
    phone
}
