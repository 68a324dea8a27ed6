use std::fmt::Display;

const ZIPCODE_LEN: usize = 5;

/// Left-pad with `0` to five characters, then keep the first five.
///
/// ZIP+4 values lose their suffix; an empty value becomes `"00000"`.
pub fn normalize_zipcode(raw: impl Display) -> String {
    let raw = raw.to_string();
    let missing = ZIPCODE_LEN.saturating_sub(raw.chars().count());
    std::iter::repeat_n('0', missing)
        .chain(raw.chars())
        .take(ZIPCODE_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_codes() {
        assert_eq!(normalize_zipcode("123"), "00123");
        assert_eq!(normalize_zipcode(""), "00000");
    }

    #[test]
    fn truncates_long_codes() {
        assert_eq!(normalize_zipcode(123456), "12345");
        assert_eq!(normalize_zipcode("20010-1234"), "20010");
    }

    #[test]
    fn keeps_five_digit_codes() {
        assert_eq!(normalize_zipcode("20010"), "20010");
        assert_eq!(normalize_zipcode(normalize_zipcode("20010")), "20010");
    }
}
