//! Header symbolization.

/// Convert a raw header cell into a column symbol.
///
/// Lower-cases the header, drops characters that are neither ASCII word
/// characters nor whitespace, trims, and joins whitespace runs with `_`:
/// `"First Name"` -> `first_name`, `"E-mail"` -> `email`.
pub fn symbolize_header(raw: &str) -> String {
    let cleaned: String = raw
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(symbolize_header("first_Name"), "first_name");
        assert_eq!(symbolize_header("  Home Phone "), "home_phone");
        assert_eq!(symbolize_header("RegDate"), "regdate");
    }

    #[test]
    fn strips_punctuation_and_bom() {
        assert_eq!(symbolize_header("\u{feff}Zipcode"), "zipcode");
        assert_eq!(symbolize_header("E-mail (work)"), "email_work");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(symbolize_header("Straße"), "strae");
        assert_eq!(symbolize_header("Zip²"), "zip");
    }

    #[test]
    fn blank_header_is_empty() {
        assert_eq!(symbolize_header(" "), "");
    }
}
