pub mod letter;
pub mod normalized;
pub mod record;
pub mod weekday;

pub use letter::LetterFields;
pub use normalized::{INVALID_PHONE_MESSAGE, NormalizedFields, PhoneNumber, RegistrationTime};
pub use record::{AttendeeRecord, columns};
pub use weekday::{WEEKDAY_NAMES, weekday_name};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_weekday_matches_name_table() {
        // 2008-11-12 was a Wednesday.
        let registered = RegistrationTime::from_parts(2008, 11, 12, 10, 47).expect("valid time");
        assert_eq!(registered.weekday_index(), 3);
        assert_eq!(weekday_name(registered.weekday_index()), Some("Wednesday"));
    }

    #[test]
    fn invalid_phone_displays_sentinel() {
        assert_eq!(PhoneNumber::Invalid.to_string(), "Invalid phone number");
        assert_eq!(
            PhoneNumber::Valid("6154385000".to_string()).to_string(),
            "6154385000"
        );
    }
}
