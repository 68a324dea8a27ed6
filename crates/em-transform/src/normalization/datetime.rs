//! Registration timestamp parsing.
//!
//! Roster timestamps use a US month-first layout with a two-digit year,
//! `M/D/YY HH:MM`. Years are always taken to be in the 2000s: `08` is 2008 and
//! `99` is 2099.

use em_model::RegistrationTime;

use crate::error::{Result, TransformError};

const CENTURY: i32 = 2000;

/// Parse a `M/D/YY HH:MM` registration timestamp.
///
/// Fails when a token or separator is missing, a field is not a number, or the
/// date/time does not exist on the calendar.
pub fn parse_registration_time(raw: &str) -> Result<RegistrationTime> {
    let mut tokens = raw.split_whitespace();
    let (Some(date), Some(time)) = (tokens.next(), tokens.next()) else {
        return Err(TransformError::malformed(raw, "expected a date and a time"));
    };

    let [month, day, year] = split_fields(raw, date, '/', "date must be M/D/YY")?;
    let [hour, minute] = split_fields(raw, time, ':', "time must be HH:MM")?;

    let year = CENTURY
        .checked_add(parse_number(raw, year, "year is not a number")?)
        .ok_or_else(|| TransformError::malformed(raw, "year is out of range"))?;
    let month = parse_number(raw, month, "month is not a number")?;
    let day = parse_number(raw, day, "day is not a number")?;
    let hour = parse_number(raw, hour, "hour is not a number")?;
    let minute = parse_number(raw, minute, "minute is not a number")?;

    RegistrationTime::from_parts(year, month, day, hour, minute)
        .ok_or_else(|| TransformError::malformed(raw, "not a calendar date and time"))
}

fn split_fields<'a, const N: usize>(
    raw: &str,
    token: &'a str,
    separator: char,
    reason: &'static str,
) -> Result<[&'a str; N]> {
    let parts: Vec<&str> = token.split(separator).collect();
    parts
        .try_into()
        .map_err(|_| TransformError::malformed(raw, reason))
}

fn parse_number<T: std::str::FromStr>(raw: &str, field: &str, reason: &'static str) -> Result<T> {
    field
        .parse()
        .map_err(|_| TransformError::malformed(raw, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(time: RegistrationTime) -> (i32, u32, u32, u32, u32) {
        (
            time.year(),
            time.month(),
            time.day(),
            time.hour(),
            time.minute(),
        )
    }

    #[test]
    fn parses_month_first_two_digit_year() {
        let time = parse_registration_time("2/18/18 17:30").unwrap();
        assert_eq!(parts(time), (2018, 2, 18, 17, 30));
    }

    #[test]
    fn accepts_zero_padded_fields() {
        let time = parse_registration_time("11/12/08 09:05").unwrap();
        assert_eq!(parts(time), (2008, 11, 12, 9, 5));
    }

    #[test]
    fn years_always_land_in_the_2000s() {
        let time = parse_registration_time("1/1/99 0:00").unwrap();
        assert_eq!(time.year(), 2099);
    }

    #[test]
    fn rejects_missing_time() {
        let err = parse_registration_time("2/18/18").unwrap_err();
        assert_eq!(
            err,
            TransformError::MalformedTimestamp {
                value: "2/18/18".to_string(),
                reason: "expected a date and a time",
            }
        );
    }

    #[test]
    fn rejects_missing_separators() {
        assert!(parse_registration_time("2-18-18 17:30").is_err());
        assert!(parse_registration_time("2/18/18 1730").is_err());
        assert!(parse_registration_time("2/18/18 17:30:15").is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(parse_registration_time("Feb/18/18 17:30").is_err());
        assert!(parse_registration_time("2/18/18 5pm:30").is_err());
    }

    #[test]
    fn rejects_out_of_range_years() {
        let err = parse_registration_time("2/18/2147483647 10:00").unwrap_err();
        assert_eq!(
            err,
            TransformError::MalformedTimestamp {
                value: "2/18/2147483647 10:00".to_string(),
                reason: "year is out of range",
            }
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_registration_time("2/30/18 10:00").is_err());
        assert!(parse_registration_time("13/1/18 10:00").is_err());
        assert!(parse_registration_time("2/18/18 24:00").is_err());
    }
}
