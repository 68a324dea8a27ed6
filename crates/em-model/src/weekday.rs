//! Day-of-week labels.
//!
//! Weekdays are numbered from Sunday: `0 = Sunday .. 6 = Saturday`.

/// Weekday names indexed by days from Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Look up the name for a weekday index (`0 = Sunday`).
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_the_week() {
        assert_eq!(weekday_name(0), Some("Sunday"));
        assert_eq!(weekday_name(6), Some("Saturday"));
        assert_eq!(weekday_name(7), None);
    }
}
