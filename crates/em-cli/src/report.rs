//! Console formatting for per-record lines and the registration-timing report.

use std::collections::BTreeSet;

use em_model::{PhoneNumber, weekday_name};

/// Peak registration hours and weekdays over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingReport {
    /// Hours of the day (0-23) tied for most registrations.
    pub peak_hours: BTreeSet<u32>,
    /// Weekday indices (`0 = Sunday`) tied for most registrations.
    pub peak_weekdays: BTreeSet<u32>,
    pub samples: usize,
}

impl TimingReport {
    /// Peak hours as `H:00` tokens, ascending.
    pub fn hour_tokens(&self) -> Vec<String> {
        self.peak_hours.iter().map(|hour| format!("{hour}:00")).collect()
    }

    /// Peak weekdays as names, Sunday first.
    pub fn weekday_names(&self) -> Vec<&'static str> {
        self.peak_weekdays
            .iter()
            .filter_map(|index| weekday_name(*index))
            .collect()
    }
}

/// `name: phone`, printed once per processed record.
pub fn format_contact_line(name: &str, phone: &PhoneNumber) -> String {
    format!("{name}: {phone}")
}

pub fn format_peak_hours(report: &TimingReport) -> String {
    format!("Peak registration hours: {}", report.hour_tokens().join(" "))
}

pub fn format_peak_weekdays(report: &TimingReport) -> String {
    format!("Peak registration days: {}", report.weekday_names().join(" "))
}
