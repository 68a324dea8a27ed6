//! Field normalization for attendee records.

mod datetime;
mod phone;
mod zipcode;

pub use datetime::parse_registration_time;
pub use phone::normalize_phone;
pub use zipcode::normalize_zipcode;

use em_model::{AttendeeRecord, NormalizedFields};

use crate::error::{Result, TransformError};

/// Normalize the contact and timing fields of one record.
///
/// A missing zip normalizes to `"00000"` and a missing phone to the invalid
/// marker; a missing registration timestamp is malformed.
pub fn normalize_record(record: &AttendeeRecord) -> Result<NormalizedFields> {
    let raw_time = record
        .registered_at()
        .ok_or_else(|| TransformError::malformed("", "missing registration timestamp"))?;
    Ok(NormalizedFields {
        zipcode: normalize_zipcode(record.zipcode().unwrap_or_default()),
        phone: normalize_phone(record.home_phone().unwrap_or_default()),
        registered: parse_registration_time(raw_time)?,
    })
}
