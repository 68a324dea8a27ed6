//! Attendee field normalization and registration-timing statistics.
//!
//! - [`normalization`]: zip codes, phone numbers and registration timestamps
//! - [`frequency`]: occurrence counting and multimodal mode sets

pub mod error;
pub mod frequency;
pub mod normalization;

pub use error::{Result, TransformError};
pub use frequency::{FrequencyTable, mode};
pub use normalization::{
    normalize_phone, normalize_record, normalize_zipcode, parse_registration_time,
};
