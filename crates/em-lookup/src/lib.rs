//! Elected-official lookup.
//!
//! The pipeline only depends on the [`Lookup`] trait. [`CivicClient`] queries a
//! civic-information HTTP service; [`NoLookup`] is used when no credential is
//! configured or the run is offline. Failures of either are turned into the
//! [`FALLBACK_MESSAGE`] by [`legislators_by_zipcode`].

pub mod civic;
pub mod error;

use tracing::debug;

pub use civic::{CivicClient, CivicConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{LookupError, Result};

/// Text used whenever the official lookup fails.
pub const FALLBACK_MESSAGE: &str = "You can find your representatives by visiting www.commoncause.org/take-action/find-elected-officials";

/// Address -> names of the officials representing it.
pub trait Lookup {
    fn officials(&self, address: &str) -> Result<Vec<String>>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn officials(&self, address: &str) -> Result<Vec<String>> {
        self(address)
    }
}

/// A lookup that always fails with [`LookupError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl Lookup for NoLookup {
    fn officials(&self, _address: &str) -> Result<Vec<String>> {
        Err(LookupError::Disabled)
    }
}

/// Outcome of looking up the legislators for one attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Legislators {
    /// Official names joined with `", "`.
    Found(String),
    Fallback,
}

impl Legislators {
    pub fn text(&self) -> &str {
        match self {
            Self::Found(names) => names,
            Self::Fallback => FALLBACK_MESSAGE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Look up the legislators for a zip code; never fails.
pub fn legislators_by_zipcode(lookup: &dyn Lookup, zipcode: &str) -> Legislators {
    match lookup.officials(zipcode) {
        Ok(names) => Legislators::Found(names.join(", ")),
        Err(error) => {
            debug!(%error, "official lookup failed, using fallback");
            Legislators::Fallback
        }
    }
}
