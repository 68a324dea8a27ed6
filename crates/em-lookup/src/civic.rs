//! Civic-information HTTP client.
//!
//! Queries the representatives-by-address endpoint for federal legislators
//! (both chambers) and returns the official names in response order.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::Lookup;
use crate::error::{LookupError, Result};

/// Representatives-by-address endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/civicinfo/v2/representatives";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const LEVEL: &str = "country";
const ROLES: [&str; 2] = ["legislatorUpperBody", "legislatorLowerBody"];

/// Connection settings for [`CivicClient`].
#[derive(Debug, Clone)]
pub struct CivicConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl CivicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the civic-information representatives API.
pub struct CivicClient {
    client: Client,
    config: CivicConfig,
}

impl CivicClient {
    pub fn new(config: CivicConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CivicConfig {
        &self.config
    }
}

impl Lookup for CivicClient {
    fn officials(&self, address: &str) -> Result<Vec<String>> {
        debug!(base_url = %self.config.base_url, "requesting officials");
        let mut query = vec![
            ("address", address),
            ("levels", LEVEL),
            ("key", self.config.api_key.as_str()),
        ];
        query.extend(ROLES.iter().map(|role| ("roles", *role)));

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LookupError::Status { status, message });
        }

        let body: RepresentativesResponse = response.json()?;
        Ok(body.official_names())
    }
}

#[derive(Debug, Deserialize)]
struct RepresentativesResponse {
    #[serde(default)]
    officials: Vec<Official>,
}

#[derive(Debug, Deserialize)]
struct Official {
    name: String,
}

impl RepresentativesResponse {
    fn official_names(self) -> Vec<String> {
        self.officials.into_iter().map(|official| official.name).collect()
    }
}
