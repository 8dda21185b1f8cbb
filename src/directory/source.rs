use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::directory::record_model::RawHospital;

/// Bundled directory used when no endpoint is configured.
const SAMPLE_HOSPITALS: &str = include_str!("../../data/sample_hospitals.json");

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid request header '{0}'")]
    InvalidHeader(String),
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("failed to decode hospital list: {0}")]
    Decode(reqwest::Error),
    #[error("failed to parse hospital list: {0}")]
    Parse(serde_json::Error),
    #[error("{0}")]
    Unavailable(String),
}

// ============================================================================
// HospitalSource trait
// ============================================================================

/// Where the hospital list comes from.
pub trait HospitalSource {
    fn fetch(&self) -> Result<Vec<RawHospital>, FetchError>;
}

// ============================================================================
// HTTP source
// ============================================================================

/// `GET` against a fixed URL with static credential headers.
pub struct HttpHospitalSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpHospitalSource {
    /// `timeout` of `None` waits for the endpoint indefinitely.
    pub fn new(
        endpoint: &str,
        headers: &BTreeMap<String, String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| FetchError::InvalidHeader(name.as_str().to_string()))?;
            header_map.insert(name, value);
        }

        let client = reqwest::blocking::Client::builder()
            .default_headers(header_map)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HospitalSource for HttpHospitalSource {
    fn fetch(&self) -> Result<Vec<RawHospital>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json().map_err(FetchError::Decode)
    }
}

// ============================================================================
// Static source
// ============================================================================

/// Serves a fixed list. Backs the offline sample directory and tests.
pub struct StaticHospitalSource {
    hospitals: Vec<RawHospital>,
}

impl StaticHospitalSource {
    pub fn new(hospitals: Vec<RawHospital>) -> Self {
        Self { hospitals }
    }

    /// The four-hospital sample directory shipped with the crate.
    pub fn bundled() -> Result<Self, FetchError> {
        let hospitals = serde_json::from_str(SAMPLE_HOSPITALS).map_err(FetchError::Parse)?;
        Ok(Self::new(hospitals))
    }

    /// Parse a JSON array in the endpoint's format.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let hospitals = serde_json::from_str(json).map_err(FetchError::Parse)?;
        Ok(Self::new(hospitals))
    }
}

impl HospitalSource for StaticHospitalSource {
    fn fetch(&self) -> Result<Vec<RawHospital>, FetchError> {
        Ok(self.hospitals.clone())
    }
}
