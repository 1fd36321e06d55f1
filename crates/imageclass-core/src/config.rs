//! Prediction service configuration
//!
//! The base URL is fixed at deployment time (command line or environment)
//! and never changes while the widget is running.

use reqwest::Url;

use crate::error::{ClassifyError, ClassifyResult};

/// Base URL used when nothing else is configured (the backend's dev port).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path of the classification endpoint, relative to the base URL.
pub const PREDICT_PATH: &str = "predict";

/// Multipart field name the service reads the image from.
pub const FILE_FIELD: &str = "file";

/// Validated client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: Url,
}

impl ClientConfig {
    /// Parse and validate a base URL.
    ///
    /// Only `http` and `https` are accepted. Trailing slashes are ignored so
    /// `https://host/` and `https://host` name the same service.
    pub fn new(api_url: &str) -> ClassifyResult<Self> {
        let trimmed = api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClassifyError::InvalidConfig("API URL is empty".to_string()));
        }

        let api_url = Url::parse(trimmed)
            .map_err(|e| ClassifyError::InvalidConfig(format!("{trimmed}: {e}")))?;

        match api_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClassifyError::InvalidConfig(format!(
                    "unsupported scheme '{other}' in {trimmed}"
                )))
            }
        }
        if api_url.host_str().is_none() {
            return Err(ClassifyError::InvalidConfig(format!("{trimmed} has no host")));
        }

        Ok(Self { api_url })
    }

    /// Base URL of the prediction service
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Full URL of the `predict` endpoint.
    pub fn predict_url(&self) -> Url {
        let mut url = self.api_url.clone();
        // Url::parse normalises an empty path to "/", so pop it first
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(PREDICT_PATH);
        }
        url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}
