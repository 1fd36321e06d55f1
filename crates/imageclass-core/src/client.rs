//! Prediction service client
//!
//! One multipart `POST {api_url}/predict` per request. No retries and no
//! timeout: a request runs until the service answers or the transport fails.

use std::future::Future;

use reqwest::multipart::{Form, Part};

use crate::config::{ClientConfig, FILE_FIELD};
use crate::error::{ClassifyError, ClassifyResult};
use crate::file::SelectedFile;
use crate::types::PredictionResponse;

/// Anything that can classify a selected file.
pub trait PredictionClient {
    /// Send `file` to the service and return its decoded answer.
    ///
    /// Non-success HTTP statuses are errors; a `success: false` body is not,
    /// the caller decides what to do with it.
    fn predict(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = ClassifyResult<PredictionResponse>> + Send;
}

/// reqwest-backed client for the remote prediction service
#[derive(Clone, Debug)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpPredictionClient {
    pub fn new(config: ClientConfig) -> ClassifyResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("imageclass/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn form_for(file: &SelectedFile) -> ClassifyResult<Form> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, file: &SelectedFile) -> ClassifyResult<PredictionResponse> {
        let url = self.config.predict_url();
        tracing::info!("Uploading {} ({} bytes) to {}", file.name(), file.len(), url);

        let response = self
            .http
            .post(url)
            .multipart(Self::form_for(file)?)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<PredictionResponse>(&body)
                .ok()
                .and_then(|r| r.error);
            tracing::warn!(
                "Prediction service returned {}: {}",
                status,
                detail.as_deref().unwrap_or("<no detail>")
            );
            return Err(ClassifyError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let decoded: PredictionResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            "Prediction response: success={} prediction={:?}",
            decoded.success,
            decoded.prediction
        );
        Ok(decoded)
    }
}
