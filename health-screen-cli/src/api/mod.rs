mod error;

pub use error::RemoteError;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use health_screen::api::screenings::ScreeningResponse;
use health_screen::models::HealthProfile;

/// Error payload shape returned by the screening server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for a running screening server
pub struct RemoteClient {
    client: Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one profile to the server's screening endpoint
    pub async fn screen(&self, profile: &HealthProfile) -> Result<ScreeningResponse, RemoteError> {
        let url = format!("{}/predict", self.base_url);
        let response = self.client.post(&url).json(profile).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            return Err(RemoteError::from_status(status, message));
        }

        Ok(response.json::<ScreeningResponse>().await?)
    }
}
