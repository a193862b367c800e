//! Imgur image upload

use super::{ChartError, ImageUploader};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Imgur image upload endpoint
pub const IMGUR_UPLOAD_URL: &str = "https://api.imgur.com/3/image";

/// Configuration for the Imgur uploader
#[derive(Debug, Clone)]
pub struct ImgurConfig {
    /// Upload endpoint
    pub upload_url: String,
    /// Application client id
    pub client_id: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ImgurConfig {
    /// Create a configuration with the default endpoint
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            upload_url: IMGUR_UPLOAD_URL.to_string(),
            client_id: client_id.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Read the client id from `IMGUR_CLIENT_ID`
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("IMGUR_CLIENT_ID").ok()?;
        if client_id.is_empty() {
            return None;
        }
        Some(Self::new(client_id))
    }
}

#[derive(Debug, Deserialize)]
struct ImgurResponse {
    #[serde(default)]
    data: Option<ImgurImage>,
    #[serde(default)]
    success: bool,
}

#[derive(Debug, Deserialize)]
struct ImgurImage {
    #[serde(default)]
    link: Option<String>,
}

impl ImgurResponse {
    fn into_link(self) -> Result<Option<String>, ChartError> {
        if !self.success {
            return Err(ChartError::UploadRejected);
        }
        Ok(self
            .data
            .and_then(|image| image.link)
            .filter(|link| !link.is_empty()))
    }
}

/// Uploads remote images to Imgur by URL
pub struct ImgurUploader {
    config: ImgurConfig,
    client: Client,
}

impl ImgurUploader {
    pub fn new(config: ImgurConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl ImageUploader for ImgurUploader {
    async fn upload(&self, url: &str) -> Result<Option<String>, ChartError> {
        if url.is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .post(&self.config.upload_url)
            .header(AUTHORIZATION, format!("Client-ID {}", self.config.client_id))
            .form(&[("image", url), ("type", "url")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChartError::Api { status, body });
        }

        let link = response.json::<ImgurResponse>().await?.into_link()?;
        tracing::debug!(source = url, hosted = ?link, "Uploaded chart image");
        Ok(link)
    }
}
