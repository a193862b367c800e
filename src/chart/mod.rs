//! Chart enrichment module
//!
//! Finds a USD-pegged price chart for a coin and re-hosts it so Slack can
//! render it as an image block

mod imgur;
mod resolver;

pub use imgur::{ImgurConfig, ImgurUploader, IMGUR_UPLOAD_URL};
pub use resolver::{TemplateChartResolver, USD_PEGGED_QUOTES};

use crate::coin::CoinSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Chart lookup and upload errors
#[derive(Debug, Error)]
pub enum ChartError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Remote API answered with a non-success status
    #[error("API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Image host accepted the request but reported failure
    #[error("Upload rejected by image host")]
    UploadRejected,
}

/// Finds a chart image for a coin
#[async_trait]
pub trait ChartResolver: Send + Sync {
    /// URL of a USD-pegged chart image, `None` when no chart exists
    async fn find(&self, coin: &CoinSnapshot) -> Result<Option<String>, ChartError>;
}

/// Re-hosts a remote image
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload the image at `url`, returning its hosted URL
    async fn upload(&self, url: &str) -> Result<Option<String>, ChartError>;
}
