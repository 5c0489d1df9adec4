//! Rasterizer client: the single point of entry for HTML-to-PDF conversion.
//!
//! The rasterizer is an external service consumed as a black box: the core
//! hands it a rendered HTML document plus a fixed page configuration and
//! receives PDF bytes back. No other module may talk to the rasterizer
//! directly. Export has no retry policy; a failed conversion is surfaced to
//! the caller and the in-memory document is untouched.

use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Fixed export configuration, mirrored from the front-end's historical
/// defaults: A4 portrait, 10 mm margins, 2x raster scale.
pub const DEFAULT_PAGE_FORMAT: &str = "a4";
pub const DEFAULT_ORIENTATION: &str = "portrait";
pub const DEFAULT_MARGIN_MM: f32 = 10.0;
pub const DEFAULT_RASTER_SCALE: f32 = 2.0;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rasterizer error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct RasterOptions {
    pub page_format: &'static str,
    pub orientation: &'static str,
    pub margin_mm: f32,
    pub raster_scale: f32,
    pub filename: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        RasterOptions {
            page_format: DEFAULT_PAGE_FORMAT,
            orientation: DEFAULT_ORIENTATION,
            margin_mm: DEFAULT_MARGIN_MM,
            raster_scale: DEFAULT_RASTER_SCALE,
            filename: "resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RasterRequest<'a> {
    html: &'a str,
    #[serde(flatten)]
    options: &'a RasterOptions,
}

/// HTTP client for the external rasterization service.
#[derive(Clone)]
pub struct RasterClient {
    client: Client,
    base_url: String,
}

impl RasterClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Converts a rendered HTML document to PDF bytes.
    pub async fn render(&self, html: &str, options: &RasterOptions) -> Result<Bytes, RasterError> {
        let url = format!("{}/render", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&RasterRequest { html, options })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RasterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        debug!(
            filename = %options.filename,
            size = bytes.len(),
            "rasterizer returned PDF"
        );
        Ok(bytes)
    }
}
