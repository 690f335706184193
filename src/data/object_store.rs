use anyhow::{Context, Result, ensure};

use crate::config::{BUCKET, DF};
use crate::data::csv_io::parse_price_series;
use crate::domain::Ticker;
use crate::models::PriceSeries;

/// Read-only client for the cloud bucket holding the dashboard CSVs.
/// One GET per object, no retry, no caching; the first failure propagates.
#[derive(Debug, Clone)]
pub struct BucketClient {
    base_url: String,
    client: reqwest::Client,
}

impl BucketClient {
    pub fn new(bucket: &str) -> Self {
        Self::with_base_url(BUCKET.bucket_base_url(bucket))
    }

    /// Point the client at an arbitrary endpoint (tests use this).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Download a named object as text.
    pub async fn fetch_object(&self, name: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, name);
        if DF.log_fetch {
            log::info!("GET {}", url);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request for object '{}' failed", name))?;
        ensure!(
            response.status().is_success(),
            "object '{}' fetch failed: HTTP {}",
            name,
            response.status()
        );

        response
            .text()
            .await
            .with_context(|| format!("reading body of object '{}' failed", name))
    }

    /// Download and parse `<ticker>.csv`.
    pub async fn fetch_price_series(&self, ticker: &Ticker) -> Result<PriceSeries> {
        let body = self.fetch_object(&ticker.object_name()).await?;
        parse_price_series(ticker.clone(), &body)
    }
}

impl Default for BucketClient {
    fn default() -> Self {
        Self::new(BUCKET.default_bucket)
    }
}
