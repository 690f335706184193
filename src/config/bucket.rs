//! Cloud bucket configuration.

/// Where the dashboard CSV objects live.
pub struct BucketConfig {
    /// Public object-store endpoint (no trailing slash).
    pub endpoint: &'static str,
    /// Bucket used when neither the CLI flag nor the env var is set.
    pub default_bucket: &'static str,
    /// Environment variable that overrides the bucket name.
    pub env_var: &'static str,

    // The three fixed objects fetched at startup
    pub tickers_object: &'static str,
    pub portfolio_object: &'static str,
    pub plots_object: &'static str,
}

pub const BUCKET: BucketConfig = BucketConfig {
    endpoint: "https://storage.googleapis.com",
    default_bucket: "pockets-data",
    env_var: "POCKETS_BUCKET",

    tickers_object: "tickers.csv",
    portfolio_object: "portfolio.csv",
    plots_object: "plot_json.csv",
};

impl BucketConfig {
    /// Bucket name resolution: CLI flag beats env var beats default.
    pub fn resolve_bucket(&self, cli_override: Option<&str>) -> String {
        if let Some(bucket) = cli_override {
            return bucket.to_string();
        }
        std::env::var(self.env_var).unwrap_or_else(|_| self.default_bucket.to_string())
    }

    pub fn bucket_base_url(&self, bucket: &str) -> String {
        format!("{}/{}", self.endpoint, bucket)
    }

    pub fn startup_objects(&self) -> [&'static str; 3] {
        [
            self.tickers_object,
            self.portfolio_object,
            self.plots_object,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_default() {
        assert_eq!(BUCKET.resolve_bucket(Some("my-bucket")), "my-bucket");
        assert_eq!(BUCKET.resolve_bucket(None), BUCKET.default_bucket);
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        let url = BUCKET.bucket_base_url("pockets-data");
        assert_eq!(url, "https://storage.googleapis.com/pockets-data");
    }
}
