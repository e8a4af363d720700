use serde::Deserialize;
use anyhow::Result;
use dotenvy::dotenv;

/// How many data rows the preview shows when PREVIEW_ROWS is not set.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dataset_url: String,
    pub preview_rows: usize,
    pub max_file_size: usize,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        // The dataset location is the one required setting
        let dataset_url = std::env::var("DATASET_URL")
            .map_err(|e| anyhow::anyhow!("Failed to load DATASET_URL: {}", e))?;

        let preview_rows = match std::env::var("PREVIEW_ROWS") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("Invalid PREVIEW_ROWS value {:?}: {}", raw, e))?,
            Err(_) => DEFAULT_PREVIEW_ROWS,
        };

        Ok(Config {
            dataset_url,
            preview_rows,
            max_file_size: 10 * 1024 * 1024, // 10MB
        })
    }
}
