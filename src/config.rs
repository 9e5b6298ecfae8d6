//! Runtime configuration
//!
//! Everything comes from the environment; a `.env` file is honored
//! when present (loaded in `main`).

use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PREDICTION_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-symbol CSV price histories
    pub data_dir: PathBuf,
    /// Base URL of the prediction service
    pub prediction_base_url: String,
}

impl Config {
    /// Read the configuration, falling back to defaults for anything
    /// not set.
    pub fn from_env() -> Self {
        let data_dir = env::var("STOCKVIEW_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let prediction_base_url =
            env::var("STOCKVIEW_PREDICTION_URL").unwrap_or_else(|_| DEFAULT_PREDICTION_URL.to_string());

        Self {
            data_dir: PathBuf::from(data_dir),
            prediction_base_url,
        }
    }
}
