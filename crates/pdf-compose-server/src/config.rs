use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_OUTPUT_DIR: &str = "generated_pdfs";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Service configuration loaded from environment variables.
/// Every setting has a default; a `.env` file is read if present.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Directory holding composed PDFs until they are downloaded
    pub output_dir: PathBuf,
    /// Upper bound on a whole upload request body
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            bind_addr: env_or("PDFC_BIND", DEFAULT_BIND)
                .parse()
                .context("PDFC_BIND must be a socket address such as 0.0.0.0:8080")?,
            output_dir: PathBuf::from(env_or("PDFC_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
            max_upload_bytes: match std::env::var("PDFC_MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse()
                    .context("PDFC_MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Defaults with a custom output directory
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            output_dir: output_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rust_log: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
