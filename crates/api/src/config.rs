use std::path::PathBuf;

use ordinal_frame_inscriptions::config::ApiClientConfig;
use ordinal_frame_store::documents::DEFAULT_SLIDESHOW_INTERVAL_SECS;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound HTTP request timeout in seconds (default: `120`).
    ///
    /// Must cover a full paginated fetch including retries.
    pub request_timeout_secs: u64,
    /// Reported by `/api/health` (default: `true`).
    pub debug: bool,
    /// Root directory for persisted state (default: `./ordinals`).
    pub data_dir: PathBuf,
    /// Interval for a selection document created from scratch (default: `30`).
    pub default_slideshow_interval: u64,
    /// Remote inscriptions index settings.
    pub upstream: ApiClientConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `5000`                  |
    /// | `CORS_ORIGINS`               | `http://localhost:5000` |
    /// | `REQUEST_TIMEOUT_SECS`       | `120`                   |
    /// | `DEBUG`                      | `true`                  |
    /// | `DATA_DIR`                   | `./ordinals`            |
    /// | `DEFAULT_SLIDESHOW_INTERVAL` | `30`                    |
    ///
    /// Upstream settings are read by [`ApiClientConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let debug = std::env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let data_dir: PathBuf = std::env::var("DATA_DIR")
            .unwrap_or_else(|_| "./ordinals".into())
            .into();

        let default_slideshow_interval: u64 = std::env::var("DEFAULT_SLIDESHOW_INTERVAL")
            .unwrap_or_else(|_| DEFAULT_SLIDESHOW_INTERVAL_SECS.to_string())
            .parse()
            .expect("DEFAULT_SLIDESHOW_INTERVAL must be a valid u64");

        let upstream = ApiClientConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            debug,
            data_dir,
            default_slideshow_interval,
            upstream,
        }
    }

    /// Directory of the upstream response cache.
    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cached")
    }

    /// Directory holding `ordinals.json` and `selection.json`.
    pub fn metadata_dir(&self) -> PathBuf {
        self.data_dir.join("metadata")
    }

    /// Directory handed to the disk cache itself.
    pub fn api_cache_dir(&self) -> PathBuf {
        self.cache_dir().join("api_cache")
    }
}
