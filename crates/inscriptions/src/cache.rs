//! Disk-backed key-value cache with per-entry TTL.
//!
//! Each entry is one JSON file named by the SHA-256 of its key, so keys may
//! contain any characters. The format is private to this module.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use ordinal_frame_core::error::CoreError;
use ordinal_frame_core::fs::{read_json, write_json_atomic};
use ordinal_frame_core::hashing::sha256_hex;

/// On-disk envelope for a cached value.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    expires_at: DateTime<Utc>,
    value: serde_json::Value,
}

/// TTL cache persisted under a single directory.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Open (creating if needed) a cache rooted at `dir`.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Look up `key`. Expired entries are deleted and reported as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        let path = self.entry_path(key);
        let Some(entry) = read_json::<CacheEntry>(&path).await? else {
            return Ok(None);
        };

        if entry.key != key {
            return Ok(None);
        }

        if entry.expires_at <= Utc::now() {
            tracing::debug!(key, "Cache entry expired");
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!(key, error = %e, "Failed to remove expired cache entry");
            }
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(entry.value)?))
    }

    /// Store `value` under `key` for `ttl`.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CoreError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| CoreError::Internal(format!("cache TTL out of range: {e}")))?;
        let entry = CacheEntry {
            key: key.to_string(),
            expires_at: Utc::now() + ttl,
            value: serde_json::to_value(value)?,
        };
        write_json_atomic(&self.entry_path(key), &entry).await
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sha256_hex(key.as_bytes())))
    }
}
