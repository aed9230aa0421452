use crate::models::RawListing;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// JSON file holding the last successful scrape
#[derive(Debug, Clone)]
pub struct ListingCache {
    path: PathBuf,
}

impl ListingCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cached listings; a missing cache file reads as empty
    pub async fn load(&self) -> Result<Vec<RawListing>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No cache file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read cache {}", self.path.display()))
            }
        };

        let listings: Vec<RawListing> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse cache {}", self.path.display()))?;
        debug!("Loaded {} cached listings", listings.len());
        Ok(listings)
    }

    /// Overwrite the cache. An empty scrape leaves the previous cache alone.
    pub async fn replace(&self, listings: &[RawListing]) -> Result<()> {
        if listings.is_empty() {
            warn!("⚠️ No listings to cache, keeping previous cache");
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(listings)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write cache {}", self.path.display()))?;
        info!("💾 Saved {} listings to {}", listings.len(), self.path.display());
        Ok(())
    }
}
