// core/src/sync.rs

//! Best-effort cart mirror.
//!
//! The backend mirror is record-keeping only; the authoritative delivery
//! channel for an RFQ is the WhatsApp handoff. The local workflow is fully
//! correct offline, so nothing here retries, backs off, or surfaces to the
//! user. The cart store spawns `sync` as a detached task and discards the
//! result.

use crate::cart::CartLineItem;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
  #[error("network error: {0}")]
  Network(String),
  #[error("server rejected sync: HTTP {0}")]
  Api(u16),
}

/// Seam for the cart mirror. Production uses [`HttpCartSync`]; tests plug in
/// recording doubles.
#[async_trait]
pub trait CartSync: Send + Sync {
  async fn sync(&self, items: &[CartLineItem]) -> Result<(), SyncError>;
}

/// POSTs the full post-mutation item list to the backend mirror endpoint.
pub struct HttpCartSync {
  client: reqwest::Client,
  endpoint: String,
}

impl HttpCartSync {
  pub fn new(config: &AppConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.backend_timeout)
      .build()
      .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self {
      client,
      endpoint: format!("{}/carts/sync", config.api_base_url),
    })
  }
}

#[async_trait]
impl CartSync for HttpCartSync {
  async fn sync(&self, items: &[CartLineItem]) -> Result<(), SyncError> {
    let resp = self
      .client
      .post(&self.endpoint)
      .json(&items)
      .send()
      .await
      .map_err(|e| SyncError::Network(e.to_string()))?;
    if !resp.status().is_success() {
      return Err(SyncError::Api(resp.status().as_u16()));
    }
    tracing::debug!(count = items.len(), "Cart mirrored to backend.");
    Ok(())
  }
}

/// No-op mirror for offline wiring and demos.
#[derive(Debug, Default)]
pub struct NoopSync;

#[async_trait]
impl CartSync for NoopSync {
  async fn sync(&self, _items: &[CartLineItem]) -> Result<(), SyncError> {
    Ok(())
  }
}
