// core/src/rfq/backend.rs

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::rfq::RfqSubmission;
use async_trait::async_trait;
use serde::Deserialize;

/// Result of the backend RFQ POST.
///
/// Unavailability is a value, not an error: network failure, timeout and
/// non-2xx all collapse to `Unavailable`, which never fails the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome {
  /// 2xx response. `message`, if the server sent one, is surfaced only in
  /// the success-toast copy, never used to gate control flow.
  Saved { message: Option<String> },
  Unavailable,
}

impl BackendOutcome {
  pub fn is_saved(&self) -> bool {
    matches!(self, BackendOutcome::Saved { .. })
  }
}

/// Seam for the RFQ backend. Production uses [`HttpRfqBackend`]; tests plug
/// in scripted doubles.
#[async_trait]
pub trait RfqBackend: Send + Sync {
  async fn submit(&self, rfq: &RfqSubmission) -> BackendOutcome;
}

/// Optional `success`/`message` shape some backend deployments return.
#[derive(Debug, Deserialize)]
struct BackendAck {
  #[allow(dead_code)]
  success: Option<bool>,
  message: Option<String>,
}

/// POSTs the RFQ payload to the canonical `{API_BASE_URL}/rfqs` endpoint
/// under the configured client-side timeout.
pub struct HttpRfqBackend {
  client: reqwest::Client,
  endpoint: String,
}

impl HttpRfqBackend {
  pub fn new(config: &AppConfig) -> Result<Self> {
    // The timeout keeps a slow or unreachable backend from meaningfully
    // delaying the WhatsApp handoff step.
    let client = reqwest::Client::builder()
      .timeout(config.backend_timeout)
      .build()
      .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self {
      client,
      endpoint: format!("{}/rfqs", config.api_base_url),
    })
  }
}

#[async_trait]
impl RfqBackend for HttpRfqBackend {
  async fn submit(&self, rfq: &RfqSubmission) -> BackendOutcome {
    let resp = match self.client.post(&self.endpoint).json(rfq).send().await {
      Ok(resp) => resp,
      Err(e) => {
        tracing::warn!(error = %e, "RFQ backend unreachable; continuing without it.");
        return BackendOutcome::Unavailable;
      }
    };
    if !resp.status().is_success() {
      tracing::warn!(status = %resp.status(), "RFQ backend returned non-2xx; continuing without it.");
      return BackendOutcome::Unavailable;
    }
    let message = resp.json::<BackendAck>().await.ok().and_then(|ack| ack.message);
    tracing::info!("RFQ recorded by backend.");
    BackendOutcome::Saved { message }
  }
}
