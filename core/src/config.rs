// core/src/config.rs

use crate::error::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend host used when `API_BASE_URL` is not supplied at build/run
/// time. The backend is best-effort infrastructure; an unreachable default is
/// not an error anywhere in the workflow.
pub const DEFAULT_API_BASE_URL: &str = "https://api.buildmart.in";

/// Fixed sales-team WhatsApp contact. Digits only, country code included, as
/// required by the `wa.me` URL scheme.
pub const DEFAULT_SUPPORT_WHATSAPP: &str = "919876543210";

const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 4_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL for the RFQ backend and the cart sync mirror.
  pub api_base_url: String,
  /// Digits-only WhatsApp number of the sales team.
  pub support_whatsapp: String,
  /// Directory holding the persisted cart blob.
  pub cart_storage_dir: PathBuf,
  /// Client-side timeout for every backend call, so a slow backend never
  /// meaningfully delays the WhatsApp handoff.
  pub backend_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    // Trailing slashes would double up when endpoints are appended.
    let api_base_url = api_base_url.trim_end_matches('/').to_string();

    let support_whatsapp = env::var("SUPPORT_WHATSAPP").unwrap_or_else(|_| DEFAULT_SUPPORT_WHATSAPP.to_string());
    if !support_whatsapp.chars().all(|c| c.is_ascii_digit()) {
      return Err(AppError::Config(format!(
        "SUPPORT_WHATSAPP must be digits only (country code included), got '{}'",
        support_whatsapp
      )));
    }

    let cart_storage_dir = env::var("CART_STORAGE_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(".buildmart"));

    let backend_timeout_ms = match env::var("BACKEND_TIMEOUT_MS") {
      Ok(raw) => raw
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid BACKEND_TIMEOUT_MS: {}", e)))?,
      Err(_) => DEFAULT_BACKEND_TIMEOUT_MS,
    };

    tracing::info!(
      api_base_url = %api_base_url,
      cart_storage_dir = %cart_storage_dir.display(),
      backend_timeout_ms,
      "Application configuration loaded."
    );

    Ok(Self {
      api_base_url,
      support_whatsapp,
      cart_storage_dir,
      backend_timeout: Duration::from_millis(backend_timeout_ms),
    })
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      support_whatsapp: DEFAULT_SUPPORT_WHATSAPP.to_string(),
      cart_storage_dir: PathBuf::from(".buildmart"),
      backend_timeout: Duration::from_millis(DEFAULT_BACKEND_TIMEOUT_MS),
    }
  }
}
