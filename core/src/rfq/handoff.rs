// core/src/rfq/handoff.rs

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Deep-link launch failure (messaging app missing, launcher rejected the
/// URI, and so on). Non-fatal on the RFQ path.
#[derive(Debug, Error)]
#[error("deep link launch failed: {0}")]
pub struct LaunchError(pub String);

/// Seam for the platform's external-URL launcher. The demo binary prints
/// the link; a mobile shell would hand it to the OS.
#[async_trait]
pub trait DeepLinkLauncher: Send + Sync {
  async fn launch(&self, url: &Url) -> Result<(), LaunchError>;
}

/// Result of the WhatsApp handoff attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
  Launched,
  /// Launch failed; `notice` is the actionable, user-facing suggestion to
  /// contact the sales team manually. The workflow does not roll back and
  /// entered data is preserved.
  Failed { notice: String },
}

impl HandoffOutcome {
  pub fn is_launched(&self) -> bool {
    matches!(self, HandoffOutcome::Launched)
  }

  pub(crate) fn failed_with_support_contact(support_whatsapp: &str) -> Self {
    HandoffOutcome::Failed {
      notice: format!(
        "Could not open WhatsApp. Please message our sales team directly at +{}.",
        support_whatsapp
      ),
    }
  }
}
