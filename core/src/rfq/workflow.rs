// core/src/rfq/workflow.rs

use crate::cart::{CartLineItem, CartStore};
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::rfq::message::{format_rfq_message, whatsapp_url};
use crate::rfq::{BackendOutcome, ContactDetails, DeepLinkLauncher, HandoffOutcome, RfqBackend, RfqSubmission};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use url::Url;

/// Buyer-facing stages of one RFQ submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfqStage {
  /// Entry stage once the cart is non-empty; the buyer reviews line items.
  ReviewCart,
  /// Collecting the five mandatory contact fields.
  CustomerDetails,
  /// Validation passed; delivery attempted; awaiting the buyer's dismissal
  /// of the success acknowledgment. No user-facing cancel from here.
  Submitting,
  /// Acknowledged. Contact fields reset, cart cleared.
  Done,
}

/// What the workflow hands back after a submission attempt. The two channel
/// outcomes stay independent values; [`Acknowledgment::from_outcomes`] is the
/// single policy point that turns them into user-visible copy.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
  pub backend: BackendOutcome,
  pub handoff: HandoffOutcome,
  /// The constructed deep link, always present whether or not the launch
  /// attempt worked (a UI can offer it for manual retry).
  pub whatsapp_url: Url,
  pub acknowledgment: Acknowledgment,
  pub submitted_at: DateTime<Utc>,
}

/// User-visible result copy for the success toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
  /// Always a success message: from the buyer's perspective "submitted"
  /// means the WhatsApp handoff was attempted, not that the backend
  /// recorded it.
  pub success_copy: String,
  /// Distinct, non-fatal notice when the deep-link launch itself failed.
  pub handoff_notice: Option<String>,
}

impl Acknowledgment {
  /// The fixed delivery policy: report success based on the handoff attempt,
  /// fold the backend result into copy only.
  pub fn from_outcomes(backend: &BackendOutcome, handoff: &HandoffOutcome) -> Self {
    let success_copy = match backend {
      BackendOutcome::Saved { message: Some(msg) } => {
        format!("Quote request submitted! {}", msg)
      }
      BackendOutcome::Saved { message: None } => {
        "Quote request submitted! Our sales team will get back to you shortly.".to_string()
      }
      BackendOutcome::Unavailable => {
        "Quote request sent to our sales team on WhatsApp. We will get back to you shortly.".to_string()
      }
    };
    let handoff_notice = match handoff {
      HandoffOutcome::Launched => None,
      HandoffOutcome::Failed { notice } => Some(notice.clone()),
    };
    Self {
      success_copy,
      handoff_notice,
    }
  }
}

/// Two-step cart-to-RFQ state machine.
///
/// Stage transitions: `ReviewCart -> CustomerDetails -> Submitting -> Done`,
/// with a lossless backward transition from `CustomerDetails` to
/// `ReviewCart` (entered contact fields are retained in memory until a
/// submission is acknowledged).
pub struct RfqWorkflow {
  cart: Arc<CartStore>,
  backend: Arc<dyn RfqBackend>,
  launcher: Arc<dyn DeepLinkLauncher>,
  support_whatsapp: String,
  contact: ContactDetails,
  stage: RfqStage,
}

impl RfqWorkflow {
  pub fn new(
    cart: Arc<CartStore>,
    backend: Arc<dyn RfqBackend>,
    launcher: Arc<dyn DeepLinkLauncher>,
    config: &AppConfig,
  ) -> Self {
    Self {
      cart,
      backend,
      launcher,
      support_whatsapp: config.support_whatsapp.clone(),
      contact: ContactDetails::default(),
      stage: RfqStage::ReviewCart,
    }
  }

  pub fn stage(&self) -> RfqStage {
    self.stage
  }

  pub fn contact(&self) -> &ContactDetails {
    &self.contact
  }

  /// Editable while collecting details; retained across backward
  /// transitions.
  pub fn contact_mut(&mut self) -> &mut ContactDetails {
    &mut self.contact
  }

  /// Enters (or re-enters) the review stage. Requires a non-empty cart;
  /// returns the line items for display.
  pub async fn begin(&mut self) -> Result<Vec<CartLineItem>> {
    let items = self.cart.items().await;
    if items.is_empty() {
      return Err(AppError::Validation(
        "Your cart is empty. Add materials before requesting a quote.".to_string(),
      ));
    }
    self.stage = RfqStage::ReviewCart;
    Ok(items)
  }

  /// The buyer explicitly advances past the cart review.
  pub fn proceed_to_details(&mut self) -> Result<()> {
    if self.stage != RfqStage::ReviewCart {
      return Err(AppError::Internal(format!(
        "proceed_to_details called in stage {:?}",
        self.stage
      )));
    }
    self.stage = RfqStage::CustomerDetails;
    Ok(())
  }

  /// Backward transition; already-entered contact fields are kept.
  pub fn back_to_review(&mut self) {
    if self.stage == RfqStage::CustomerDetails {
      self.stage = RfqStage::ReviewCart;
    }
  }

  /// Validates, assembles, and delivers the RFQ over both channels.
  ///
  /// On a validation failure nothing is attempted: no backend call, no
  /// message construction, and the stage stays at `CustomerDetails`.
  /// Otherwise the backend POST is awaited (outcome never gates anything),
  /// the WhatsApp deep link is unconditionally constructed, and the launch
  /// is attempted. Runs to completion once started.
  pub async fn submit(&mut self) -> Result<SubmissionReceipt> {
    if self.stage != RfqStage::CustomerDetails {
      return Err(AppError::Internal(format!("submit called in stage {:?}", self.stage)));
    }
    if let Some(missing) = self.contact.first_missing() {
      return Err(AppError::Validation(missing.requirement_message().to_string()));
    }

    let items = self.cart.items().await;
    if items.is_empty() {
      // Cart emptied since review (edge case); back to the entry stage.
      self.stage = RfqStage::ReviewCart;
      return Err(AppError::Validation(
        "Your cart is empty. Add materials before requesting a quote.".to_string(),
      ));
    }

    self.stage = RfqStage::Submitting;
    let rfq = RfqSubmission::assemble(&self.contact, items);
    tracing::info!(total_items = rfq.total_items(), company = %rfq.company, "Submitting RFQ.");

    // Channel A: backend POST, awaited but never fatal.
    let backend = self.backend.submit(&rfq).await;

    // Channel B: WhatsApp handoff, attempted regardless of channel A.
    let body = format_rfq_message(&rfq, &backend);
    let url = whatsapp_url(&self.support_whatsapp, &body)?;
    let handoff = match self.launcher.launch(&url).await {
      Ok(()) => HandoffOutcome::Launched,
      Err(e) => {
        tracing::warn!(error = %e, "WhatsApp handoff launch failed.");
        HandoffOutcome::failed_with_support_contact(&self.support_whatsapp)
      }
    };

    let acknowledgment = Acknowledgment::from_outcomes(&backend, &handoff);
    Ok(SubmissionReceipt {
      backend,
      handoff,
      whatsapp_url: url,
      acknowledgment,
      submitted_at: rfq.submitted_at,
    })
  }

  /// The buyer dismissed the success acknowledgment: clear the cart, reset
  /// the contact fields, enter `Done`. Returning to the catalog root is the
  /// caller's navigation concern.
  pub async fn acknowledge(&mut self) -> Result<()> {
    if self.stage != RfqStage::Submitting {
      return Err(AppError::Internal(format!(
        "acknowledge called in stage {:?}",
        self.stage
      )));
    }
    self.cart.clear().await?;
    self.contact.reset();
    self.stage = RfqStage::Done;
    tracing::info!("RFQ acknowledged; cart cleared and contact fields reset.");
    Ok(())
  }
}

impl std::fmt::Debug for RfqWorkflow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RfqWorkflow").field("stage", &self.stage).finish()
  }
}
