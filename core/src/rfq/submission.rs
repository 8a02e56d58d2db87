// core/src/rfq/submission.rs

use crate::cart::CartLineItem;
use crate::rfq::ContactDetails;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The assembled RFQ payload.
///
/// Owns a copy of the cart lines; the cart itself continues to exist until
/// the buyer acknowledges the submission. `total_items` is kept as a field
/// for backend convenience but is only ever derived from `items.len()` in
/// the one constructor, so it cannot diverge.
#[derive(Debug, Clone, Serialize)]
pub struct RfqSubmission {
  pub customer_name: String,
  pub company: String,
  pub location: String,
  pub email: String,
  pub phone: String,
  pub items: Vec<CartLineItem>,
  total_items: usize,
  /// Timestamp of the submission attempt, not of confirmed delivery.
  pub submitted_at: DateTime<Utc>,
}

impl RfqSubmission {
  /// Assembles the payload from trimmed contact fields and a snapshot of the
  /// current cart contents, in cart order.
  pub fn assemble(contact: &ContactDetails, items: Vec<CartLineItem>) -> Self {
    let contact = contact.trimmed();
    let total_items = items.len();
    Self {
      customer_name: contact.customer_name,
      company: contact.company,
      location: contact.location,
      email: contact.email,
      phone: contact.phone,
      items,
      total_items,
      submitted_at: Utc::now(),
    }
  }

  pub fn total_items(&self) -> usize {
    self.total_items
  }
}
