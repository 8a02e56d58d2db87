// core/src/rfq/message.rs

//! WhatsApp message body and deep-link construction.
//!
//! The format is fixed: header line, a MATERIAL REQUIREMENTS section listing
//! every cart line (product, category, brand, grade, quantity), a CUSTOMER
//! DETAILS section with the five contact fields, then a trailing note saying
//! whether the backend save also succeeded.

use crate::error::{AppError, Result};
use crate::rfq::{BackendOutcome, RfqSubmission};
use std::fmt::Write as _;
use url::Url;

/// Renders the fixed-format message body for the sales team.
pub fn format_rfq_message(rfq: &RfqSubmission, backend: &BackendOutcome) -> String {
  let mut body = String::new();
  body.push_str("New RFQ - BuildMart\n");

  body.push_str("\n*MATERIAL REQUIREMENTS*\n");
  for (index, line) in rfq.items.iter().enumerate() {
    // write! to a String cannot fail.
    let _ = write!(
      body,
      "{}. Product: {}\n   Category: {}\n   Brand: {}\n   Grade: {}\n   Quantity: {} MT\n",
      index + 1,
      line.product_name,
      line.category,
      line.brand,
      line.grade,
      line.quantity
    );
  }

  body.push_str("\n*CUSTOMER DETAILS*\n");
  let _ = write!(
    body,
    "Name: {}\nCompany: {}\nLocation: {}\nEmail: {}\nPhone: {}\n",
    rfq.customer_name, rfq.company, rfq.location, rfq.email, rfq.phone
  );

  body.push('\n');
  body.push_str(match backend {
    BackendOutcome::Saved { .. } => "Note: This request was also saved to our order system.",
    BackendOutcome::Unavailable => "Note: Order system unavailable - request sent via WhatsApp only.",
  });

  body
}

/// Builds `https://wa.me/<number>?text=<url-encoded-message>`.
pub fn whatsapp_url(support_whatsapp: &str, message: &str) -> Result<Url> {
  let mut url = Url::parse(&format!("https://wa.me/{}", support_whatsapp))
    .map_err(|e| AppError::Internal(format!("Invalid WhatsApp deep link base: {}", e)))?;
  url.query_pairs_mut().append_pair("text", message);
  Ok(url)
}
