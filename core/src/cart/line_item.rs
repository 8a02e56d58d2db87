// core/src/cart/line_item.rs

use crate::catalog::ImageRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One staged product selection, snapshotted at add-time.
///
/// Product name, category, brand and grade are copied out of the catalog,
/// not live-linked, so a later catalog change never retroactively alters a
/// submitted line. A line is immutable once created; the only mutation is
/// deletion (the buyer deletes and re-adds to change quantity or grade).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
  /// Unique within the store; assigned at creation.
  pub id: Uuid,
  /// Reference into the immutable catalog (non-owning).
  pub product_id: String,
  pub product_name: String,
  pub category: String,
  pub brand: String,
  pub grade: String,
  /// Metric tons. Always positive.
  pub quantity: u32,
  /// Carried through unchanged for display; never interpreted here.
  pub image: ImageRef,
  pub created_at: DateTime<Utc>,
}

/// Id-less, timestamp-less input shape produced by the detail selector.
#[derive(Debug, Clone)]
pub struct CartLineItemInput {
  pub product_id: String,
  pub product_name: String,
  pub category: String,
  pub brand: String,
  pub grade: String,
  pub quantity: u32,
  pub image: ImageRef,
}

impl CartLineItemInput {
  /// Finalizes the input into a stored line, assigning id and timestamp.
  pub(crate) fn into_line_item(self) -> CartLineItem {
    CartLineItem {
      id: Uuid::new_v4(),
      product_id: self.product_id,
      product_name: self.product_name,
      category: self.category,
      brand: self.brand,
      grade: self.grade,
      quantity: self.quantity,
      image: self.image,
      created_at: Utc::now(),
    }
  }
}
