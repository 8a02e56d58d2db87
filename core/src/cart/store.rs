// core/src/cart/store.rs

use crate::cart::{CartLineItem, CartLineItemInput};
use crate::error::{AppError, Result};
use crate::sync::CartSync;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Fixed name of the single persisted blob: a JSON array of line items.
/// No schema versioning; the file is treated as one mutable value.
pub const CART_BLOB_FILE: &str = "cart_items.json";

/// Durable, app-local store for the current cart contents.
///
/// Every operation is a read-modify-write of one JSON blob, serialized by a
/// single async mutex so a remove that starts after an add's persistence has
/// completed always sees the added line. Each operation fully awaits its own
/// write before returning.
///
/// Failure semantics: reads degrade silently to an empty list (an empty cart
/// is a safe default); writes propagate so the caller can show a "failed to
/// update cart" notice, and the prior blob is left untouched.
pub struct CartStore {
  blob_path: PathBuf,
  blob_lock: Mutex<()>,
  sync: Arc<dyn CartSync>,
}

impl CartStore {
  /// Opens (or lazily creates) the store under `storage_dir`.
  pub fn new(storage_dir: impl AsRef<Path>, sync: Arc<dyn CartSync>) -> Self {
    Self {
      blob_path: storage_dir.as_ref().join(CART_BLOB_FILE),
      blob_lock: Mutex::new(()),
      sync,
    }
  }

  /// Full current list, insertion order preserved. Never fails observably:
  /// a missing, unreadable or corrupt blob yields an empty list.
  pub async fn items(&self) -> Vec<CartLineItem> {
    let _guard = self.blob_lock.lock().await;
    self.read_blob().await
  }

  /// Convenience read for UI badges; always consistent with `items()` at the
  /// same instant because there is no separate counter to drift.
  pub async fn count(&self) -> usize {
    self.items().await.len()
  }

  /// Assigns id and creation timestamp, appends, persists the whole list,
  /// then triggers the remote sync without waiting for it. Returns the
  /// updated list.
  pub async fn add_item(&self, input: CartLineItemInput) -> Result<Vec<CartLineItem>> {
    let _guard = self.blob_lock.lock().await;
    let mut items = self.read_blob().await;
    let line = input.into_line_item();
    tracing::info!(line_id = %line.id, product = %line.product_name, quantity = line.quantity, "Adding cart line.");
    items.push(line);
    self.write_blob(&items).await?;
    self.trigger_sync(items.clone());
    Ok(items)
  }

  /// Filters out the line with `id` and persists the remainder. A missing id
  /// is a no-op, not an error; the blob is rewritten either way.
  pub async fn remove_item(&self, id: Uuid) -> Result<Vec<CartLineItem>> {
    let _guard = self.blob_lock.lock().await;
    let mut items = self.read_blob().await;
    let before = items.len();
    items.retain(|line| line.id != id);
    if items.len() == before {
      tracing::debug!(line_id = %id, "Remove requested for absent line; no-op.");
    }
    self.write_blob(&items).await?;
    self.trigger_sync(items.clone());
    Ok(items)
  }

  /// Deletes the entire stored collection. Used only after an RFQ has been
  /// acknowledged by the user.
  pub async fn clear(&self) -> Result<()> {
    let _guard = self.blob_lock.lock().await;
    match tokio::fs::remove_file(&self.blob_path).await {
      Ok(()) => {
        tracing::info!("Cart cleared.");
        Ok(())
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(AppError::storage(e)),
    }
  }

  // Caller must hold `blob_lock`.
  async fn read_blob(&self) -> Vec<CartLineItem> {
    let raw = match tokio::fs::read(&self.blob_path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
      Err(e) => {
        tracing::warn!(error = %e, path = %self.blob_path.display(), "Cart blob unreadable; treating cart as empty.");
        return Vec::new();
      }
    };
    match serde_json::from_slice(&raw) {
      Ok(items) => items,
      Err(e) => {
        tracing::warn!(error = %e, "Cart blob corrupt; treating cart as empty.");
        Vec::new()
      }
    }
  }

  // Caller must hold `blob_lock`. Writes a sibling temp file and renames it
  // over the blob, so a failed write leaves the prior state intact.
  async fn write_blob(&self, items: &[CartLineItem]) -> Result<()> {
    if let Some(dir) = self.blob_path.parent() {
      tokio::fs::create_dir_all(dir).await.map_err(AppError::storage)?;
    }
    let raw = serde_json::to_vec_pretty(items).map_err(AppError::storage)?;
    let tmp_path = self.blob_path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, &raw).await.map_err(AppError::storage)?;
    tokio::fs::rename(&tmp_path, &self.blob_path)
      .await
      .map_err(AppError::storage)?;
    Ok(())
  }

  // Fire-and-forget mirror of the post-write state. The task is detached;
  // its error is logged and discarded, never reported to the mutation that
  // triggered it.
  fn trigger_sync(&self, items: Vec<CartLineItem>) {
    let sync = Arc::clone(&self.sync);
    tokio::spawn(async move {
      if let Err(e) = sync.sync(&items).await {
        tracing::debug!(error = %e, "Cart sync mirror failed; ignored.");
      }
    });
  }
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore").field("blob_path", &self.blob_path).finish()
  }
}
