// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use buildmart::{
  AppConfig, BackendOutcome, CartLineItem, CartLineItemInput, CartStore, CartSync, ContactDetails, DeepLinkLauncher,
  ImageRef, LaunchError, RfqBackend, RfqSubmission, SyncError,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;
use url::Url;

// --- Tracing setup (call at the top of a test when debugging) ---

pub fn setup_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

// --- Fixtures ---

pub fn test_config(storage_dir: &TempDir) -> AppConfig {
  AppConfig {
    cart_storage_dir: storage_dir.path().to_path_buf(),
    ..AppConfig::default()
  }
}

/// Store backed by a fresh temp dir. Keep the `TempDir` alive for the test's
/// duration or the blob vanishes underneath the store.
pub fn temp_store(sync: Arc<dyn CartSync>) -> (TempDir, Arc<CartStore>) {
  let dir = TempDir::new().expect("temp dir");
  let store = Arc::new(CartStore::new(dir.path(), sync));
  (dir, store)
}

pub fn tmt_input(quantity: u32) -> CartLineItemInput {
  CartLineItemInput {
    product_id: "tmt-bars-fe500d".to_string(),
    product_name: "TMT Bars Fe 500D".to_string(),
    category: "Steel".to_string(),
    brand: "Tata Steel".to_string(),
    grade: "Fe 500D".to_string(),
    quantity,
    image: ImageRef::Bundled("assets/products/tmt_bars.png".to_string()),
  }
}

pub fn cement_input(quantity: u32) -> CartLineItemInput {
  CartLineItemInput {
    product_id: "opc-cement-53".to_string(),
    product_name: "OPC Cement 53 Grade".to_string(),
    category: "Cement".to_string(),
    brand: "UltraTech".to_string(),
    grade: "OPC 53".to_string(),
    quantity,
    image: ImageRef::None,
  }
}

pub fn full_contact() -> ContactDetails {
  ContactDetails {
    customer_name: "A. Rao".to_string(),
    company: "Rao Builders".to_string(),
    location: "Pune".to_string(),
    email: "a@raobuilders.in".to_string(),
    phone: "9999999999".to_string(),
  }
}

// --- Recording doubles for the three external seams ---

/// Sync double that forwards every mirrored snapshot over a channel, so a
/// test can await the fire-and-forget task's input without sleeping.
pub struct RecordingSync {
  tx: mpsc::UnboundedSender<Vec<CartLineItem>>,
}

pub fn recording_sync() -> (Arc<RecordingSync>, mpsc::UnboundedReceiver<Vec<CartLineItem>>) {
  let (tx, rx) = mpsc::unbounded_channel();
  (Arc::new(RecordingSync { tx }), rx)
}

#[async_trait]
impl CartSync for RecordingSync {
  async fn sync(&self, items: &[CartLineItem]) -> Result<(), SyncError> {
    let _ = self.tx.send(items.to_vec());
    Ok(())
  }
}

/// Sync double that always fails, for asserting failures stay invisible.
pub struct FailingSync {
  pub calls: AtomicUsize,
}

impl FailingSync {
  pub fn new() -> Arc<Self> {
    Arc::new(Self { calls: AtomicUsize::new(0) })
  }
}

#[async_trait]
impl CartSync for FailingSync {
  async fn sync(&self, _items: &[CartLineItem]) -> Result<(), SyncError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(SyncError::Network("connection refused".to_string()))
  }
}

/// Backend double returning a scripted outcome and recording every payload.
pub struct ScriptedBackend {
  outcome: BackendOutcome,
  pub submissions: Mutex<Vec<RfqSubmission>>,
}

impl ScriptedBackend {
  pub fn saved() -> Arc<Self> {
    Arc::new(Self {
      outcome: BackendOutcome::Saved { message: None },
      submissions: Mutex::new(Vec::new()),
    })
  }

  pub fn saved_with_message(message: &str) -> Arc<Self> {
    Arc::new(Self {
      outcome: BackendOutcome::Saved {
        message: Some(message.to_string()),
      },
      submissions: Mutex::new(Vec::new()),
    })
  }

  pub fn unavailable() -> Arc<Self> {
    Arc::new(Self {
      outcome: BackendOutcome::Unavailable,
      submissions: Mutex::new(Vec::new()),
    })
  }

  pub fn call_count(&self) -> usize {
    self.submissions.lock().len()
  }
}

#[async_trait]
impl RfqBackend for ScriptedBackend {
  async fn submit(&self, rfq: &RfqSubmission) -> BackendOutcome {
    self.submissions.lock().push(rfq.clone());
    self.outcome.clone()
  }
}

/// Launcher double: records every launched URL, optionally failing to
/// simulate a missing messaging app.
pub struct RecordingLauncher {
  fail: bool,
  pub launched: Mutex<Vec<Url>>,
}

impl RecordingLauncher {
  pub fn working() -> Arc<Self> {
    Arc::new(Self {
      fail: false,
      launched: Mutex::new(Vec::new()),
    })
  }

  pub fn broken() -> Arc<Self> {
    Arc::new(Self {
      fail: true,
      launched: Mutex::new(Vec::new()),
    })
  }

  pub fn launch_count(&self) -> usize {
    self.launched.lock().len()
  }

  pub fn last_url(&self) -> Option<Url> {
    self.launched.lock().last().cloned()
  }
}

#[async_trait]
impl DeepLinkLauncher for RecordingLauncher {
  async fn launch(&self, url: &Url) -> Result<(), LaunchError> {
    self.launched.lock().push(url.clone());
    if self.fail {
      return Err(LaunchError("no handler registered for wa.me links".to_string()));
    }
    Ok(())
  }
}
