// core/src/state.rs

use crate::auth::AuthGate;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::Result;
use crate::rfq::{DeepLinkLauncher, HttpRfqBackend, RfqBackend, RfqWorkflow};
use crate::sync::{CartSync, HttpCartSync};
use std::sync::Arc;

/// Application composition root.
///
/// Exactly one `CartStore` exists per app, constructed here and handed out
/// by reference — the single-source-of-truth invariant lives in this wiring,
/// not in global statics.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub catalog: Arc<Catalog>,
  pub auth: Arc<AuthGate>,
  pub cart: Arc<CartStore>,
  pub backend: Arc<dyn RfqBackend>,
  pub launcher: Arc<dyn DeepLinkLauncher>,
}

impl AppState {
  /// Wires the state from explicit parts. Tests and demos use this to plug
  /// in doubles at the three external seams.
  pub fn new(
    config: AppConfig,
    sync: Arc<dyn CartSync>,
    backend: Arc<dyn RfqBackend>,
    launcher: Arc<dyn DeepLinkLauncher>,
  ) -> Self {
    let cart = Arc::new(CartStore::new(&config.cart_storage_dir, sync));
    Self {
      config: Arc::new(config),
      catalog: Arc::new(Catalog::bundled()),
      auth: Arc::new(AuthGate::new()),
      cart,
      backend,
      launcher,
    }
  }

  /// Production wiring: HTTP sync mirror and HTTP RFQ backend from config.
  pub fn with_http(config: AppConfig, launcher: Arc<dyn DeepLinkLauncher>) -> Result<Self> {
    let sync: Arc<dyn CartSync> = Arc::new(HttpCartSync::new(&config)?);
    let backend: Arc<dyn RfqBackend> = Arc::new(HttpRfqBackend::new(&config)?);
    Ok(Self::new(config, sync, backend, launcher))
  }

  /// Starts a fresh RFQ workflow over this state's cart and channels.
  pub fn rfq_workflow(&self) -> RfqWorkflow {
    RfqWorkflow::new(
      Arc::clone(&self.cart),
      Arc::clone(&self.backend),
      Arc::clone(&self.launcher),
      &self.config,
    )
  }
}

impl std::fmt::Debug for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppState").field("config", &self.config).finish()
  }
}
