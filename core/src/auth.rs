// core/src/auth.rs

//! Minimal session gate consumed by the add-to-cart path.
//!
//! The real authentication screens are external collaborators; the core only
//! needs to know whether a buyer is signed in, and who, so unauthenticated
//! add-to-cart attempts can be redirected to login instead of silently
//! blocked.

use parking_lot::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerSession {
  pub name: String,
  pub phone: String,
}

/// Shared session cell. One instance lives in `AppState` behind an `Arc`.
#[derive(Debug, Default)]
pub struct AuthGate {
  session: RwLock<Option<BuyerSession>>,
}

impl AuthGate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn sign_in(&self, name: impl Into<String>, phone: impl Into<String>) {
    let session = BuyerSession {
      name: name.into(),
      phone: phone.into(),
    };
    tracing::info!(buyer = %session.name, "Buyer signed in.");
    *self.session.write() = Some(session);
  }

  pub fn sign_out(&self) {
    *self.session.write() = None;
  }

  pub fn is_authenticated(&self) -> bool {
    self.session.read().is_some()
  }

  pub fn current_user(&self) -> Option<BuyerSession> {
    self.session.read().clone()
  }
}
