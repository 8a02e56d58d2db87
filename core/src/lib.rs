// core/src/lib.rs

//! BuildMart storefront core: cart and RFQ workflow for a B2B
//! construction-materials marketplace.
//!
//! What lives here:
//!  - A static, read-only product catalog with category/search filtering.
//!  - A durable cart store (one JSON blob, serialized async mutations).
//!  - A best-effort, fire-and-forget remote sync mirror of the cart.
//!  - The RFQ submission workflow: contact validation, payload assembly,
//!    dual-channel delivery (backend POST + WhatsApp deep link), and
//!    acknowledge-then-clear semantics.
//!  - The product detail selector that turns a catalog product plus a
//!    brand/grade/quantity choice into a cart line.
//!
//! The one deliberate resilience decision: RFQ delivery sends on both
//! channels and blocks on neither. The backend is optional infrastructure;
//! the WhatsApp message is the guaranteed path to the sales team. Backend
//! unavailability is a logged value, never an error the buyer sees.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod rfq;
pub mod selector;
pub mod state;
pub mod sync;

// --- Re-exports for the public API ---

pub use crate::auth::{AuthGate, BuyerSession};
pub use crate::cart::{CartLineItem, CartLineItemInput, CartStore, CART_BLOB_FILE};
pub use crate::catalog::{Catalog, Category, ImageRef, Product};
pub use crate::config::AppConfig;
pub use crate::error::{AppError, Result};
pub use crate::rfq::{
  Acknowledgment, BackendOutcome, ContactDetails, ContactField, DeepLinkLauncher, HandoffOutcome, HttpRfqBackend,
  LaunchError, RfqBackend, RfqStage, RfqSubmission, RfqWorkflow, SubmissionReceipt,
};
pub use crate::selector::{AddConfirmation, NextAction, ProductDetailSelector};
pub use crate::state::AppState;
pub use crate::sync::{CartSync, HttpCartSync, NoopSync, SyncError};
