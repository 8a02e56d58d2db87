// core/src/rfq/mod.rs

//! RFQ submission workflow.
//!
//! Dual-channel delivery, by design: the backend POST is best-effort
//! infrastructure, the WhatsApp handoff is the guaranteed channel to the
//! sales team. Send both, block on neither; "submitted" means the handoff
//! was attempted.

mod backend;
mod contact;
mod handoff;
mod message;
mod submission;
mod workflow;

pub use backend::{BackendOutcome, HttpRfqBackend, RfqBackend};
pub use contact::{ContactDetails, ContactField};
pub use handoff::{DeepLinkLauncher, HandoffOutcome, LaunchError};
pub use message::{format_rfq_message, whatsapp_url};
pub use submission::RfqSubmission;
pub use workflow::{Acknowledgment, RfqStage, RfqWorkflow, SubmissionReceipt};
