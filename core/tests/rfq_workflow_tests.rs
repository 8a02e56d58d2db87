// tests/rfq_workflow_tests.rs
mod common;

use buildmart::{
  AppConfig, AppError, BackendOutcome, CartStore, CartSync, DeepLinkLauncher, HandoffOutcome, NoopSync, RfqBackend,
  RfqStage, RfqWorkflow,
};
use common::*;
use std::sync::Arc;
use tempfile::TempDir;

struct Flow {
  _dir: TempDir,
  store: Arc<CartStore>,
  backend: Arc<ScriptedBackend>,
  launcher: Arc<RecordingLauncher>,
  workflow: RfqWorkflow,
}

fn flow_with(backend: Arc<ScriptedBackend>, launcher: Arc<RecordingLauncher>) -> Flow {
  let sync: Arc<dyn CartSync> = Arc::new(NoopSync);
  let (dir, store) = temp_store(sync);
  let config = AppConfig::default();
  let backend_dyn: Arc<dyn RfqBackend> = backend.clone();
  let launcher_dyn: Arc<dyn DeepLinkLauncher> = launcher.clone();
  let workflow = RfqWorkflow::new(Arc::clone(&store), backend_dyn, launcher_dyn, &config);
  Flow {
    _dir: dir,
    store,
    backend,
    launcher,
    workflow,
  }
}

async fn populate_and_reach_details(flow: &mut Flow) {
  flow.store.add_item(tmt_input(5)).await.unwrap();
  flow.workflow.begin().await.unwrap();
  flow.workflow.proceed_to_details().unwrap();
  *flow.workflow.contact_mut() = full_contact();
}

#[tokio::test]
async fn begin_requires_non_empty_cart() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  let err = flow.workflow.begin().await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  flow.store.add_item(tmt_input(5)).await.unwrap();
  let items = flow.workflow.begin().await.unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(flow.workflow.stage(), RfqStage::ReviewCart);
}

#[tokio::test]
async fn back_transition_retains_entered_contact_fields() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  flow.store.add_item(tmt_input(5)).await.unwrap();
  flow.workflow.begin().await.unwrap();
  flow.workflow.proceed_to_details().unwrap();

  flow.workflow.contact_mut().customer_name = "A. Rao".to_string();
  flow.workflow.contact_mut().company = "Rao Builders".to_string();

  flow.workflow.back_to_review();
  assert_eq!(flow.workflow.stage(), RfqStage::ReviewCart);
  assert_eq!(flow.workflow.contact().customer_name, "A. Rao");
  assert_eq!(flow.workflow.contact().company, "Rao Builders");

  flow.workflow.proceed_to_details().unwrap();
  assert_eq!(flow.workflow.contact().company, "Rao Builders");
}

#[tokio::test]
async fn validation_reports_first_missing_field_in_fixed_order() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  populate_and_reach_details(&mut flow).await;

  // Blank out location and phone; location comes first in the fixed order.
  flow.workflow.contact_mut().location = "   ".to_string();
  flow.workflow.contact_mut().phone = String::new();

  let err = flow.workflow.submit().await.unwrap_err();
  match err {
    AppError::Validation(msg) => assert_eq!(msg, "Please enter your project location."),
    other => panic!("expected validation error, got {:?}", other),
  }
  // State did not advance.
  assert_eq!(flow.workflow.stage(), RfqStage::CustomerDetails);
}

#[tokio::test]
async fn blocked_submission_touches_neither_backend_nor_launcher() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  populate_and_reach_details(&mut flow).await;
  flow.workflow.contact_mut().customer_name = String::new();

  assert!(flow.workflow.submit().await.is_err());
  assert_eq!(flow.backend.call_count(), 0);
  assert_eq!(flow.launcher.launch_count(), 0);
}

#[tokio::test]
async fn backend_failure_still_launches_whatsapp_and_reads_as_success() {
  let mut flow = flow_with(ScriptedBackend::unavailable(), RecordingLauncher::working());
  populate_and_reach_details(&mut flow).await;

  let receipt = flow.workflow.submit().await.unwrap();

  assert_eq!(receipt.backend, BackendOutcome::Unavailable);
  assert_eq!(receipt.handoff, HandoffOutcome::Launched);
  assert_eq!(flow.launcher.launch_count(), 1);
  // From the buyer's perspective this is a success.
  assert!(receipt.acknowledgment.success_copy.contains("sent to our sales team"));
  assert!(receipt.acknowledgment.handoff_notice.is_none());
}

#[tokio::test]
async fn launched_url_carries_the_full_message() {
  let mut flow = flow_with(ScriptedBackend::unavailable(), RecordingLauncher::working());
  flow.store.add_item(tmt_input(5)).await.unwrap();
  flow.store.add_item(cement_input(20)).await.unwrap();
  flow.workflow.begin().await.unwrap();
  flow.workflow.proceed_to_details().unwrap();
  *flow.workflow.contact_mut() = full_contact();

  let receipt = flow.workflow.submit().await.unwrap();
  let url = flow.launcher.last_url().expect("launcher saw the deep link");
  assert_eq!(url, receipt.whatsapp_url);
  assert_eq!(url.host_str(), Some("wa.me"));

  let (_, decoded) = url.query_pairs().next().expect("text query parameter");
  assert!(decoded.contains("Product: TMT Bars Fe 500D"));
  assert!(decoded.contains("Brand: Tata Steel"));
  assert!(decoded.contains("Grade: Fe 500D"));
  assert!(decoded.contains("Quantity: 5 MT"));
  assert!(decoded.contains("Product: OPC Cement 53 Grade"));
  assert!(decoded.contains("Name: A. Rao"));
  assert!(decoded.contains("Company: Rao Builders"));
  assert!(decoded.contains("Location: Pune"));
  assert!(decoded.contains("Email: a@raobuilders.in"));
  assert!(decoded.contains("Phone: 9999999999"));
}

#[tokio::test]
async fn launch_failure_is_a_distinct_non_fatal_notice() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::broken());
  populate_and_reach_details(&mut flow).await;

  let receipt = flow.workflow.submit().await.unwrap();

  assert!(receipt.backend.is_saved());
  let notice = match &receipt.handoff {
    HandoffOutcome::Failed { notice } => notice.clone(),
    other => panic!("expected failed handoff, got {:?}", other),
  };
  // Actionable: names the manual contact route.
  assert!(notice.contains("message our sales team directly"));
  assert_eq!(receipt.acknowledgment.handoff_notice.as_deref(), Some(notice.as_str()));

  // No rollback: the entered data and the cart are preserved until the
  // buyer acknowledges.
  assert_eq!(flow.workflow.contact().customer_name, "A. Rao");
  assert_eq!(flow.store.count().await, 1);
}

#[tokio::test]
async fn backend_success_message_is_surfaced_only_in_toast_copy() {
  let mut flow = flow_with(
    ScriptedBackend::saved_with_message("Reference #RFQ-1042"),
    RecordingLauncher::working(),
  );
  populate_and_reach_details(&mut flow).await;

  let receipt = flow.workflow.submit().await.unwrap();
  assert!(receipt.acknowledgment.success_copy.contains("Reference #RFQ-1042"));
  assert_eq!(receipt.handoff, HandoffOutcome::Launched);
}

#[tokio::test]
async fn submitted_payload_owns_a_snapshot_with_total_items() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  flow.store.add_item(tmt_input(5)).await.unwrap();
  flow.store.add_item(cement_input(20)).await.unwrap();
  flow.workflow.begin().await.unwrap();
  flow.workflow.proceed_to_details().unwrap();
  *flow.workflow.contact_mut() = full_contact();

  flow.workflow.submit().await.unwrap();

  let submissions = flow.backend.submissions.lock();
  assert_eq!(submissions.len(), 1);
  let payload = &submissions[0];
  assert_eq!(payload.items.len(), 2);
  assert_eq!(payload.total_items(), 2);
  assert_eq!(payload.customer_name, "A. Rao");
  // Cart order is preserved in the snapshot.
  assert_eq!(payload.items[0].product_name, "TMT Bars Fe 500D");
  assert_eq!(payload.items[1].product_name, "OPC Cement 53 Grade");
}

#[tokio::test]
async fn cart_survives_until_acknowledgment_then_clears() {
  let mut flow = flow_with(ScriptedBackend::saved(), RecordingLauncher::working());
  populate_and_reach_details(&mut flow).await;

  flow.workflow.submit().await.unwrap();
  // Network success alone does not clear the cart.
  assert_eq!(flow.store.count().await, 1);
  assert_eq!(flow.workflow.stage(), RfqStage::Submitting);

  flow.workflow.acknowledge().await.unwrap();
  assert_eq!(flow.workflow.stage(), RfqStage::Done);
  assert!(flow.store.items().await.is_empty());
  // Contact fields reset for the next RFQ.
  assert_eq!(flow.workflow.contact().customer_name, "");
  assert_eq!(flow.workflow.contact().phone, "");
}

#[tokio::test]
async fn single_tmt_line_rfq_end_to_end() {
  // Cart: one TMT line; contact: A. Rao / Rao Builders / Pune.
  let mut flow = flow_with(ScriptedBackend::unavailable(), RecordingLauncher::working());
  flow.store.add_item(tmt_input(5)).await.unwrap();
  flow.workflow.begin().await.unwrap();
  flow.workflow.proceed_to_details().unwrap();
  *flow.workflow.contact_mut() = full_contact();

  let receipt = flow.workflow.submit().await.unwrap();
  let (_, decoded) = receipt.whatsapp_url.query_pairs().next().unwrap();
  for line in [
    "Product: TMT Bars Fe 500D",
    "Brand: Tata Steel",
    "Grade: Fe 500D",
    "Quantity: 5 MT",
    "Name: A. Rao",
  ] {
    assert!(decoded.contains(line), "missing '{}' in decoded message", line);
  }

  flow.workflow.acknowledge().await.unwrap();
  assert!(flow.store.items().await.is_empty());
}
