// demos/storefront_cli/src/main.rs

//! Terminal storefront driving the buildmart core end to end: browse the
//! catalog, stage brand/grade/quantity selections, build a cart, and submit
//! an RFQ. Stands in for the mobile UI shell; the deep-link launcher here
//! prints the wa.me link for the operator to open.

use async_trait::async_trait;
use buildmart::{
  AppConfig, AppError, AppState, DeepLinkLauncher, LaunchError, ProductDetailSelector, RfqStage, RfqWorkflow,
};
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::Level;
use url::Url;

/// Prints the deep link instead of launching a messaging app.
struct TerminalLauncher;

#[async_trait]
impl DeepLinkLauncher for TerminalLauncher {
  async fn launch(&self, url: &Url) -> Result<(), LaunchError> {
    println!("\nOpen this link to send the RFQ on WhatsApp:\n  {}\n", url);
    Ok(())
  }
}

struct Shell {
  state: AppState,
  lines: Lines<BufReader<Stdin>>,
}

impl Shell {
  async fn prompt(&mut self, label: &str) -> String {
    print!("{} ", label);
    let _ = std::io::stdout().flush();
    match self.lines.next_line().await {
      Ok(Some(line)) => line.trim().to_string(),
      _ => String::new(),
    }
  }

  fn print_products(&self, products: &[&buildmart::Product]) {
    for p in products {
      println!("  {:<28} {:<18} [{}]", p.id, p.category.label(), p.name);
    }
  }

  async fn show_product(&self, id: &str) {
    match self.state.catalog.get(id) {
      Some(p) => {
        println!("{} ({})\n  {}", p.name, p.category, p.description);
        println!("  Brands: {}", p.brands.join(", "));
        println!("  Grades: {}", p.grades.join(", "));
        for (label, value) in &p.specifications {
          println!("  {}: {}", label, value);
        }
      }
      None => println!("No product with id '{}'. Try 'products'.", id),
    }
  }

  async fn print_cart(&self) {
    let items = self.state.cart.items().await;
    if items.is_empty() {
      println!("Cart is empty.");
      return;
    }
    for (i, line) in items.iter().enumerate() {
      println!(
        "  {}. {} ({}, {}) - {} MT  [{}]",
        i + 1,
        line.product_name,
        line.brand,
        line.grade,
        line.quantity,
        line.id
      );
    }
  }

  /// Detail-selector flow: brand, grade, quantity, then add.
  async fn add_flow(&mut self, id: &str) {
    let product = match self.state.catalog.get(id) {
      Some(p) => p.clone(),
      None => {
        println!("No product with id '{}'.", id);
        return;
      }
    };
    let mut selector = ProductDetailSelector::new(&product);

    println!("Brands: {}", product.brands.join(", "));
    let brand = self.prompt("Brand:").await;
    if let Err(e) = selector.choose_brand(&brand) {
      println!("{}", e);
      return;
    }
    println!("Grades: {}", product.grades.join(", "));
    let grade = self.prompt("Grade:").await;
    if let Err(e) = selector.choose_grade(&grade) {
      println!("{}", e);
      return;
    }
    let qty = self.prompt("Quantity (MT):").await;
    let qty: u32 = match qty.parse() {
      Ok(q) => q,
      Err(_) => {
        println!("Quantity must be a positive number.");
        return;
      }
    };
    if let Err(e) = selector.set_quantity(qty) {
      println!("{}", e);
      return;
    }

    match selector.add_to_cart(&self.state.auth, &self.state.cart).await {
      Ok(confirmation) => {
        println!("{}", confirmation.summary);
        println!("Cart now has {} item(s).", confirmation.cart_size);
        // The two explicit continuations; nothing advances silently.
        let next = self.prompt("Continue browsing or checkout? [browse/checkout]").await;
        if next.eq_ignore_ascii_case("checkout") {
          self.checkout_flow().await;
        }
      }
      Err(AppError::Auth(msg)) => {
        // Redirect-to-login, CLI style.
        println!("{} Use: login <name> <phone>", msg);
      }
      Err(e) => println!("Failed to update cart: {}", e),
    }
  }

  /// The two-step RFQ flow: review, details, submit, acknowledge.
  async fn checkout_flow(&mut self) {
    let mut workflow: RfqWorkflow = self.state.rfq_workflow();
    let items = match workflow.begin().await {
      Ok(items) => items,
      Err(e) => {
        println!("{}", e);
        return;
      }
    };

    println!("Review your requirement:");
    for line in &items {
      println!(
        "  - {} ({}, {}) - {} MT",
        line.product_name, line.brand, line.grade, line.quantity
      );
    }
    let go = self.prompt("Continue to customer details? [y/n]").await;
    if !go.eq_ignore_ascii_case("y") {
      return;
    }
    if let Err(e) = workflow.proceed_to_details() {
      println!("{}", e);
      return;
    }

    // Re-prompt until validation passes; already-entered fields are kept.
    loop {
      {
        let contact = workflow.contact_mut();
        if contact.customer_name.trim().is_empty() {
          contact.customer_name = self.prompt("Name:").await;
        }
        if contact.company.trim().is_empty() {
          contact.company = self.prompt("Company:").await;
        }
        if contact.location.trim().is_empty() {
          contact.location = self.prompt("Location:").await;
        }
        if contact.email.trim().is_empty() {
          contact.email = self.prompt("Email:").await;
        }
        if contact.phone.trim().is_empty() {
          contact.phone = self.prompt("Phone:").await;
        }
      }
      match workflow.submit().await {
        Ok(receipt) => {
          println!("{}", receipt.acknowledgment.success_copy);
          if let Some(notice) = &receipt.acknowledgment.handoff_notice {
            println!("{}", notice);
          }
          let _ = self.prompt("Press enter to dismiss").await;
          if workflow.stage() == RfqStage::Submitting {
            if let Err(e) = workflow.acknowledge().await {
              println!("{}", e);
            }
          }
          println!("Back to catalog. Type 'products' to keep browsing.");
          return;
        }
        Err(AppError::Validation(msg)) => println!("{}", msg),
        Err(e) => {
          println!("{}", e);
          return;
        }
      }
    }
  }

  async fn run(&mut self) {
    println!("BuildMart storefront. Type 'help' for commands.");
    loop {
      let line = self.prompt("buildmart>").await;
      let mut parts = line.split_whitespace();
      match parts.next() {
        Some("help") => {
          println!(
            "  products              list the catalog\n  \
             search <query>        search by name/category\n  \
             show <product-id>     product details\n  \
             login <name> <phone>  sign in\n  \
             add <product-id>      pick brand/grade/quantity and add\n  \
             cart                  show cart\n  \
             remove <n>            remove the n-th cart line\n  \
             checkout              start the RFQ flow\n  \
             quit"
          );
        }
        Some("products") => {
          let all = self.state.catalog.list_all().iter().collect::<Vec<_>>();
          self.print_products(&all);
        }
        Some("search") => {
          let query = parts.collect::<Vec<_>>().join(" ");
          let found = self.state.catalog.search(&query);
          if found.is_empty() {
            println!("Nothing matched '{}'.", query);
          } else {
            self.print_products(&found);
          }
        }
        Some("show") => {
          if let Some(id) = parts.next() {
            self.show_product(id).await;
          }
        }
        Some("login") => {
          let name = parts.next().unwrap_or("").to_string();
          let phone = parts.next().unwrap_or("").to_string();
          if name.is_empty() || phone.is_empty() {
            println!("Usage: login <name> <phone>");
          } else {
            self.state.auth.sign_in(name, phone);
            println!("Signed in.");
          }
        }
        Some("add") => {
          if let Some(id) = parts.next() {
            let id = id.to_string();
            self.add_flow(&id).await;
          } else {
            println!("Usage: add <product-id>");
          }
        }
        Some("cart") => self.print_cart().await,
        Some("remove") => {
          let index: usize = parts.next().and_then(|n| n.parse().ok()).unwrap_or(0);
          let items = self.state.cart.items().await;
          match index.checked_sub(1).and_then(|i| items.get(i)) {
            Some(line) => match self.state.cart.remove_item(line.id).await {
              Ok(rest) => println!("Removed. {} item(s) left.", rest.len()),
              Err(e) => println!("Failed to update cart: {}", e),
            },
            None => println!("Usage: remove <n> (see 'cart' for numbering)"),
          }
        }
        Some("checkout") => self.checkout_flow().await,
        Some("quit") | Some("exit") => return,
        Some(other) => println!("Unknown command '{}'. Type 'help'.", other),
        None => {}
      }
    }
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_max_level(Level::WARN) // Keep the REPL quiet; RUST_LOG overrides.
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      return;
    }
  };

  let state = match AppState::with_http(config, Arc::new(TerminalLauncher)) {
    Ok(state) => state,
    Err(e) => {
      eprintln!("Failed to initialize storefront: {}", e);
      return;
    }
  };

  let lines = BufReader::new(tokio::io::stdin()).lines();
  let mut shell = Shell { state, lines };
  shell.run().await;
}
