// core/src/selector.rs

//! Product detail selector: stages one brand/grade/quantity choice before a
//! catalog product becomes a cart line.
//!
//! The add action is guarded, not validated after the fact: `is_ready`
//! drives a disabled button in the UI, and `add_to_cart` refuses outright
//! while the guard is closed.

use crate::auth::AuthGate;
use crate::cart::{CartLineItem, CartLineItemInput, CartStore};
use crate::catalog::Product;
use crate::error::{AppError, Result};

/// The two explicit continuations offered after the add confirmation. There
/// is no silent auto-advance; the buyer picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
  /// Stay in the catalog and pick another product.
  ContinueBrowsing,
  /// Jump into the RFQ workflow with this line pre-loaded.
  ProceedToQuote,
}

/// Transient confirmation shown after a successful add, summarizing the
/// exact selection.
#[derive(Debug, Clone)]
pub struct AddConfirmation {
  pub line_item: CartLineItem,
  pub summary: String,
  pub cart_size: usize,
}

impl AddConfirmation {
  pub fn continuations(&self) -> [NextAction; 2] {
    [NextAction::ContinueBrowsing, NextAction::ProceedToQuote]
  }
}

/// Per-product selection state.
#[derive(Debug, Clone)]
pub struct ProductDetailSelector {
  product: Product,
  brand: Option<String>,
  grade: Option<String>,
  quantity: Option<u32>,
}

impl ProductDetailSelector {
  pub fn new(product: &Product) -> Self {
    Self {
      product: product.clone(),
      brand: None,
      grade: None,
      quantity: None,
    }
  }

  pub fn product(&self) -> &Product {
    &self.product
  }

  pub fn brand(&self) -> Option<&str> {
    self.brand.as_deref()
  }

  pub fn grade(&self) -> Option<&str> {
    self.grade.as_deref()
  }

  pub fn quantity(&self) -> Option<u32> {
    self.quantity
  }

  /// Picks a brand from the product's brand list.
  pub fn choose_brand(&mut self, brand: &str) -> Result<()> {
    if !self.product.brands.iter().any(|b| b == brand) {
      return Err(AppError::Validation(format!(
        "'{}' is not an available brand for {}.",
        brand, self.product.name
      )));
    }
    self.brand = Some(brand.to_string());
    Ok(())
  }

  /// Picks a grade from the product's grade list.
  pub fn choose_grade(&mut self, grade: &str) -> Result<()> {
    if !self.product.grades.iter().any(|g| g == grade) {
      return Err(AppError::Validation(format!(
        "'{}' is not an available grade for {}.",
        grade, self.product.name
      )));
    }
    self.grade = Some(grade.to_string());
    Ok(())
  }

  /// Sets the quantity in metric tons. Zero is rejected and leaves the
  /// previous value (and the guard) unchanged.
  pub fn set_quantity(&mut self, quantity: u32) -> Result<()> {
    if quantity == 0 {
      return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
    }
    self.quantity = Some(quantity);
    Ok(())
  }

  /// The add guard: open only when brand, grade and a positive quantity are
  /// all present. Flips back the instant any selection is cleared.
  pub fn is_ready(&self) -> bool {
    self.brand.is_some() && self.grade.is_some() && matches!(self.quantity, Some(q) if q > 0)
  }

  /// Converts the selection into a cart line.
  ///
  /// Requires an authenticated session (the caller redirects to login on
  /// `AppError::Auth`) and an open guard. On success returns the
  /// confirmation with its two explicit continuations.
  pub async fn add_to_cart(&self, auth: &AuthGate, cart: &CartStore) -> Result<AddConfirmation> {
    if !auth.is_authenticated() {
      return Err(AppError::Auth("Please sign in to add items to your cart.".to_string()));
    }
    // UI keeps the button disabled while the guard is closed; this is the
    // backstop for callers that bypass it.
    let (brand, grade, quantity) = match (&self.brand, &self.grade, self.quantity) {
      (Some(brand), Some(grade), Some(quantity)) if quantity > 0 => (brand.clone(), grade.clone(), quantity),
      _ => {
        return Err(AppError::Validation(
          "Select a brand, grade and quantity before adding to cart.".to_string(),
        ))
      }
    };

    let input = CartLineItemInput {
      product_id: self.product.id.clone(),
      product_name: self.product.name.clone(),
      category: self.product.category.label().to_string(),
      brand: brand.clone(),
      grade: grade.clone(),
      quantity,
      image: self.product.image.clone(),
    };
    let items = cart.add_item(input).await?;
    let line_item = items
      .last()
      .cloned()
      .ok_or_else(|| AppError::Internal("Cart store returned an empty list after add.".to_string()))?;

    let summary = format!(
      "Added to cart: {} ({}, {}) - {} MT",
      self.product.name, brand, grade, quantity
    );
    tracing::info!(%summary, cart_size = items.len(), "Detail selector add confirmed.");
    Ok(AddConfirmation {
      line_item,
      summary,
      cart_size: items.len(),
    })
  }
}
