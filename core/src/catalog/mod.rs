// core/src/catalog/mod.rs

//! Read-only product catalog.
//!
//! The catalog is immutable, lives for the whole app, and outlives every
//! cart line that references it. Cart lines snapshot what they need at
//! add-time, so nothing here is ever mutated or invalidated.

mod data;
mod product;

pub use product::{Category, ImageRef, Product};

/// In-memory catalog with read-only lookup and filter operations.
#[derive(Debug)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// Loads the bundled static dataset. Image references are resolved to
  /// their `ImageRef` variant here, once, at the data-loading boundary.
  pub fn bundled() -> Self {
    let products = data::bundled_products();
    tracing::debug!(count = products.len(), "Catalog loaded.");
    Self { products }
  }

  pub fn list_all(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, product_id: &str) -> Option<&Product> {
    self.products.iter().find(|p| p.id == product_id)
  }

  pub fn filter_by_category(&self, category: Category) -> Vec<&Product> {
    self.products.iter().filter(|p| p.category == category).collect()
  }

  /// Case-insensitive substring search over name, description and category.
  pub fn search(&self, query: &str) -> Vec<&Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
      return self.products.iter().collect();
    }
    self
      .products
      .iter()
      .filter(|p| {
        p.name.to_lowercase().contains(&needle)
          || p.description.to_lowercase().contains(&needle)
          || p.category.label().to_lowercase().contains(&needle)
      })
      .collect()
  }

  /// Categories present in the dataset, in first-appearance order. Used for
  /// the UI filter chips.
  pub fn categories(&self) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for p in &self.products {
      if !out.contains(&p.category) {
        out.push(p.category);
      }
    }
    out
  }
}
