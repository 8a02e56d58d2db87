// core/src/catalog/product.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image reference resolved once when the dataset is loaded.
///
/// Cart logic never looks inside this; it is carried through to the cart
/// line unchanged, purely for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ref", rename_all = "snake_case")]
pub enum ImageRef {
  /// Handle of an asset bundled with the app.
  Bundled(String),
  /// Remote URI.
  Remote(String),
  /// No image available.
  None,
}

/// Product categories in the bundled dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Steel,
  Cement,
  Concrete,
  Blocks,
  Aggregates,
  Waterproofing,
}

impl Category {
  pub fn label(&self) -> &'static str {
    match self {
      Category::Steel => "Steel",
      Category::Cement => "Cement",
      Category::Concrete => "Concrete",
      Category::Blocks => "Blocks & Bricks",
      Category::Aggregates => "Aggregates & Sand",
      Category::Waterproofing => "Waterproofing",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// One catalog record. Immutable for the life of the app.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
  /// Stable slug used as the reference from cart lines.
  pub id: String,
  pub name: String,
  pub category: Category,
  pub description: String,
  pub image: ImageRef,
  /// Brands the buyer may choose from in the detail selector.
  pub brands: Vec<String>,
  /// Grades the buyer may choose from in the detail selector.
  pub grades: Vec<String>,
  /// Display-only specification rows (label, value).
  pub specifications: Vec<(String, String)>,
}
