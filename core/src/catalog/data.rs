// core/src/catalog/data.rs

//! Bundled static product dataset.
//!
//! This is reference data, not inventory: quantities, pricing and stock are
//! negotiated through the RFQ channel, so a record only carries what the
//! buyer needs to describe a requirement (brands, grades, display specs).

use super::product::{Category, ImageRef, Product};

fn product(
  id: &str,
  name: &str,
  category: Category,
  description: &str,
  image: ImageRef,
  brands: &[&str],
  grades: &[&str],
  specs: &[(&str, &str)],
) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    category,
    description: description.to_string(),
    image,
    brands: brands.iter().map(|b| b.to_string()).collect(),
    grades: grades.iter().map(|g| g.to_string()).collect(),
    specifications: specs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
  }
}

pub(super) fn bundled_products() -> Vec<Product> {
  vec![
    product(
      "tmt-bars-fe500d",
      "TMT Bars Fe 500D",
      Category::Steel,
      "High-ductility thermo-mechanically treated reinforcement bars for RCC framing, \
       earthquake-resistant construction and heavy infrastructure.",
      ImageRef::Bundled("assets/products/tmt_bars.png".to_string()),
      &["Tata Steel", "JSW Steel", "SAIL", "Jindal Panther"],
      &["Fe 500", "Fe 500D", "Fe 550D"],
      &[
        ("Diameter range", "8 mm - 32 mm"),
        ("Standard", "IS 1786:2008"),
        ("Yield strength", ">= 500 N/mm²"),
        ("Elongation", ">= 16%"),
      ],
    ),
    product(
      "structural-steel-sections",
      "Structural Steel Sections",
      Category::Steel,
      "Hot-rolled beams, channels and angles for PEB sheds, mezzanines and industrial structures.",
      ImageRef::Bundled("assets/products/structural_steel.png".to_string()),
      &["Tata Structura", "JSW Steel", "SAIL"],
      &["E250", "E350", "E450"],
      &[("Standard", "IS 2062:2011"), ("Sections", "ISMB / ISMC / ISA")],
    ),
    product(
      "opc-cement-53",
      "OPC Cement 53 Grade",
      Category::Cement,
      "Ordinary Portland Cement for high-strength structural concrete, precast work and grouting.",
      ImageRef::Bundled("assets/products/opc_cement.png".to_string()),
      &["UltraTech", "ACC", "Ambuja", "Shree Cement"],
      &["OPC 43", "OPC 53"],
      &[
        ("Standard", "IS 269:2015"),
        ("Bag weight", "50 kg"),
        ("Compressive strength (28d)", ">= 53 MPa"),
      ],
    ),
    product(
      "ppc-cement",
      "PPC Cement",
      Category::Cement,
      "Portland Pozzolana Cement for mass concreting, plastering and general construction with \
       improved workability and long-term durability.",
      ImageRef::Bundled("assets/products/ppc_cement.png".to_string()),
      &["UltraTech", "ACC", "Dalmia", "JK Lakshmi"],
      &["PPC (Fly ash based)"],
      &[("Standard", "IS 1489-1:2015"), ("Bag weight", "50 kg")],
    ),
    product(
      "ready-mix-concrete",
      "Ready-Mix Concrete",
      Category::Concrete,
      "Plant-batched concrete delivered by transit mixer; slump and admixtures per site requirement.",
      ImageRef::Remote("https://cdn.buildmart.in/products/rmc.jpg".to_string()),
      &["UltraTech RMC", "ACC RMX", "Nuvoco"],
      &["M20", "M25", "M30", "M40"],
      &[("Standard", "IS 4926:2003"), ("Delivery", "Transit mixer, 6 m³")],
    ),
    product(
      "aac-blocks",
      "AAC Blocks",
      Category::Blocks,
      "Autoclaved aerated concrete blocks: lightweight, thermally insulating walling for framed structures.",
      ImageRef::Bundled("assets/products/aac_blocks.png".to_string()),
      &["Aerocon", "Biltech", "Magicrete"],
      &["Grade 1 (600x200x100)", "Grade 1 (600x200x150)", "Grade 1 (600x200x200)"],
      &[("Standard", "IS 2185-3"), ("Dry density", "551-650 kg/m³")],
    ),
    product(
      "fly-ash-bricks",
      "Fly Ash Bricks",
      Category::Blocks,
      "Machine-pressed fly ash bricks for load-bearing and partition masonry.",
      ImageRef::None,
      &["Local certified", "NTPC approved"],
      &["Class 7.5", "Class 10"],
      &[("Standard", "IS 12894:2002"), ("Size", "230x110x75 mm")],
    ),
    product(
      "m-sand",
      "Manufactured Sand (M-Sand)",
      Category::Aggregates,
      "Crushed fine aggregate for concrete and masonry, graded per Zone II.",
      ImageRef::Bundled("assets/products/m_sand.png".to_string()),
      &["Robo Sand", "Local certified"],
      &["Concreting (Zone II)", "Plastering"],
      &[("Standard", "IS 383:2016"), ("Fineness modulus", "2.4 - 3.1")],
    ),
    product(
      "coarse-aggregate",
      "Coarse Aggregate",
      Category::Aggregates,
      "Crushed stone aggregate for structural concrete and sub-base work.",
      ImageRef::None,
      &["Local certified"],
      &["12 mm", "20 mm", "40 mm"],
      &[("Standard", "IS 383:2016")],
    ),
    product(
      "waterproofing-membrane",
      "APP Waterproofing Membrane",
      Category::Waterproofing,
      "Torch-applied APP modified bituminous membrane for roofs, podiums and basements.",
      ImageRef::Remote("https://cdn.buildmart.in/products/app_membrane.jpg".to_string()),
      &["STP Ltd", "Sika", "Fosroc"],
      &["3 mm", "4 mm"],
      &[("Standard", "IS 16196"), ("Roll size", "1 m x 10 m")],
    ),
  ]
}
