// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Fixture catalogs
//!
//! Builds the `SemanticCatalog` values used by the end-to-end compile
//! scenarios (S1-S6) and by property tests across crates, so every test
//! suite shares one ground truth for "what the sales schema looks like"
//! instead of redeclaring near-duplicate YAML.

use nl2sql_catalog::{parse, SemanticCatalog};

/// `products(id, name)` with a single `product_name` attribute — the
/// catalog for scenario S1, and the driving catalog for S6's pagination
/// test.
pub fn products_catalog() -> SemanticCatalog {
    build(
        r#"
entities:
  product_name:
    type: attribute
    table: products
    column: name
tables:
  products: [id, name]
"#,
    )
}

/// The sales schema behind scenarios S2-S4: `customers -> orders ->
/// order_items -> products`, a `region` attribute, and a `sales_amount`
/// metric (`order_items.quantity * order_items.unit_price`, default SUM).
pub fn sales_catalog() -> SemanticCatalog {
    build(
        r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
  product_name:
    type: attribute
    table: products
    column: name
  sales_amount:
    type: metric
    expression: "order_items.quantity * order_items.unit_price"
    tables: [order_items]
    default_agg: SUM
foreign_keys:
  - left_table: customers
    left_column: id
    right_table: orders
    right_column: customer_id
  - left_table: orders
    left_column: id
    right_table: order_items
    right_column: order_id
  - left_table: order_items
    left_column: product_id
    right_table: products
    right_column: id
"#,
    )
}

/// Same entities as [`sales_catalog`] but with the `customers -> orders`
/// edge omitted, so any query requiring both `customers` and
/// `order_items` fails with `DisconnectedJoinGraph` — scenario S5.
pub fn disconnected_sales_catalog() -> SemanticCatalog {
    build(
        r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
  sales_amount:
    type: metric
    expression: "order_items.quantity * order_items.unit_price"
    tables: [order_items]
    default_agg: SUM
foreign_keys:
  - left_table: orders
    left_column: id
    right_table: order_items
    right_column: order_id
"#,
    )
}

/// A `region` attribute constrained to an enumerated value set, for
/// `EnumValueRejected` tests.
pub fn enum_constrained_catalog() -> SemanticCatalog {
    build(
        r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
    enum_values: ["中国", "美国"]
"#,
    )
}

fn build(source: &str) -> SemanticCatalog {
    let doc = parse(source).expect("fixture catalog document parses");
    SemanticCatalog::try_from(doc).expect("fixture catalog document is well-formed")
}
