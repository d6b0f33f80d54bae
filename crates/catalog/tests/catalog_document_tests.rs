// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use nl2sql_catalog::{parse, CatalogError, Entity, SemanticCatalog};

const S2_CATALOG: &str = r#"
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
"#;

#[test]
fn builds_s2_style_catalog() {
    let doc = parse(S2_CATALOG).unwrap();
    let catalog = SemanticCatalog::try_from(doc).unwrap();

    let region = catalog.resolve_entity("region").unwrap();
    assert!(matches!(region, Entity::Attribute { table, column, .. } if table == "customers" && column == "region"));

    let sales = catalog.resolve_entity("sales_amount").unwrap();
    assert!(sales.is_metric());
    assert_eq!(catalog.tables_of(sales), vec!["order_items"]);

    assert_eq!(catalog.foreign_keys().len(), 3);
}

#[test]
fn rejects_dangling_foreign_key_column() {
    let source = r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
foreign_keys:
  - left_table: customers
    left_column: id
    right_table: orders
    right_column: customer_id
tables:
  customers: [id, region]
  orders: [id]
"#;
    let doc = parse(source).unwrap();
    let err = SemanticCatalog::try_from(doc).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedForeignKey { index: 0, .. }));
}

#[test]
fn rejects_metric_with_no_source_tables() {
    let source = r#"
entities:
  broken_metric:
    type: metric
    expression: "1 + 1"
    tables: []
    default_agg: SUM
"#;
    let doc = parse(source).unwrap();
    let err = SemanticCatalog::try_from(doc).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyMetricTables(name) if name == "broken_metric"));
}

#[test]
fn rejects_invalid_identifier() {
    let source = r#"
entities:
  "bad name":
    type: attribute
    table: customers
    column: region
"#;
    let doc = parse(source).unwrap();
    let err = SemanticCatalog::try_from(doc).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidIdentifier(_)));
}

#[test]
fn s5_disconnected_catalog_still_loads_disconnect_is_a_compile_time_concern() {
    // The catalog itself loads fine even when `customers` has no path to
    // `order_items` — `DisconnectedJoinGraph` is only raised by the join
    // planner at compile time, never at catalog construction.
    let source = r#"
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
"#;
    let doc = parse(source).unwrap();
    assert!(SemanticCatalog::try_from(doc).is_ok());
}
