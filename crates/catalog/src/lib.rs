// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Semantic catalog
//!
//! The declarative configuration layer the compiler resolves entity
//! names and join paths against: physical tables, entities (attributes
//! and metrics), and the foreign-key graph between tables.
//!
//! Construction is one-shot and fallible (`CatalogError`, a load-time
//! concern distinct from compile-time errors); the resulting
//! [`SemanticCatalog`] is then an immutable value passed by reference
//! through the rest of the compile pipeline.
//!
//! ```rust
//! use nl2sql_catalog::{parse, SemanticCatalog};
//!
//! let doc = parse(r#"
//! entities:
//!   product_name:
//!     type: attribute
//!     table: products
//!     column: name
//! "#).unwrap();
//! let catalog = SemanticCatalog::try_from(doc).unwrap();
//! assert!(catalog.resolve_entity("product_name").is_ok());
//! ```

pub mod catalog;
pub mod document;
pub mod entity;
pub mod error;
pub mod foreign_key;
pub mod ident;
pub mod metric_expr;
pub mod severity;
pub mod table;

pub use catalog::SemanticCatalog;
pub use document::{parse, CatalogDocument, EntityDocument, ForeignKeyDocument};
pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use foreign_key::ForeignKey;
pub use metric_expr::MetricToken;
pub use severity::EnumSeverity;
pub use table::PhysicalTable;
