// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # NL2SQL Compiler Driver
//!
//! The public surface of the whole system: given a validated
//! [`nl2sql_ir::Nl2SqlIr`], a [`nl2sql_catalog::SemanticCatalog`],
//! a target [`nl2sql_ir::Dialect`], and an injected clock, deterministically
//! produce SQL text or a structured [`nl2sql_ir::CompileError`].
//!
//! ```rust
//! use nl2sql_catalog::{parse, SemanticCatalog};
//! use nl2sql_compiler::compile;
//! use nl2sql_ir::{Condition, Dialect, FilterGroup, Nl2SqlIr, Projection, CmpOp, ConditionValue, Scalar};
//! use nl2sql_lowering::FixedClock;
//! use chrono::NaiveDate;
//!
//! let catalog = SemanticCatalog::try_from(parse(r#"
//! entities:
//!   product_name:
//!     type: attribute
//!     table: products
//!     column: name
//! "#).unwrap()).unwrap();
//!
//! let ir = Nl2SqlIr {
//!     intent: None,
//!     projections: vec![Projection { entity: "product_name".into(), op: None, alias: None }],
//!     filters: Some(FilterGroup::Leaf(Condition {
//!         entity: Some("product_name".into()),
//!         entity_alias: None,
//!         op: CmpOp::Contains,
//!         value: Some(ConditionValue::Scalar(Scalar::Str("电脑".into()))),
//!     })),
//!     group_by: vec![],
//!     having: None,
//!     order_by: vec![],
//!     limit: None,
//!     offset: None,
//! };
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! let compiled = compile(&ir, &catalog, Dialect::Standard, &clock).unwrap();
//! assert_eq!(compiled.sql, "SELECT t1.name\nFROM products AS t1\nWHERE t1.name LIKE '%电脑%'");
//! ```

mod driver;
mod resolve;
mod validate;

pub use driver::{compile, CompiledSql};
pub use validate::{query_has_aggregates, validate, ValidatedIr};
