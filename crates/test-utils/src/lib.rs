// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Test utilities
//!
//! Fixture catalogs and SQL-shape assertion helpers shared by the
//! compiler's own test suite and its downstream crates' integration
//! tests, so scenario fixtures live in one place instead of being
//! redeclared per test file.

mod assertions;
mod fixtures;

pub use assertions::assert_sql_eq;
pub use fixtures::{
    disconnected_sales_catalog, enum_constrained_catalog, products_catalog, sales_catalog,
};
