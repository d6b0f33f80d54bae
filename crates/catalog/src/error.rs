// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog load-time errors
//!
//! These are raised exactly once, while building a `SemanticCatalog` from
//! a declarative document: duplicate entity names, dangling column refs,
//! and malformed FK edges are configuration errors raised at load time.
//! They are a distinct lifecycle phase from compile-time errors
//! (`nl2sql_ir::CompileError`), which is why they get their own type
//! instead of sharing one.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while constructing a `SemanticCatalog`.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    #[error("duplicate entity name: '{0}'")]
    DuplicateEntity(String),

    #[error("entity '{entity}' references unknown table '{table}'")]
    UnknownTable { entity: String, table: String },

    #[error("entity '{entity}' references unknown column '{table}.{column}'")]
    DanglingColumn {
        entity: String,
        table: String,
        column: String,
    },

    #[error(
        "foreign key #{index} references unknown table or column: {left_table}.{left_column} = {right_table}.{right_column}"
    )]
    MalformedForeignKey {
        index: usize,
        left_table: String,
        left_column: String,
        right_table: String,
        right_column: String,
    },

    #[error("invalid identifier '{0}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier(String),

    #[error("metric '{0}' declares no source tables")]
    EmptyMetricTables(String),

    #[error("metric '{entity}' expression could not be parsed: {reason}")]
    MalformedMetricExpression { entity: String, reason: String },

    #[error("failed to parse catalog document: {0}")]
    DocumentParse(String),
}

