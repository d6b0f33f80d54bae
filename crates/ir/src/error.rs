// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Compile-time error types
//!
//! One exhaustive, total error type for everything that can go wrong
//! between a validated-looking IR arriving and SQL coming out. Every
//! fallible step in `nl2sql-planner`, `nl2sql-lowering`,
//! `nl2sql-emitter`, and `nl2sql-compiler` returns `Result<_, CompileError>`
//! — nothing escapes as a host-runtime panic.
//!
//! Catalog *load-time* errors (`CatalogError`, raised while building a
//! `SemanticCatalog` from a document) are a separate type owned by
//! `nl2sql-catalog`: construction is a one-shot phase that happens before
//! any IR exists, so it has nothing to point a `location` at within an
//! IR document.

use serde::Serialize;
use thiserror::Error;

/// Result type alias used throughout the compile pipeline.
pub type CompileResult<T> = Result<T, CompileError>;

/// A structured, total compilation failure.
///
/// `location` is a JSON-pointer-style path into the IR document (e.g.
/// `/filters/conditions/1/entity`). It is best-effort: some kinds (e.g. `DisconnectedJoinGraph`) point at the table name
/// rather than a JSON path, since the disconnect is a property of the
/// resolved table set, not of any single IR node.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{kind}: {message} (at {location})")]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub message: String,
    pub location: String,
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: location.into(),
        }
    }
}

/// The exhaustive set of ways compilation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompileErrorKind {
    /// Structural/shape violation caught at IR validation.
    InvalidIr,
    /// An `entity` name is not present in the catalog.
    UnknownEntity,
    /// Required tables are not reachable via the FK graph.
    DisconnectedJoinGraph,
    /// The IR resolves to zero physical tables to project.
    EmptyProjection,
    /// A non-aggregate projection is missing from GROUP BY under
    /// aggregation.
    GroupByMismatch,
    /// A HAVING clause references an alias no projection defines.
    UnknownAlias,
    /// An operator was paired with a value of the wrong shape (e.g. `IN`
    /// with a scalar, `IS_NULL` with a value).
    OperatorValueMismatch,
    /// A literal falls outside an attribute's declared enum set.
    EnumValueRejected,
    /// An operator has no lowering rule.
    UnsupportedOperator,
    /// SQL Server pagination was requested with no ORDER BY and none
    /// could be synthesized.
    DialectRequiresOrderBy,
}

impl std::fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompileErrorKind::InvalidIr => "InvalidIR",
            CompileErrorKind::UnknownEntity => "UnknownEntity",
            CompileErrorKind::DisconnectedJoinGraph => "DisconnectedJoinGraph",
            CompileErrorKind::EmptyProjection => "EmptyProjection",
            CompileErrorKind::GroupByMismatch => "GroupByMismatch",
            CompileErrorKind::UnknownAlias => "UnknownAlias",
            CompileErrorKind::OperatorValueMismatch => "OperatorValueMismatch",
            CompileErrorKind::EnumValueRejected => "EnumValueRejected",
            CompileErrorKind::UnsupportedOperator => "UnsupportedOperator",
            CompileErrorKind::DialectRequiresOrderBy => "DialectRequiresOrderBy",
        };
        write!(f, "{s}")
    }
}
