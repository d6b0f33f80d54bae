// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Literal rendering
//!
//! Renders IR scalar literals as SQL text: strings
//! single-quoted with `'` doubled, numbers unquoted, booleans rendered
//! per dialect, `NULL` only ever produced via `IS_NULL`/`IS_NOT_NULL`
//! (never as a comparison operand).

use nl2sql_ir::{Dialect, Scalar};

/// Render a scalar as a SQL literal.
pub fn render_scalar(value: &Scalar, dialect: Dialect) -> String {
    match value {
        Scalar::Null => "NULL".to_string(),
        Scalar::Bool(b) => render_bool(*b, dialect),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Str(s) => format!("'{}'", escape_quote(s)),
    }
}

fn render_bool(value: bool, dialect: Dialect) -> String {
    if dialect.has_boolean_literals() {
        if value { "TRUE".to_string() } else { "FALSE".to_string() }
    } else if value {
        "1".to_string()
    } else {
        "0".to_string()
    }
}

fn escape_quote(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render a `(v1, v2, …)` literal list for `IN`/`NOT IN`.
pub fn render_list(values: &[Scalar], dialect: Dialect) -> String {
    let rendered: Vec<String> = values.iter().map(|v| render_scalar(v, dialect)).collect();
    format!("({})", rendered.join(", "))
}

/// Escape `%` and `_` in a LIKE pattern operand, then wrap it per the
/// matching style (CONTAINS -> `%v%`, STARTS_WITH -> `v%`,
/// ENDS_WITH -> `%v`).
pub fn render_like_pattern(raw: &str, style: LikeStyle) -> String {
    let escaped = raw.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    let wrapped = match style {
        LikeStyle::Contains => format!("%{escaped}%"),
        LikeStyle::StartsWith => format!("{escaped}%"),
        LikeStyle::EndsWith => format!("%{escaped}"),
    };
    format!("'{}'", escape_quote(&wrapped))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeStyle {
    Contains,
    StartsWith,
    EndsWith,
}
