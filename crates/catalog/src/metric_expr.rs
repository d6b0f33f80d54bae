// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metric expression parsing
//!
//! A metric's defining expression (e.g. `order_items.quantity *
//! order_items.unit_price`) is opaque SQL-ish text with marked column
//! references. Extracting those references must not depend on string
//! substitution fragile to substring overlap, so this is a small
//! positional tokenizer, not a `str::replace` pass. It
//! splits the expression into alternating `Raw` spans (operators,
//! parens, numeric literals, whitespace) and `ColumnRef` spans (resolved
//! `(table, column)` pairs), which the lowerer later rewrites in place by
//! substituting each `ColumnRef` with its aliased form.

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricToken {
    /// Verbatim text: operators, literals, parentheses, whitespace.
    Raw(String),
    /// A resolved column reference.
    ColumnRef { table: String, column: String },
}

/// Tokenize a metric expression, resolving bare (unqualified) column
/// names against `default_table` when the metric touches exactly one
/// table, and qualified `table.column` names verbatim.
pub fn tokenize(
    entity: &str,
    expression: &str,
    default_table: Option<&str>,
) -> Result<Vec<MetricToken>, CatalogError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut raw = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_ident_start(c) {
            let start = i;
            i += 1;
            while i < chars.len() && is_ident_continue(chars[i]) {
                i += 1;
            }
            let ident: String = chars[start..i].iter().collect();

            if i < chars.len() && chars[i] == '.' {
                // Qualified reference: table.column
                let dot = i;
                let mut j = dot + 1;
                if j < chars.len() && is_ident_start(chars[j]) {
                    let col_start = j;
                    j += 1;
                    while j < chars.len() && is_ident_continue(chars[j]) {
                        j += 1;
                    }
                    let column: String = chars[col_start..j].iter().collect();
                    flush_raw(&mut tokens, &mut raw);
                    tokens.push(MetricToken::ColumnRef {
                        table: ident,
                        column,
                    });
                    i = j;
                    continue;
                }
                // Trailing dot with no valid column name: treat as raw text.
                raw.push_str(&ident);
                continue;
            }

            // Bare identifier: only resolvable when the metric has a
            // single unambiguous source table.
            match default_table {
                Some(table) => {
                    flush_raw(&mut tokens, &mut raw);
                    tokens.push(MetricToken::ColumnRef {
                        table: table.to_string(),
                        column: ident,
                    });
                }
                None => {
                    return Err(CatalogError::MalformedMetricExpression {
                        entity: entity.to_string(),
                        reason: format!(
                            "unqualified column '{ident}' is ambiguous across multiple source tables"
                        ),
                    });
                }
            }
            continue;
        }

        raw.push(c);
        i += 1;
    }

    flush_raw(&mut tokens, &mut raw);
    Ok(tokens)
}

fn flush_raw(tokens: &mut Vec<MetricToken>, raw: &mut String) {
    if !raw.is_empty() {
        tokens.push(MetricToken::Raw(std::mem::take(raw)));
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
