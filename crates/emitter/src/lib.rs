// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Emitter
//!
//! Assembles already-lowered fragments into a complete SELECT statement
//! in a fixed clause order: SELECT / FROM+JOINs / WHERE / GROUP BY /
//! HAVING / ORDER BY / LIMIT-OFFSET. Empty clauses are
//! omitted. This crate performs no resolution or lowering of its own —
//! every fragment it touches has already been produced by
//! `nl2sql-planner` and `nl2sql-lowering`.

mod from_join;
mod pagination;

pub use from_join::render_from_join;
pub use pagination::render_pagination;

use nl2sql_ir::{CompileError, CompileErrorKind, CompileResult, Dialect};
use nl2sql_planner::JoinPlan;

/// Everything the emitter needs to assemble one SELECT statement. Every
/// field is already a rendered SQL fragment — the emitter only sequences
/// and joins them.
#[derive(Debug, Clone)]
pub struct EmitInput<'a> {
    pub select_items: Vec<String>,
    pub plan: &'a JoinPlan,
    pub where_sql: Option<String>,
    pub group_by: Vec<String>,
    pub having_sql: Option<String>,
    pub order_by: Vec<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub dialect: Dialect,
    /// The first projection's output name, used only to synthesize an
    /// ORDER BY for SQL Server pagination when the IR specified none.
    pub first_projection_output: Option<String>,
}

/// Compose the fixed clause sequence into one SQL statement, applying
/// exactly one space between tokens and a newline between top-level
/// clauses. The newlines are semantically insignificant, purely for
/// readability.
pub fn emit(input: EmitInput<'_>) -> CompileResult<String> {
    let mut clauses = Vec::new();

    clauses.push(format!("SELECT {}", input.select_items.join(", ")));
    clauses.push(render_from_join(input.plan));

    if let Some(where_sql) = &input.where_sql {
        clauses.push(format!("WHERE {where_sql}"));
    }
    if !input.group_by.is_empty() {
        clauses.push(format!("GROUP BY {}", input.group_by.join(", ")));
    }
    if let Some(having_sql) = &input.having_sql {
        clauses.push(format!("HAVING {having_sql}"));
    }

    let mut order_by = input.order_by.clone();
    let wants_pagination = input.limit.is_some() || input.offset.is_some();
    if wants_pagination && order_by.is_empty() && input.dialect.requires_order_by_for_pagination() {
        match &input.first_projection_output {
            Some(name) => order_by.push(format!("{name} ASC")),
            None => {
                return Err(CompileError::new(
                    CompileErrorKind::DialectRequiresOrderBy,
                    "SQL Server pagination requires an ORDER BY and none could be synthesized",
                    "/order_by",
                ));
            }
        }
    }
    if !order_by.is_empty() {
        clauses.push(format!("ORDER BY {}", order_by.join(", ")));
    }

    if let Some(pagination) = render_pagination(input.dialect, input.limit, input.offset) {
        clauses.push(pagination);
    }

    Ok(clauses.join("\n"))
}
