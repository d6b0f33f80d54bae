// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Projection lowering
//!
//! Lowers a single SELECT-list entry: wraps the entity fragment in its
//! explicit aggregation operator, or — absent one — in the entity's
//! default aggregation when the query as a whole aggregates.

use nl2sql_catalog::SemanticCatalog;
use nl2sql_ir::{AggOp, CompileResult, Projection};
use nl2sql_planner::JoinPlan;

use crate::entity::lower_entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweredProjection {
    /// The full SELECT-list item, including a trailing `AS alias` when
    /// the projection carries one.
    pub select_sql: String,
    /// The name this projection is referenceable by downstream (alias if
    /// present, else the bare entity name).
    pub output_name: String,
    pub is_aggregate: bool,
}

/// Lower one projection. `query_has_aggregates` decides whether a
/// metric's default aggregation is applied implicitly when no explicit
/// `op` is given — the signal used is whether the overall
/// query groups or carries any explicit aggregate, per the classic
/// GROUP BY rule (documented in DESIGN.md).
pub fn lower_projection(
    proj: &Projection,
    index: usize,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    query_has_aggregates: bool,
) -> CompileResult<LoweredProjection> {
    let location = format!("/projections/{index}/entity");
    let frag = lower_entity(&proj.entity, catalog, plan, &location)?;

    let (body, is_aggregate) = match proj.op {
        Some(op) => (wrap_aggregate(op, &frag.sql), true),
        None => {
            if query_has_aggregates && frag.is_aggregate_default() {
                let default = frag.default_agg.expect("is_aggregate_default implies Some");
                (wrap_aggregate(default, &frag.sql), true)
            } else {
                (frag.sql.clone(), false)
            }
        }
    };

    let select_sql = match &proj.alias {
        Some(alias) => format!("{body} AS {alias}"),
        None => body,
    };

    Ok(LoweredProjection {
        select_sql,
        output_name: proj.output_name().to_string(),
        is_aggregate,
    })
}

fn wrap_aggregate(op: AggOp, inner: &str) -> String {
    if op.is_distinct() {
        format!("COUNT(DISTINCT {inner})")
    } else {
        format!("{}({inner})", op.sql_keyword())
    }
}
