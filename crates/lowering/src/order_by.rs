// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ORDER BY lowering
//!
//! `OrderBy.field` may name either a catalog entity or a projection
//! alias. The IR wire format carries both as a single bare string, so
//! resolution here is structural: a `field` that matches a known
//! projection output name is an alias reference; anything else is
//! resolved against the catalog (see DESIGN.md for this resolution).
//!
//! `NULLS FIRST`/`NULLS LAST` is native syntax on dialects that support
//! it; MySQL (which doesn't) falls back to the `CASE WHEN ... IS NULL`
//! ordering trick.

use std::collections::HashSet;

use nl2sql_catalog::SemanticCatalog;
use nl2sql_ir::{CompileResult, Dialect, NullsOrder, OrderBy};
use nl2sql_planner::JoinPlan;

use crate::entity::lower_entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweredOrderBy {
    pub sql: String,
}

pub fn lower_order_by(
    order_by: &OrderBy,
    index: usize,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    dialect: Dialect,
    known_aliases: &HashSet<String>,
    query_has_aggregates: bool,
) -> CompileResult<LoweredOrderBy> {
    let location = format!("/order_by/{index}/field");

    let subject = if known_aliases.contains(&order_by.field) {
        order_by.field.clone()
    } else {
        let frag = lower_entity(&order_by.field, catalog, plan, &location)?;
        if query_has_aggregates && frag.is_aggregate_default() {
            let default = frag.default_agg.expect("is_aggregate_default implies Some");
            format!("{}({})", default.sql_keyword(), frag.sql)
        } else {
            frag.sql
        }
    };

    let sql = match order_by.nulls {
        None => format!("{subject} {}", order_by.direction.sql_keyword()),
        Some(nulls) if dialect.supports_nulls_ordering() => format!(
            "{subject} {} NULLS {}",
            order_by.direction.sql_keyword(),
            match nulls {
                NullsOrder::First => "FIRST",
                NullsOrder::Last => "LAST",
            }
        ),
        Some(nulls) => {
            // MySQL/SQLite-without-NULLS fallback: sort on an `IS NULL`
            // indicator column first, then the real column.
            let null_rank = match nulls {
                NullsOrder::First => format!("CASE WHEN {subject} IS NULL THEN 0 ELSE 1 END"),
                NullsOrder::Last => format!("CASE WHEN {subject} IS NULL THEN 1 ELSE 0 END"),
            };
            format!("{null_rank}, {subject} {}", order_by.direction.sql_keyword())
        }
    };

    Ok(LoweredOrderBy { sql })
}
