// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Entity reference lowering
//!
//! Rewrites a catalog `Entity` into a SQL fragment bound to the aliases
//! chosen by the join planner: an attribute becomes
//! `alias.column`; a metric becomes its defining expression with every
//! `(table, column)` slot substituted for its aliased form.

use nl2sql_catalog::{Entity, MetricToken, SemanticCatalog};
use nl2sql_ir::{AggOp, CompileError, CompileErrorKind, CompileResult};
use nl2sql_planner::JoinPlan;

/// A lowered entity reference plus the metadata needed to decide whether
/// it aggregates implicitly when a projection carries no explicit op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFragment {
    pub sql: String,
    pub default_agg: Option<AggOp>,
}

impl EntityFragment {
    pub fn is_aggregate_default(&self) -> bool {
        self.default_agg.is_some()
    }
}

fn alias_of<'a>(plan: &'a JoinPlan, table: &str, location: &str) -> CompileResult<&'a str> {
    plan.alias_of(table).ok_or_else(|| {
        CompileError::new(
            CompileErrorKind::DisconnectedJoinGraph,
            format!("table '{table}' has no alias assigned by the join plan"),
            location.to_string(),
        )
    })
}

/// Lower a named entity to its SQL fragment.
pub fn lower_entity(
    entity_name: &str,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    location: &str,
) -> CompileResult<EntityFragment> {
    let entity = catalog.resolve_entity(entity_name)?;
    lower_resolved_entity(entity, catalog, plan, location)
}

/// Lower an already-resolved entity (used when the caller resolved it
/// earlier, e.g. to build the join plan, and wants to avoid a second
/// catalog lookup).
pub fn lower_resolved_entity(
    entity: &Entity,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    location: &str,
) -> CompileResult<EntityFragment> {
    match entity {
        Entity::Attribute { table, column, .. } => {
            let alias = alias_of(plan, table, location)?;
            Ok(EntityFragment {
                sql: format!("{alias}.{column}"),
                default_agg: None,
            })
        }
        Entity::Metric {
            expression,
            default_agg,
            ..
        } => {
            let mut sql = String::new();
            for token in expression {
                match token {
                    MetricToken::Raw(text) => sql.push_str(text),
                    MetricToken::ColumnRef { table, column } => {
                        let alias = alias_of(plan, table, location)?;
                        sql.push_str(alias);
                        sql.push('.');
                        sql.push_str(column);
                    }
                }
            }
            let _ = catalog; // reserved for future enum/column cross-checks
            Ok(EntityFragment {
                sql,
                default_agg: Some(*default_agg),
            })
        }
    }
}
