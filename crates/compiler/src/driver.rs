// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Compiler driver
//!
//! The public entry point: validate the IR, resolve entity references
//! to physical tables, run the join planner, lower every IR construct
//! against the resulting plan, and emit SQL. `compile` takes no lock,
//! owns no state, and mutates neither its IR nor its catalog argument —
//! it is a pure function of its four inputs.

use std::collections::HashSet;

use nl2sql_catalog::SemanticCatalog;
use nl2sql_emitter::{emit, EmitInput};
use nl2sql_ir::{CompileResult, Dialect, Nl2SqlIr};
use nl2sql_lowering::{lower_entity, lower_filter_group, lower_order_by, lower_projection, ClauseKind, Clock};

use crate::resolve::collect_table_refs;
use crate::validate::{query_has_aggregates, validate};

/// The result of a successful compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSql {
    pub sql: String,
}

/// Compile a validated-looking IR into SQL text, or a structured
/// [`nl2sql_ir::CompileError`]. Never panics: every failure path is a
/// typed error.
pub fn compile(
    ir: &Nl2SqlIr,
    catalog: &SemanticCatalog,
    dialect: Dialect,
    clock: &dyn Clock,
) -> CompileResult<CompiledSql> {
    let validated = {
        let _span = tracing::trace_span!("validate").entered();
        validate(ir, catalog)?
    };
    let has_aggregates = query_has_aggregates(&validated);

    let known_aliases: HashSet<&str> = validated.projections.iter().map(|p| p.output_name()).collect();
    let plan = {
        let _span = tracing::trace_span!("plan").entered();
        let table_refs = collect_table_refs(&validated, catalog, &known_aliases)?;
        nl2sql_planner::plan(&table_refs, catalog)?
    };

    let select_items = {
        let _span = tracing::trace_span!("lower_projections").entered();
        let mut select_items = Vec::with_capacity(validated.projections.len());
        for (i, p) in validated.projections.iter().enumerate() {
            let lowered = lower_projection(p, i, catalog, &plan, has_aggregates)?;
            select_items.push(lowered.select_sql);
        }
        select_items
    };

    let where_sql = {
        let _span = tracing::trace_span!("lower_filters").entered();
        match &validated.filters {
            Some(tree) => Some(lower_filter_group(
                tree,
                ClauseKind::Where,
                catalog,
                &plan,
                dialect,
                clock,
                "/filters",
            )?),
            None => None,
        }
    };

    let group_by = {
        let _span = tracing::trace_span!("lower_group_by").entered();
        let mut group_by = Vec::with_capacity(validated.group_by.len());
        for (i, g) in validated.group_by.iter().enumerate() {
            let location = format!("/group_by/{i}/entity");
            let frag = lower_entity(&g.entity, catalog, &plan, &location)?;
            group_by.push(frag.sql);
        }
        group_by
    };

    let having_sql = {
        let _span = tracing::trace_span!("lower_having").entered();
        match &validated.having {
            Some(tree) => Some(lower_filter_group(
                tree,
                ClauseKind::Having,
                catalog,
                &plan,
                dialect,
                clock,
                "/having",
            )?),
            None => None,
        }
    };

    let order_by = {
        let _span = tracing::trace_span!("lower_order_by").entered();
        let owned_known_aliases: HashSet<String> = known_aliases.iter().map(|s| s.to_string()).collect();
        let mut order_by = Vec::with_capacity(validated.order_by.len());
        for (i, o) in validated.order_by.iter().enumerate() {
            let lowered = lower_order_by(
                o,
                i,
                catalog,
                &plan,
                dialect,
                &owned_known_aliases,
                has_aggregates,
            )?;
            order_by.push(lowered.sql);
        }
        order_by
    };

    let first_projection_output = validated.projections.first().map(|p| p.output_name().to_string());

    let sql = {
        let _span = tracing::trace_span!("emit").entered();
        emit(EmitInput {
            select_items,
            plan: &plan,
            where_sql,
            group_by,
            having_sql,
            order_by,
            limit: validated.limit,
            offset: validated.offset,
            dialect,
            first_projection_output,
        })?
    };

    Ok(CompiledSql { sql })
}
