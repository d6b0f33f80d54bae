// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # FROM / JOIN clause rendering
//!
//! Renders the planner's [`JoinPlan`] as `FROM <T0> AS t1 INNER JOIN <T1>
//! AS t2 ON ...`. INNER JOIN is the only join kind emitted — the
//! semantic layer carries no edge-optionality annotation (see DESIGN.md).

use nl2sql_planner::JoinPlan;

pub fn render_from_join(plan: &JoinPlan) -> String {
    let mut clauses = Vec::with_capacity(plan.tables.len());
    for table in &plan.tables {
        match &table.join {
            None => clauses.push(format!("FROM {} AS {}", table.table, table.alias)),
            Some(edge) => clauses.push(format!(
                "INNER JOIN {} AS {} ON {}.{} = {}.{}",
                table.table,
                table.alias,
                edge.via_table_alias,
                edge.via_column,
                table.alias,
                edge.this_column,
            )),
        }
    }
    clauses.join(" ")
}
