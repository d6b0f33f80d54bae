// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Table reference collection
//!
//! Walks a validated IR in a fixed traversal order (projections
//! left-to-right, then filters in tree order, then group_by, then
//! having, then order_by) and resolves each entity reference to the
//! physical tables it touches. The resulting ordered,
//! first-occurrence-deduplicated list is what the join planner's BFS
//! starts from — this order, not any sorted or hashed one, is what makes
//! alias assignment deterministic.

use std::collections::HashSet;

use nl2sql_catalog::SemanticCatalog;
use nl2sql_ir::{CompileResult, ConditionTarget, FilterGroup, Nl2SqlIr};
use nl2sql_planner::TableRef;

pub fn collect_table_refs(
    ir: &Nl2SqlIr,
    catalog: &SemanticCatalog,
    known_aliases: &HashSet<&str>,
) -> CompileResult<Vec<TableRef>> {
    let mut refs = Vec::new();

    for (i, p) in ir.projections.iter().enumerate() {
        let location = format!("/projections/{i}/entity");
        push_entity_tables(&p.entity, catalog, &location, &mut refs)?;
    }

    if let Some(tree) = &ir.filters {
        collect_from_tree(tree, "/filters", catalog, &mut refs)?;
    }

    for (i, g) in ir.group_by.iter().enumerate() {
        let location = format!("/group_by/{i}/entity");
        push_entity_tables(&g.entity, catalog, &location, &mut refs)?;
    }

    if let Some(tree) = &ir.having {
        collect_from_tree(tree, "/having", catalog, &mut refs)?;
    }

    for (i, o) in ir.order_by.iter().enumerate() {
        if known_aliases.contains(o.field.as_str()) {
            continue;
        }
        let location = format!("/order_by/{i}/field");
        push_entity_tables(&o.field, catalog, &location, &mut refs)?;
    }

    Ok(refs)
}

fn collect_from_tree(
    tree: &FilterGroup,
    location: &str,
    catalog: &SemanticCatalog,
    refs: &mut Vec<TableRef>,
) -> CompileResult<()> {
    match tree {
        FilterGroup::Leaf(cond) => {
            if let ConditionTarget::Entity(name) = cond.target() {
                push_entity_tables(name, catalog, location, refs)?;
            }
            Ok(())
        }
        FilterGroup::Compound { conditions, .. } => {
            for (i, child) in conditions.iter().enumerate() {
                collect_from_tree(child, &format!("{location}/conditions/{i}"), catalog, refs)?;
            }
            Ok(())
        }
    }
}

fn push_entity_tables(
    entity_name: &str,
    catalog: &SemanticCatalog,
    location: &str,
    refs: &mut Vec<TableRef>,
) -> CompileResult<()> {
    let entity = catalog.resolve_entity(entity_name)?;
    for table in catalog.tables_of(entity) {
        refs.push(TableRef {
            table: table.to_string(),
            location: location.to_string(),
        });
    }
    Ok(())
}
