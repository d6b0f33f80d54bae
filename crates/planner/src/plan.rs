// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Join planning
//!
//! Computes a minimal connected subgraph of the foreign-key graph that
//! spans every table referenced by an IR, breadth-first from the first
//! table seen while walking the IR left to right. The walk order — not
//! any sorted or hashed order — is what makes the result deterministic
//! and alias-stable.

use std::collections::{HashSet, VecDeque};

use nl2sql_catalog::SemanticCatalog;
use nl2sql_ir::{CompileError, CompileErrorKind, CompileResult};

/// A physical table as encountered while walking the IR, paired with the
/// JSON-pointer location of the first reference to it (used only for
/// error reporting if the table turns out to be unreachable).
#[derive(Debug, Clone)]
pub struct TableRef {
    pub table: String,
    pub location: String,
}

/// A single table slot in the finished plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTable {
    pub table: String,
    pub alias: String,
    /// `None` for the driving table (`t1`); `Some` for every joined table.
    pub join: Option<JoinEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinEdge {
    /// The column on this table side of the ON clause.
    pub this_column: String,
    /// The already-planned table this join connects back to.
    pub via_table_alias: String,
    /// The column on that earlier table's side of the ON clause.
    pub via_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPlan {
    /// In alias order: `tables[0]` is the driving table (`t1`).
    pub tables: Vec<PlannedTable>,
}

impl JoinPlan {
    pub fn alias_of(&self, table: &str) -> Option<&str> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.alias.as_str())
    }
}

/// Build a join plan covering every table in `refs`, deduplicated by
/// first occurrence.
pub fn plan(refs: &[TableRef], catalog: &SemanticCatalog) -> CompileResult<JoinPlan> {
    let mut required: Vec<TableRef> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for r in refs {
        if seen.insert(r.table.as_str()) {
            required.push(r.clone());
        }
    }

    if required.is_empty() {
        return Err(CompileError::new(
            CompileErrorKind::EmptyProjection,
            "no physical tables referenced by the query",
            "/projections",
        ));
    }

    let driving = required[0].table.clone();
    let mut order: Vec<String> = vec![driving.clone()];
    let mut visited: HashSet<String> = HashSet::from([driving.clone()]);
    let mut parent: std::collections::HashMap<String, (String, String, String)> =
        std::collections::HashMap::new();

    let mut remaining: HashSet<&str> = required.iter().map(|r| r.table.as_str()).collect();
    remaining.remove(driving.as_str());

    let mut queue: VecDeque<String> = VecDeque::from([driving.clone()]);
    while !remaining.is_empty() {
        let Some(cur) = queue.pop_front() else {
            break;
        };
        for (_, fk) in catalog.edges_of(&cur) {
            let Some((from_col, other_table, other_col)) = fk.hop_from(&cur) else {
                continue;
            };
            if visited.contains(other_table) {
                continue;
            }
            visited.insert(other_table.to_string());
            parent.insert(
                other_table.to_string(),
                (cur.clone(), from_col.to_string(), other_col.to_string()),
            );
            order.push(other_table.to_string());
            remaining.remove(other_table);
            queue.push_back(other_table.to_string());
        }
    }

    if !remaining.is_empty() {
        let missing = required
            .iter()
            .find(|r| !visited.contains(r.table.as_str()))
            .expect("remaining implies at least one required table unvisited");
        return Err(CompileError::new(
            CompileErrorKind::DisconnectedJoinGraph,
            format!(
                "table '{}' is not reachable from driving table '{}' via the foreign-key graph",
                missing.table, driving
            ),
            missing.location.clone(),
        ));
    }

    // The BFS above may have discovered tables (e.g. a branch off a table
    // that happened to be on the way to a required one) that no entity
    // actually references and that no required table needs to pass
    // through. Prune `order` down to exactly the required tables plus the
    // bridge tables that lie on a path from `driving` to one of them, by
    // walking each required table's parent chain back to the driving
    // table and keeping only what that walk touches.
    let mut needed: HashSet<String> = HashSet::from([driving.clone()]);
    for r in &required {
        let mut cur = r.table.clone();
        while cur != driving {
            if !needed.insert(cur.clone()) {
                break;
            }
            let (via_table, _, _) = parent
                .get(&cur)
                .expect("a required, reachable table has a parent chain back to the driving table");
            cur = via_table.clone();
        }
    }
    let order: Vec<String> = order.into_iter().filter(|t| needed.contains(t)).collect();

    let mut tables = Vec::with_capacity(order.len());
    let mut alias_of: std::collections::HashMap<String, String> = std::collections::HashMap::new();
    for (i, table) in order.iter().enumerate() {
        alias_of.insert(table.clone(), format!("t{}", i + 1));
    }
    for table in &order {
        let alias = alias_of[table].clone();
        // Stored as (via_table, via_table's column, this table's column) —
        // name the destructured bindings to match, not positionally.
        let join = parent.get(table).map(|(via_table, via_column, this_column)| JoinEdge {
            this_column: this_column.clone(),
            via_table_alias: alias_of[via_table].clone(),
            via_column: via_column.clone(),
        });
        tables.push(PlannedTable {
            table: table.clone(),
            alias,
            join,
        });
    }

    Ok(JoinPlan { tables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl2sql_catalog::{parse, SemanticCatalog};

    fn s2_catalog() -> SemanticCatalog {
        let doc = parse(
            r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
foreign_keys:
  - left_table: customers
    left_column: id
    right_table: orders
    right_column: customer_id
  - left_table: orders
    left_column: id
    right_table: order_items
    right_column: order_id
"#,
        )
        .unwrap();
        SemanticCatalog::try_from(doc).unwrap()
    }

    fn refs(tables: &[&str]) -> Vec<TableRef> {
        tables
            .iter()
            .enumerate()
            .map(|(i, t)| TableRef {
                table: t.to_string(),
                location: format!("/projections/{i}/entity"),
            })
            .collect()
    }

    #[test]
    fn single_table_needs_no_join() {
        let catalog = s2_catalog();
        let result = plan(&refs(&["customers"]), &catalog).unwrap();
        assert_eq!(result.tables.len(), 1);
        assert_eq!(result.tables[0].alias, "t1");
        assert!(result.tables[0].join.is_none());
    }

    #[test]
    fn chains_through_bridge_table() {
        let catalog = s2_catalog();
        let result = plan(&refs(&["customers", "order_items"]), &catalog).unwrap();
        let tables: Vec<&str> = result.tables.iter().map(|t| t.table.as_str()).collect();
        assert_eq!(tables, vec!["customers", "orders", "order_items"]);
        assert_eq!(result.tables[0].alias, "t1");
        assert_eq!(result.tables[1].alias, "t2");
        assert_eq!(result.tables[2].alias, "t3");
        assert!(result.tables[1].join.is_some());
        assert!(result.tables[2].join.is_some());
    }

    #[test]
    fn driving_table_is_first_reference() {
        let catalog = s2_catalog();
        let result = plan(&refs(&["order_items", "customers"]), &catalog).unwrap();
        assert_eq!(result.tables[0].table, "order_items");
    }

    #[test]
    fn disconnected_graph_is_an_error() {
        let doc = parse(
            r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
"#,
        )
        .unwrap();
        let catalog = SemanticCatalog::try_from(doc).unwrap();
        let err = plan(&refs(&["customers", "order_items"]), &catalog).unwrap_err();
        assert_eq!(err.kind, nl2sql_ir::CompileErrorKind::DisconnectedJoinGraph);
    }

    #[test]
    fn empty_refs_is_empty_projection() {
        let catalog = s2_catalog();
        let err = plan(&[], &catalog).unwrap_err();
        assert_eq!(err.kind, nl2sql_ir::CompileErrorKind::EmptyProjection);
    }

    #[test]
    fn does_not_pull_in_an_unreferenced_branch_table() {
        // customers -> orders -> order_items -> products. Only
        // order_items and customers are referenced; `products` hangs off
        // order_items but nothing needs it, so it must not appear in the
        // plan even though the BFS discovers it on the way to `customers`.
        let doc = parse(
            r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
  sales_amount:
    type: metric
    expression: "order_items.quantity * order_items.unit_price"
    tables: [order_items]
    default_agg: SUM
foreign_keys:
  - left_table: customers
    left_column: id
    right_table: orders
    right_column: customer_id
  - left_table: orders
    left_column: id
    right_table: order_items
    right_column: order_id
  - left_table: order_items
    left_column: product_id
    right_table: products
    right_column: id
"#,
        )
        .unwrap();
        let catalog = SemanticCatalog::try_from(doc).unwrap();
        let result = plan(&refs(&["order_items", "customers"]), &catalog).unwrap();
        let tables: Vec<&str> = result.tables.iter().map(|t| t.table.as_str()).collect();
        assert_eq!(tables, vec!["order_items", "orders", "customers"]);
        assert!(!tables.contains(&"products"));
    }
}
