// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Semantic entities
//!
//! An `Entity` is the catalog-level name a query IR refers to: either a
//! direct attribute (a single physical column, optionally constrained to
//! an enumerated value set) or a derived metric (an aggregate expression
//! over one or more tables).

use std::collections::BTreeSet;

use nl2sql_ir::{AggOp, Scalar};

use crate::metric_expr::MetricToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Attribute {
        table: String,
        column: String,
        /// Permitted values, if this attribute is enum-constrained.
        /// `None` means unconstrained.
        enum_values: Option<BTreeSet<Scalar>>,
    },
    Metric {
        /// Tokenized defining expression, e.g. `order_items.quantity *
        /// order_items.unit_price`.
        expression: Vec<MetricToken>,
        /// Source tables touched by the expression, in declaration
        /// order. Always non-empty (see `EmptyMetricTables`).
        tables: Vec<String>,
        default_agg: AggOp,
    },
}

impl Entity {
    /// The physical tables this entity requires in the join plan.
    pub fn required_tables(&self) -> Vec<&str> {
        match self {
            Entity::Attribute { table, .. } => vec![table.as_str()],
            Entity::Metric { tables, .. } => tables.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, Entity::Metric { .. })
    }
}
