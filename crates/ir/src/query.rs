// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Top-level IR
//!
//! `Nl2SqlIr` is the validated, structured description of a query's
//! intent: the Select-Project-Join-Group-Having-Order-Limit shape the
//! compiler is confined to. It is built upstream (by an
//! LLM-driven understanding phase that is out of scope for this crate)
//! and is consumed exactly once by the compiler driver — never mutated.

use crate::agg::AggOp;
use crate::expr::FilterGroup;
use serde::{Deserialize, Serialize};

/// A natural-language-derived analytical query, already decoded into
/// structured intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nl2SqlIr {
    /// Free-form rationale from the understanding phase. Informational
    /// only — the compiler never inspects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    pub projections: Vec<Projection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<GroupBy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub having: Option<FilterGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// A single entry in the SELECT projection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<AggOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Projection {
    pub fn is_aggregate(&self) -> bool {
        self.op.is_some()
    }

    /// The name this projection is referenceable by in HAVING/ORDER BY:
    /// its alias if one was given, otherwise the bare entity name.
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.entity)
    }
}

/// A single GROUP BY entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupBy {
    pub entity: String,
}

/// A single ORDER BY entry. `field` may reference a catalog entity or a
/// projection alias — distinguished structurally the same way HAVING
/// conditions are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderBy {
    pub field: String,
    #[serde(default = "SortDirection::default_asc")]
    pub direction: SortDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn default_asc() -> Self {
        SortDirection::Asc
    }

    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NullsOrder {
    First,
    Last,
}

impl Nl2SqlIr {
    /// Whether any projection carries an explicit aggregation operator.
    pub fn has_aggregate_projection(&self) -> bool {
        self.projections.iter().any(Projection::is_aggregate)
    }
}
