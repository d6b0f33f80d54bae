// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Aggregation operators
//!
//! `COUNT(DISTINCT x)` is modeled as its own variant rather than a
//! structured `{op: Count, distinct: true}` pair — either shape is a
//! faithful representation, and the flat enum is simpler to lower and
//! to round-trip through the IR document format (see DESIGN.md).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggOp {
    Sum,
    Count,
    Avg,
    Min,
    Max,
    CountDistinct,
}

impl AggOp {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            AggOp::Sum => "SUM",
            AggOp::Count => "COUNT",
            AggOp::Avg => "AVG",
            AggOp::Min => "MIN",
            AggOp::Max => "MAX",
            AggOp::CountDistinct => "COUNT",
        }
    }

    pub fn is_distinct(&self) -> bool {
        matches!(self, AggOp::CountDistinct)
    }
}
