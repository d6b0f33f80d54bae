// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Filter / Having expression tree
//!
//! The boolean expression tree shared by `WHERE` and `HAVING`: a tagged
//! variant rather than a class hierarchy, so lowering is a tree fold.

use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};

/// A node in the filter/having tree: either a boolean compound of
/// children, or a single leaf condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterGroup {
    Compound {
        operator: BoolOp,
        conditions: Vec<FilterGroup>,
    },
    Leaf(Condition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOp {
    And,
    Or,
}

/// A single WHERE- or HAVING-style predicate.
///
/// `entity` names a catalog entity (WHERE-style); `entity_alias` names a
/// projection alias (HAVING-style). Exactly one of the two is present —
/// enforced during IR validation, not by the shape of this type, so that
/// deserialization stays a straightforward `#[serde(deny_unknown_fields)]`
/// struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_alias: Option<String>,
    pub op: CmpOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
}

impl Condition {
    /// The entity or alias this condition targets, whichever is present.
    pub fn target(&self) -> ConditionTarget<'_> {
        match (&self.entity, &self.entity_alias) {
            (Some(e), None) => ConditionTarget::Entity(e),
            (None, Some(a)) => ConditionTarget::Alias(a),
            (Some(e), Some(_)) => ConditionTarget::Entity(e),
            (None, None) => ConditionTarget::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionTarget<'a> {
    Entity(&'a str),
    Alias(&'a str),
    Missing,
}

/// Value carried by a condition: a scalar, a list (IN/NOT IN), a named
/// window parameter (LAST_N_DAYS), or absent (IS_NULL, LAST_MONTH, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Window { days: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CmpOp {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    Gte,
    Lte,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    Contains,
    StartsWith,
    EndsWith,
    LastMonth,
    LastNDays,
    ThisYear,
}

impl CmpOp {
    /// Plain binary comparison operators that map 1:1 to a SQL symbol.
    pub fn sql_symbol(&self) -> Option<&'static str> {
        match self {
            CmpOp::Equal => Some("="),
            CmpOp::NotEqual => Some("<>"),
            CmpOp::GreaterThan => Some(">"),
            CmpOp::LessThan => Some("<"),
            CmpOp::Gte => Some(">="),
            CmpOp::Lte => Some("<="),
            _ => None,
        }
    }

    /// Operators that take no value at all.
    pub fn is_nullary(&self) -> bool {
        matches!(
            self,
            CmpOp::IsNull | CmpOp::IsNotNull | CmpOp::LastMonth | CmpOp::ThisYear
        )
    }

    /// Operators that require a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, CmpOp::In | CmpOp::NotIn)
    }

    /// Operators that require a window value (LAST_N_DAYS).
    pub fn is_window(&self) -> bool {
        matches!(self, CmpOp::LastNDays)
    }

    /// Semantic temporal operators resolved against an injected clock.
    pub fn is_temporal(&self) -> bool {
        matches!(self, CmpOp::LastMonth | CmpOp::LastNDays | CmpOp::ThisYear)
    }
}
