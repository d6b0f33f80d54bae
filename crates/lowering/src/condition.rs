// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Filter / having predicate lowering
//!
//! Lowers a `FilterGroup` tree (shared by WHERE and HAVING) into a single
//! SQL boolean expression. The tree is a tagged variant, not a class
//! hierarchy, so lowering is a straightforward recursive fold.

use nl2sql_catalog::SemanticCatalog;
use nl2sql_ir::{
    BoolOp, CmpOp, CompileError, CompileErrorKind, CompileResult, Condition, ConditionTarget,
    ConditionValue, Dialect, FilterGroup,
};
use nl2sql_planner::JoinPlan;

use crate::clock::{resolve_temporal, Clock};
use crate::entity::lower_entity;
use crate::literal::{render_like_pattern, render_list, render_scalar, LikeStyle};

/// Whether the tree being lowered is a HAVING clause. HAVING may
/// reference a metric entity directly and aggregate it inline, or
/// reference a projection alias; WHERE never aggregates, since SQL
/// forbids aggregates there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    Where,
    Having,
}

/// Lower a full filter/having tree to a single SQL boolean expression.
/// `location` is the JSON-pointer path to the tree's root (`/filters` or
/// `/having`).
pub fn lower_filter_group(
    tree: &FilterGroup,
    clause: ClauseKind,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    dialect: Dialect,
    clock: &dyn Clock,
    location: &str,
) -> CompileResult<String> {
    match tree {
        FilterGroup::Leaf(cond) => lower_condition(cond, clause, catalog, plan, dialect, clock, location),
        FilterGroup::Compound { operator, conditions } => {
            if conditions.is_empty() {
                return Err(CompileError::new(
                    CompileErrorKind::InvalidIr,
                    "a compound filter group must have at least one condition",
                    location.to_string(),
                ));
            }
            if conditions.len() == 1 {
                let child_location = format!("{location}/conditions/0");
                return lower_filter_group(
                    &conditions[0],
                    clause,
                    catalog,
                    plan,
                    dialect,
                    clock,
                    &child_location,
                );
            }
            let keyword = match operator {
                BoolOp::And => "AND",
                BoolOp::Or => "OR",
            };
            let mut parts = Vec::with_capacity(conditions.len());
            for (i, child) in conditions.iter().enumerate() {
                let child_location = format!("{location}/conditions/{i}");
                let rendered = lower_filter_group(
                    child,
                    clause,
                    catalog,
                    plan,
                    dialect,
                    clock,
                    &child_location,
                )?;
                parts.push(format!("({rendered})"));
            }
            Ok(parts.join(&format!(" {keyword} ")))
        }
    }
}

fn lower_condition(
    cond: &Condition,
    clause: ClauseKind,
    catalog: &SemanticCatalog,
    plan: &JoinPlan,
    dialect: Dialect,
    clock: &dyn Clock,
    location: &str,
) -> CompileResult<String> {
    let subject = match cond.target() {
        ConditionTarget::Alias(alias) => alias.to_string(),
        ConditionTarget::Entity(name) => {
            let frag = lower_entity(name, catalog, plan, location)?;
            if clause == ClauseKind::Having && frag.is_aggregate_default() {
                format!("{}({})", frag.default_agg.unwrap().sql_keyword(), frag.sql)
            } else {
                frag.sql
            }
        }
        ConditionTarget::Missing => {
            return Err(CompileError::new(
                CompileErrorKind::InvalidIr,
                "condition names neither an entity nor an alias",
                location.to_string(),
            ));
        }
    };

    render_predicate(&subject, cond.op, cond.value.as_ref(), dialect, clock, location)
}

fn render_predicate(
    subject: &str,
    op: CmpOp,
    value: Option<&ConditionValue>,
    dialect: Dialect,
    clock: &dyn Clock,
    location: &str,
) -> CompileResult<String> {
    if let Some(symbol) = op.sql_symbol() {
        let scalar = expect_scalar(value, location)?;
        return Ok(format!("{subject} {symbol} {}", render_scalar(scalar, dialect)));
    }

    match op {
        CmpOp::In | CmpOp::NotIn => {
            let list = expect_list(value, location)?;
            let keyword = if op == CmpOp::In { "IN" } else { "NOT IN" };
            Ok(format!("{subject} {keyword} {}", render_list(list, dialect)))
        }
        CmpOp::IsNull => {
            expect_no_value(value, location)?;
            Ok(format!("{subject} IS NULL"))
        }
        CmpOp::IsNotNull => {
            expect_no_value(value, location)?;
            Ok(format!("{subject} IS NOT NULL"))
        }
        CmpOp::Contains | CmpOp::StartsWith | CmpOp::EndsWith => {
            let scalar = expect_scalar(value, location)?;
            let raw = scalar.as_str().ok_or_else(|| {
                CompileError::new(
                    CompileErrorKind::OperatorValueMismatch,
                    format!("'{op:?}' requires a string value"),
                    location.to_string(),
                )
            })?;
            let style = match op {
                CmpOp::Contains => LikeStyle::Contains,
                CmpOp::StartsWith => LikeStyle::StartsWith,
                _ => LikeStyle::EndsWith,
            };
            Ok(format!("{subject} LIKE {}", render_like_pattern(raw, style)))
        }
        CmpOp::LastMonth | CmpOp::LastNDays | CmpOp::ThisYear => {
            let range = resolve_temporal(op, value, clock, location)?;
            Ok(format!(
                "{subject} BETWEEN '{}' AND '{}'",
                range.start.format("%Y-%m-%d"),
                range.end.format("%Y-%m-%d"),
            ))
        }
        // `sql_symbol()` returning `None` already covers every comparison
        // operator above; nothing else is a valid `CmpOp`.
        _ => Err(CompileError::new(
            CompileErrorKind::UnsupportedOperator,
            format!("'{op:?}' has no lowering rule"),
            location.to_string(),
        )),
    }
}

fn expect_scalar<'a>(
    value: Option<&'a ConditionValue>,
    location: &str,
) -> CompileResult<&'a nl2sql_ir::Scalar> {
    match value {
        Some(ConditionValue::Scalar(s)) => Ok(s),
        _ => Err(CompileError::new(
            CompileErrorKind::OperatorValueMismatch,
            "expected a scalar value",
            location.to_string(),
        )),
    }
}

fn expect_list<'a>(
    value: Option<&'a ConditionValue>,
    location: &str,
) -> CompileResult<&'a [nl2sql_ir::Scalar]> {
    match value {
        Some(ConditionValue::List(values)) => Ok(values.as_slice()),
        _ => Err(CompileError::new(
            CompileErrorKind::OperatorValueMismatch,
            "expected a list value for IN/NOT IN",
            location.to_string(),
        )),
    }
}

fn expect_no_value(value: Option<&ConditionValue>, location: &str) -> CompileResult<()> {
    if value.is_some() {
        Err(CompileError::new(
            CompileErrorKind::OperatorValueMismatch,
            "this operator takes no value",
            location.to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use nl2sql_catalog::parse;
    use nl2sql_planner::{plan, TableRef};

    fn catalog() -> SemanticCatalog {
        let doc = parse(
            r#"
entities:
  product_name:
    type: attribute
    table: products
    column: name
"#,
        )
        .unwrap();
        SemanticCatalog::try_from(doc).unwrap()
    }

    #[test]
    fn contains_renders_like_with_escaped_wildcard() {
        let catalog = catalog();
        let plan = plan(&[TableRef { table: "products".into(), location: "/x".into() }], &catalog).unwrap();
        let cond = Condition {
            entity: Some("product_name".into()),
            entity_alias: None,
            op: CmpOp::Contains,
            value: Some(ConditionValue::Scalar(nl2sql_ir::Scalar::Str("电脑".into()))),
        };
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let sql = lower_condition(&cond, ClauseKind::Where, &catalog, &plan, Dialect::Standard, &clock, "/filters").unwrap();
        assert_eq!(sql, "t1.name LIKE '%电脑%'");
    }

    #[test]
    fn alias_target_renders_bare_identifier() {
        let catalog = catalog();
        let plan = plan(&[TableRef { table: "products".into(), location: "/x".into() }], &catalog).unwrap();
        let cond = Condition {
            entity: None,
            entity_alias: Some("total_sales".into()),
            op: CmpOp::GreaterThan,
            value: Some(ConditionValue::Scalar(nl2sql_ir::Scalar::Int(1000))),
        };
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let sql = lower_condition(&cond, ClauseKind::Having, &catalog, &plan, Dialect::Standard, &clock, "/having").unwrap();
        assert_eq!(sql, "total_sales > 1000");
    }
}
