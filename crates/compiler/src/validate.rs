// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # IR validation
//!
//! The compiler's first pipeline stage: checks
//! field presence, operator/value-shape agreement, alias uniqueness, and
//! GROUP BY completeness before any join planning or lowering happens.
//! A successful validation produces a [`ValidatedIr`] — a zero-cost
//! marker the rest of the pipeline requires instead of re-checking these
//! invariants itself.

use std::collections::{HashMap, HashSet};
use std::ops::Deref;

use nl2sql_catalog::{Entity, EnumSeverity, SemanticCatalog};
use nl2sql_ir::{
    CmpOp, CompileError, CompileErrorKind, CompileResult, Condition, ConditionTarget,
    ConditionValue, FilterGroup, Nl2SqlIr, Scalar,
};

/// Marks an `Nl2SqlIr` that has passed [`validate`]. Carries no data of
/// its own beyond the borrow — planner/lowerer stages take this instead
/// of a plain `&Nl2SqlIr` so the type system records that validation
/// already ran.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedIr<'a>(&'a Nl2SqlIr);

impl<'a> Deref for ValidatedIr<'a> {
    type Target = Nl2SqlIr;
    fn deref(&self) -> &Nl2SqlIr {
        self.0
    }
}

/// Whether the query aggregates as a whole: either a projection carries
/// an explicit aggregation operator, or a GROUP BY is present (the
/// classic signal that triggers a metric's default aggregation to apply
/// implicitly — see DESIGN.md).
pub fn query_has_aggregates(ir: &Nl2SqlIr) -> bool {
    ir.has_aggregate_projection() || !ir.group_by.is_empty()
}

pub fn validate<'a>(ir: &'a Nl2SqlIr, catalog: &SemanticCatalog) -> CompileResult<ValidatedIr<'a>> {
    if ir.projections.is_empty() {
        return Err(CompileError::new(
            CompileErrorKind::InvalidIr,
            "projections must be a non-empty list",
            "/projections",
        ));
    }

    let mut seen_aliases: HashMap<&str, usize> = HashMap::new();
    for (i, p) in ir.projections.iter().enumerate() {
        catalog.resolve_entity(&p.entity).map_err(|e| {
            CompileError::new(e.kind, e.message, format!("/projections/{i}/entity"))
        })?;
        let name = p.output_name();
        if seen_aliases.insert(name, i).is_some() {
            return Err(CompileError::new(
                CompileErrorKind::InvalidIr,
                format!("duplicate projection output name '{name}'"),
                format!("/projections/{i}/alias"),
            ));
        }
    }

    let has_aggregates = query_has_aggregates(ir);

    // GROUP BY completeness (the classic rule): every non-aggregate
    // projection must appear in GROUP BY once the query aggregates.
    if has_aggregates {
        let grouped: HashSet<&str> = ir.group_by.iter().map(|g| g.entity.as_str()).collect();
        for (i, p) in ir.projections.iter().enumerate() {
            let is_aggregate = projection_is_aggregate(p, catalog, has_aggregates)?;
            if !is_aggregate && !grouped.contains(p.entity.as_str()) {
                return Err(CompileError::new(
                    CompileErrorKind::GroupByMismatch,
                    format!(
                        "non-aggregate projection '{}' is missing from GROUP BY",
                        p.entity
                    ),
                    format!("/projections/{i}/entity"),
                ));
            }
        }
    }

    for (i, g) in ir.group_by.iter().enumerate() {
        catalog.resolve_entity(&g.entity).map_err(|e| {
            CompileError::new(e.kind, e.message, format!("/group_by/{i}/entity"))
        })?;
    }

    // Aggregate projection output names: the only aliases HAVING may
    // reference.
    let mut aggregate_aliases: HashSet<&str> = HashSet::new();
    for p in &ir.projections {
        if projection_is_aggregate(p, catalog, has_aggregates)? {
            aggregate_aliases.insert(p.output_name());
        }
    }
    let known_aliases: HashSet<&str> = ir.projections.iter().map(|p| p.output_name()).collect();

    if let Some(tree) = &ir.filters {
        validate_tree(tree, "/filters", catalog, TreeKind::Where, &aggregate_aliases)?;
    }
    if let Some(tree) = &ir.having {
        validate_tree(tree, "/having", catalog, TreeKind::Having, &aggregate_aliases)?;
    }

    for (i, o) in ir.order_by.iter().enumerate() {
        if !known_aliases.contains(o.field.as_str()) {
            catalog.resolve_entity(&o.field).map_err(|e| {
                CompileError::new(e.kind, e.message, format!("/order_by/{i}/field"))
            })?;
        }
    }

    Ok(ValidatedIr(ir))
}

/// Whether a projection resolves to an aggregate SELECT item: either it
/// carries an explicit `op`, or it names a metric entity and the query
/// aggregates as a whole (its default aggregation then applies
/// implicitly).
fn projection_is_aggregate(
    proj: &nl2sql_ir::Projection,
    catalog: &SemanticCatalog,
    has_aggregates: bool,
) -> CompileResult<bool> {
    if proj.is_aggregate() {
        return Ok(true);
    }
    let entity = catalog.resolve_entity(&proj.entity)?;
    Ok(has_aggregates && entity.is_metric())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreeKind {
    Where,
    Having,
}

fn validate_tree(
    tree: &FilterGroup,
    location: &str,
    catalog: &SemanticCatalog,
    kind: TreeKind,
    aggregate_aliases: &HashSet<&str>,
) -> CompileResult<()> {
    match tree {
        FilterGroup::Leaf(cond) => validate_condition(cond, location, catalog, kind, aggregate_aliases),
        FilterGroup::Compound { conditions, .. } => {
            if conditions.is_empty() {
                return Err(CompileError::new(
                    CompileErrorKind::InvalidIr,
                    "a compound filter group must have at least one condition",
                    location.to_string(),
                ));
            }
            for (i, child) in conditions.iter().enumerate() {
                validate_tree(
                    child,
                    &format!("{location}/conditions/{i}"),
                    catalog,
                    kind,
                    aggregate_aliases,
                )?;
            }
            Ok(())
        }
    }
}

fn validate_condition(
    cond: &Condition,
    location: &str,
    catalog: &SemanticCatalog,
    kind: TreeKind,
    aggregate_aliases: &HashSet<&str>,
) -> CompileResult<()> {
    match cond.target() {
        ConditionTarget::Missing => {
            return Err(CompileError::new(
                CompileErrorKind::InvalidIr,
                "condition names neither an entity nor an alias",
                location.to_string(),
            ));
        }
        ConditionTarget::Alias(alias) => {
            if kind == TreeKind::Where {
                return Err(CompileError::new(
                    CompileErrorKind::InvalidIr,
                    "WHERE-style filters may not reference a projection alias",
                    location.to_string(),
                ));
            }
            if !aggregate_aliases.contains(alias) {
                return Err(CompileError::new(
                    CompileErrorKind::UnknownAlias,
                    format!("HAVING references alias '{alias}', which no aggregate projection defines"),
                    location.to_string(),
                ));
            }
        }
        ConditionTarget::Entity(name) => {
            let entity = catalog.resolve_entity(name).map_err(|e| {
                CompileError::new(e.kind, e.message, location.to_string())
            })?;
            check_value_shape(cond.op, cond.value.as_ref(), location)?;
            check_enum_membership(cond, entity, catalog, location)?;
        }
    }
    Ok(())
}

fn check_value_shape(op: CmpOp, value: Option<&ConditionValue>, location: &str) -> CompileResult<()> {
    let mismatch = || {
        CompileError::new(
            CompileErrorKind::OperatorValueMismatch,
            format!("'{op:?}' was paired with a value of the wrong shape"),
            location.to_string(),
        )
    };

    if op.is_nullary() {
        return if value.is_none() { Ok(()) } else { Err(mismatch()) };
    }
    if op.is_list() {
        return match value {
            Some(ConditionValue::List(_)) => Ok(()),
            _ => Err(mismatch()),
        };
    }
    if op.is_window() {
        return match value {
            Some(ConditionValue::Window { days }) if *days >= 0 => Ok(()),
            _ => Err(mismatch()),
        };
    }
    // Remaining operators (comparisons, CONTAINS/STARTS_WITH/ENDS_WITH,
    // THIS_YEAR already handled above as nullary) require a scalar.
    match value {
        Some(ConditionValue::Scalar(_)) => Ok(()),
        _ => Err(mismatch()),
    }
}

fn check_enum_membership(
    cond: &Condition,
    entity: &Entity,
    catalog: &SemanticCatalog,
    location: &str,
) -> CompileResult<()> {
    let Some(enum_values) = catalog.enum_values(entity) else {
        return Ok(());
    };
    let candidates: Vec<&Scalar> = match cond.value.as_ref() {
        Some(ConditionValue::Scalar(s)) => vec![s],
        Some(ConditionValue::List(values)) => values.iter().collect(),
        _ => return Ok(()),
    };
    for value in candidates {
        if !enum_values.contains(value) {
            let message = format!("value '{value}' is not in the declared enum set for this attribute");
            return match catalog.enum_severity() {
                EnumSeverity::Error => Err(CompileError::new(
                    CompileErrorKind::EnumValueRejected,
                    message,
                    location.to_string(),
                )),
                EnumSeverity::Warn => {
                    tracing::warn!(%message, location, "enum value rejected (warn severity)");
                    Ok(())
                }
            };
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl2sql_catalog::parse;
    use nl2sql_ir::{AggOp, BoolOp, GroupBy, Projection};

    fn catalog_with_enum() -> SemanticCatalog {
        let doc = parse(
            r#"
entities:
  region:
    type: attribute
    table: customers
    column: region
    enum_values: ["中国", "美国"]
  sales_amount:
    type: metric
    expression: "order_items.quantity * order_items.unit_price"
    tables: [order_items]
    default_agg: SUM
"#,
        )
        .unwrap();
        SemanticCatalog::try_from(doc).unwrap()
    }

    #[test]
    fn rejects_unknown_entity() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![Projection { entity: "ghost".into(), op: None, alias: None }],
            filters: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
        };
        let err = validate(&ir, &catalog).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::UnknownEntity);
    }

    #[test]
    fn group_by_mismatch_when_raw_projection_missing() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![
                Projection { entity: "region".into(), op: None, alias: None },
                Projection {
                    entity: "sales_amount".into(),
                    op: Some(AggOp::Sum),
                    alias: Some("total".into()),
                },
            ],
            filters: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
        };
        let err = validate(&ir, &catalog).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::GroupByMismatch);
    }

    #[test]
    fn rejects_enum_value_outside_declared_set() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![Projection { entity: "region".into(), op: None, alias: None }],
            filters: Some(FilterGroup::Leaf(Condition {
                entity: Some("region".into()),
                entity_alias: None,
                op: CmpOp::Equal,
                value: Some(ConditionValue::Scalar(Scalar::Str("法国".into()))),
            })),
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
        };
        let err = validate(&ir, &catalog).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::EnumValueRejected);
    }

    #[test]
    fn having_alias_must_be_introduced_by_an_aggregate_projection() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![
                Projection { entity: "region".into(), op: None, alias: None },
                Projection {
                    entity: "sales_amount".into(),
                    op: Some(AggOp::Sum),
                    alias: Some("total_sales".into()),
                },
            ],
            filters: None,
            group_by: vec![GroupBy { entity: "region".into() }],
            having: Some(FilterGroup::Leaf(Condition {
                entity: None,
                entity_alias: Some("ghost_alias".into()),
                op: CmpOp::GreaterThan,
                value: Some(ConditionValue::Scalar(Scalar::Int(1000))),
            })),
            order_by: vec![],
            limit: None,
            offset: None,
        };
        let err = validate(&ir, &catalog).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::UnknownAlias);
    }

    #[test]
    fn accepts_well_formed_ir() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![
                Projection { entity: "region".into(), op: None, alias: None },
                Projection {
                    entity: "sales_amount".into(),
                    op: Some(AggOp::Sum),
                    alias: Some("total_sales".into()),
                },
            ],
            filters: None,
            group_by: vec![GroupBy { entity: "region".into() }],
            having: Some(FilterGroup::Leaf(Condition {
                entity: None,
                entity_alias: Some("total_sales".into()),
                op: CmpOp::GreaterThan,
                value: Some(ConditionValue::Scalar(Scalar::Int(1000))),
            })),
            order_by: vec![],
            limit: None,
            offset: None,
        };
        assert!(validate(&ir, &catalog).is_ok());
    }

    #[test]
    fn empty_compound_is_invalid() {
        let catalog = catalog_with_enum();
        let ir = Nl2SqlIr {
            intent: None,
            projections: vec![Projection { entity: "region".into(), op: None, alias: None }],
            filters: Some(FilterGroup::Compound { operator: BoolOp::And, conditions: vec![] }),
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
        };
        let err = validate(&ir, &catalog).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::InvalidIr);
    }
}
