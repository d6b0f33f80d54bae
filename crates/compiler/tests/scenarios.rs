// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end compile scenarios: one test per documented request shape,
//! from a bare single-table filter through nested boolean predicates,
//! HAVING-by-alias, a disconnected join graph, and SQL Server pagination.

use chrono::NaiveDate;
use nl2sql_compiler::compile;
use nl2sql_ir::{
    AggOp, BoolOp, CmpOp, Condition, ConditionValue, Dialect, FilterGroup, GroupBy, Nl2SqlIr,
    OrderBy, Projection, Scalar, SortDirection,
};
use nl2sql_lowering::FixedClock;
use nl2sql_test_utils::{
    disconnected_sales_catalog, enum_constrained_catalog, products_catalog, sales_catalog,
};

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
}

#[test]
fn basic_projection_with_string_filter() {
    let catalog = products_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection { entity: "product_name".into(), op: None, alias: None }],
        filters: Some(FilterGroup::Leaf(Condition {
            entity: Some("product_name".into()),
            entity_alias: None,
            op: CmpOp::Contains,
            value: Some(ConditionValue::Scalar(Scalar::Str("电脑".into()))),
        })),
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert_eq!(compiled.sql, "SELECT t1.name\nFROM products AS t1\nWHERE t1.name LIKE '%电脑%'");
}

#[test]
fn aggregation_with_join_group_order_and_limit() {
    let catalog = sales_catalog();
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
        having: None,
        order_by: vec![OrderBy {
            field: "total_sales".into(),
            direction: SortDirection::Desc,
            nulls: None,
        }],
        limit: Some(10),
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT t1.region, SUM(t3.quantity * t3.unit_price) AS total_sales\n\
         FROM customers AS t1 INNER JOIN orders AS t2 ON t1.id = t2.customer_id \
         INNER JOIN order_items AS t3 ON t2.id = t3.order_id\n\
         GROUP BY t1.region\n\
         ORDER BY total_sales DESC\n\
         LIMIT 10"
    );
}

#[test]
fn nested_boolean_filter_spans_three_joined_tables() {
    let catalog = sales_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection {
            entity: "sales_amount".into(),
            op: Some(AggOp::Sum),
            alias: Some("total_sales".into()),
        }],
        filters: Some(FilterGroup::Compound {
            operator: BoolOp::And,
            conditions: vec![
                FilterGroup::Leaf(Condition {
                    entity: Some("region".into()),
                    entity_alias: None,
                    op: CmpOp::Equal,
                    value: Some(ConditionValue::Scalar(Scalar::Str("中国".into()))),
                }),
                FilterGroup::Compound {
                    operator: BoolOp::Or,
                    conditions: vec![
                        FilterGroup::Leaf(Condition {
                            entity: Some("product_name".into()),
                            entity_alias: None,
                            op: CmpOp::Contains,
                            value: Some(ConditionValue::Scalar(Scalar::Str("电脑".into()))),
                        }),
                        FilterGroup::Leaf(Condition {
                            entity: Some("product_name".into()),
                            entity_alias: None,
                            op: CmpOp::Contains,
                            value: Some(ConditionValue::Scalar(Scalar::Str("手机".into()))),
                        }),
                    ],
                },
            ],
        }),
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT SUM(t1.quantity * t1.unit_price) AS total_sales\n\
         FROM order_items AS t1 INNER JOIN orders AS t2 ON t1.order_id = t2.id \
         INNER JOIN products AS t3 ON t1.product_id = t3.id \
         INNER JOIN customers AS t4 ON t2.customer_id = t4.id\n\
         WHERE (t4.region = '中国') AND ((t3.name LIKE '%电脑%') OR (t3.name LIKE '%手机%'))"
    );
}

#[test]
fn having_references_an_aggregate_projections_alias() {
    let catalog = sales_catalog();
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
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT t1.region, SUM(t3.quantity * t3.unit_price) AS total_sales\n\
         FROM customers AS t1 INNER JOIN orders AS t2 ON t1.id = t2.customer_id \
         INNER JOIN order_items AS t3 ON t2.id = t3.order_id\n\
         GROUP BY t1.region\n\
         HAVING total_sales > 1000"
    );
}

#[test]
fn disconnected_join_graph_is_a_structured_error() {
    let catalog = disconnected_sales_catalog();
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
        having: None,
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let err = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap_err();
    assert_eq!(err.kind, nl2sql_ir::CompileErrorKind::DisconnectedJoinGraph);
}

#[test]
fn sqlserver_pagination_synthesizes_order_by_from_first_projection() {
    let catalog = products_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection { entity: "product_name".into(), op: None, alias: None }],
        filters: None,
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: Some(10),
        offset: Some(20),
    };
    let compiled = compile(&ir, &catalog, Dialect::SqlServer, &clock()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT t1.name\n\
         FROM products AS t1\n\
         ORDER BY product_name ASC\n\
         OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn single_table_query_needs_no_join_clause() {
    let catalog = products_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection { entity: "product_name".into(), op: None, alias: None }],
        filters: None,
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert_eq!(compiled.sql, "SELECT t1.name\nFROM products AS t1");
}

#[test]
fn limit_zero_is_rendered_not_treated_as_absent() {
    let catalog = products_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection { entity: "product_name".into(), op: None, alias: None }],
        filters: None,
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: Some(0),
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert!(compiled.sql.ends_with("LIMIT 0"));
}

#[test]
fn last_month_resolves_to_the_prior_calendar_month_against_the_injected_clock() {
    let catalog = sales_catalog();
    let ir = Nl2SqlIr {
        intent: None,
        projections: vec![Projection { entity: "region".into(), op: None, alias: None }],
        filters: Some(FilterGroup::Leaf(Condition {
            entity: Some("region".into()),
            entity_alias: None,
            op: CmpOp::LastMonth,
            value: None,
        })),
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: None,
        offset: None,
    };
    let compiled = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap();
    assert!(compiled.sql.contains("t1.region BETWEEN '2025-09-01' AND '2025-09-30'"));
}

#[test]
fn enum_value_outside_declared_set_is_rejected() {
    let catalog = enum_constrained_catalog();
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
    let err = compile(&ir, &catalog, Dialect::Standard, &clock()).unwrap_err();
    assert_eq!(err.kind, nl2sql_ir::CompileErrorKind::EnumValueRejected);
}
