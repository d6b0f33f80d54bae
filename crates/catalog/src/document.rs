// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog document format
//!
//! The on-disk shape of a semantic catalog: a YAML document with
//! `entities`, `foreign_keys`, and an optional `tables` validation
//! section. YAML rather than plain JSON so configuration authors can
//! comment the schema.

use std::collections::{BTreeMap, BTreeSet};

use nl2sql_ir::{AggOp, Scalar};
use serde::Deserialize;

use crate::catalog::SemanticCatalog;
use crate::entity::Entity;
use crate::error::{CatalogError, CatalogResult};
use crate::foreign_key::ForeignKey;
use crate::ident;
use crate::metric_expr;
use crate::severity::EnumSeverity;
use crate::table::PhysicalTable;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    pub entities: BTreeMap<String, EntityDocument>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDocument>,
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<String>>,
    /// Severity for `EnumValueRejected`. Defaults to `Error` when the
    /// document doesn't specify it.
    #[serde(default)]
    pub enum_value_severity: EnumSeverity,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub enum EntityDocument {
    Attribute {
        table: String,
        column: String,
        #[serde(default)]
        enum_values: Option<Vec<Scalar>>,
    },
    Metric {
        expression: String,
        tables: Vec<String>,
        default_agg: AggOp,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForeignKeyDocument {
    pub left_table: String,
    pub left_column: String,
    pub right_table: String,
    pub right_column: String,
}

pub fn parse(source: &str) -> CatalogResult<CatalogDocument> {
    serde_yaml::from_str(source).map_err(|e| CatalogError::DocumentParse(e.to_string()))
}

impl TryFrom<CatalogDocument> for SemanticCatalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> CatalogResult<SemanticCatalog> {
        // Optional `tables` validation section: a declared column universe
        // entities and foreign keys are checked against, when present.
        let mut tables: BTreeMap<String, PhysicalTable> = BTreeMap::new();
        for (name, columns) in &doc.tables {
            ident::validate(name)?;
            for column in columns {
                ident::validate(column)?;
            }
            tables.insert(
                name.clone(),
                PhysicalTable::new(name.clone(), columns.iter().cloned()),
            );
        }
        let validate_tables = !tables.is_empty();

        let mut entities: BTreeMap<String, Entity> = BTreeMap::new();
        for (name, doc_entity) in doc.entities {
            ident::validate(&name)?;
            if entities.contains_key(&name) {
                return Err(CatalogError::DuplicateEntity(name));
            }

            let entity = match doc_entity {
                EntityDocument::Attribute {
                    table,
                    column,
                    enum_values,
                } => {
                    ident::validate(&table)?;
                    ident::validate(&column)?;
                    if validate_tables {
                        check_column_exists(&tables, &name, &table, &column)?;
                    }
                    Entity::Attribute {
                        table,
                        column,
                        enum_values: enum_values.map(|vs| vs.into_iter().collect::<BTreeSet<_>>()),
                    }
                }
                EntityDocument::Metric {
                    expression,
                    tables: metric_tables,
                    default_agg,
                } => {
                    if metric_tables.is_empty() {
                        return Err(CatalogError::EmptyMetricTables(name));
                    }
                    for t in &metric_tables {
                        ident::validate(t)?;
                    }
                    let default_table = if metric_tables.len() == 1 {
                        Some(metric_tables[0].as_str())
                    } else {
                        None
                    };
                    let tokens = metric_expr::tokenize(&name, &expression, default_table)?;
                    if validate_tables {
                        for token in &tokens {
                            if let metric_expr::MetricToken::ColumnRef { table, column } = token {
                                check_column_exists(&tables, &name, table, column)?;
                            }
                        }
                    }
                    Entity::Metric {
                        expression: tokens,
                        tables: metric_tables,
                        default_agg,
                    }
                }
            };
            entities.insert(name, entity);
        }

        let mut foreign_keys = Vec::with_capacity(doc.foreign_keys.len());
        for (index, fk) in doc.foreign_keys.into_iter().enumerate() {
            ident::validate(&fk.left_table)?;
            ident::validate(&fk.left_column)?;
            ident::validate(&fk.right_table)?;
            ident::validate(&fk.right_column)?;
            if validate_tables
                && (!column_exists(&tables, &fk.left_table, &fk.left_column)
                    || !column_exists(&tables, &fk.right_table, &fk.right_column))
            {
                return Err(CatalogError::MalformedForeignKey {
                    index,
                    left_table: fk.left_table,
                    left_column: fk.left_column,
                    right_table: fk.right_table,
                    right_column: fk.right_column,
                });
            }
            foreign_keys.push(ForeignKey {
                left_table: fk.left_table,
                left_column: fk.left_column,
                right_table: fk.right_table,
                right_column: fk.right_column,
            });
        }

        Ok(SemanticCatalog::new(
            entities,
            foreign_keys,
            tables,
            doc.enum_value_severity,
        ))
    }
}

fn check_column_exists(
    tables: &BTreeMap<String, PhysicalTable>,
    entity: &str,
    table: &str,
    column: &str,
) -> CatalogResult<()> {
    match tables.get(table) {
        Some(t) if t.has_column(column) => Ok(()),
        Some(_) => Err(CatalogError::DanglingColumn {
            entity: entity.to_string(),
            table: table.to_string(),
            column: column.to_string(),
        }),
        None => Err(CatalogError::UnknownTable {
            entity: entity.to_string(),
            table: table.to_string(),
        }),
    }
}

fn column_exists(tables: &BTreeMap<String, PhysicalTable>, table: &str, column: &str) -> bool {
    tables.get(table).is_some_and(|t| t.has_column(column))
}
