// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Semantic catalog
//!
//! The read-only, one-shot-constructed value the compiler resolves
//! entity names and join paths against. Built exclusively via
//! `TryFrom<CatalogDocument>` (see [`crate::document`]) — there is no
//! public mutator; the catalog is an immutable value once built.

use std::collections::BTreeMap;

use nl2sql_ir::{CompileError, CompileErrorKind, CompileResult};

use crate::entity::Entity;
use crate::foreign_key::ForeignKey;
use crate::severity::EnumSeverity;
use crate::table::PhysicalTable;

#[derive(Debug, Clone)]
pub struct SemanticCatalog {
    entities: BTreeMap<String, Entity>,
    foreign_keys: Vec<ForeignKey>,
    /// Adjacency list: table name -> indices into `foreign_keys` whose
    /// edge touches that table, in declaration order. This order is what
    /// makes the join planner's tie-breaking deterministic.
    adjacency: BTreeMap<String, Vec<usize>>,
    /// Only populated when the document declared a `tables` section.
    tables: BTreeMap<String, PhysicalTable>,
    enum_severity: EnumSeverity,
}

impl SemanticCatalog {
    pub(crate) fn new(
        entities: BTreeMap<String, Entity>,
        foreign_keys: Vec<ForeignKey>,
        tables: BTreeMap<String, PhysicalTable>,
        enum_severity: EnumSeverity,
    ) -> Self {
        let mut adjacency: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, fk) in foreign_keys.iter().enumerate() {
            adjacency
                .entry(fk.left_table.clone())
                .or_default()
                .push(index);
            adjacency
                .entry(fk.right_table.clone())
                .or_default()
                .push(index);
        }
        tracing::debug!(
            entities = entities.len(),
            tables = tables.len(),
            foreign_keys = foreign_keys.len(),
            "built semantic catalog"
        );
        Self {
            entities,
            foreign_keys,
            adjacency,
            tables,
            enum_severity,
        }
    }

    pub fn enum_severity(&self) -> EnumSeverity {
        self.enum_severity
    }

    /// Resolve an entity name to its definition. `UnknownEntity` is a
    /// compile-time error, not a catalog load-time one — the catalog
    /// itself never rejects an unresolved lookup at construction.
    pub fn resolve_entity(&self, name: &str) -> CompileResult<&Entity> {
        self.entities.get(name).ok_or_else(|| {
            CompileError::new(
                CompileErrorKind::UnknownEntity,
                format!("unknown entity '{name}'"),
                format!("/entities/{name}"),
            )
        })
    }

    /// The physical tables an entity's expression touches, in
    /// declaration order (one for attributes, one or more for metrics).
    pub fn tables_of(&self, entity: &Entity) -> Vec<&str> {
        entity.required_tables()
    }

    /// The declared enum value set for an attribute, if any. `None` for
    /// metrics and for unconstrained attributes.
    pub fn enum_values(&self, entity: &Entity) -> Option<&std::collections::BTreeSet<nl2sql_ir::Scalar>> {
        match entity {
            Entity::Attribute { enum_values, .. } => enum_values.as_ref(),
            Entity::Metric { .. } => None,
        }
    }

    /// Foreign-key edges incident to `table`, in declaration order.
    pub fn edges_of<'a>(&'a self, table: &str) -> impl Iterator<Item = (usize, &'a ForeignKey)> {
        self.adjacency
            .get(table)
            .into_iter()
            .flatten()
            .map(move |&idx| (idx, &self.foreign_keys[idx]))
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn table(&self, name: &str) -> Option<&PhysicalTable> {
        self.tables.get(name)
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }
}
