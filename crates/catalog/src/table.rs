// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Physical tables
//!
//! A `PhysicalTable` is an immutable name plus a set of known columns.
//! Column sets are used only for the optional `tables` validation
//! section — entities and foreign keys declare their own columns
//! directly.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalTable {
    pub name: String,
    pub columns: BTreeSet<String>,
}

impl PhysicalTable {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }
}
