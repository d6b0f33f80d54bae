// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Foreign key edges
//!
//! An undirected edge between two `(table, column)` pairs. Declaration
//! order is preserved in `SemanticCatalog` — it is semantically
//! significant for the join planner's tie-breaking rule.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub left_table: String,
    pub left_column: String,
    pub right_table: String,
    pub right_column: String,
}

impl ForeignKey {
    /// The table on the opposite end of this edge from `from`, if `from`
    /// participates in the edge at all.
    pub fn other_side(&self, from: &str) -> Option<&str> {
        if self.left_table == from {
            Some(&self.right_table)
        } else if self.right_table == from {
            Some(&self.left_table)
        } else {
            None
        }
    }

    /// The `(local_column, other_table, other_column)` triple for the
    /// endpoint matching `from`.
    pub fn hop_from(&self, from: &str) -> Option<(&str, &str, &str)> {
        if self.left_table == from {
            Some((&self.left_column, &self.right_table, &self.right_column))
        } else if self.right_table == from {
            Some((&self.right_column, &self.left_table, &self.left_column))
        } else {
            None
        }
    }
}
