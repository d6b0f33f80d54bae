// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Identifier grammar
//!
//! All identifiers (table, column, alias) are validated against a simple
//! grammar at catalog load; quoted identifiers with embedded specials
//! are out of scope.

use crate::error::CatalogError;

pub fn validate(name: &str) -> Result<(), CatalogError> {
    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if first_ok && rest_ok {
        Ok(())
    } else {
        Err(CatalogError::InvalidIdentifier(name.to_string()))
    }
}
