// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! The compiler supports a small, closed set of SQL dialects. Differences
//! between them are confined to pagination rendering and boolean literal
//! formatting — everything else in the IR is dialect-agnostic by
//! construction.

use serde::{Deserialize, Serialize};

/// Target SQL dialect for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Standard,
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// `LIMIT n OFFSET m` vs `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
    pub fn requires_order_by_for_pagination(&self) -> bool {
        matches!(self, Dialect::SqlServer)
    }

    /// Whether `TRUE`/`FALSE` keywords exist, or `1`/`0` must be used instead.
    pub fn has_boolean_literals(&self) -> bool {
        !matches!(self, Dialect::MySql | Dialect::Sqlite)
    }

    /// Whether `NULLS FIRST`/`NULLS LAST` is native ORDER BY syntax.
    pub fn supports_nulls_ordering(&self) -> bool {
        matches!(self, Dialect::Standard | Dialect::Postgres | Dialect::Sqlite)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlserver_requires_order_by() {
        assert!(Dialect::SqlServer.requires_order_by_for_pagination());
        assert!(!Dialect::Postgres.requires_order_by_for_pagination());
    }

    #[test]
    fn mysql_has_no_boolean_keyword() {
        assert!(!Dialect::MySql.has_boolean_literals());
        assert!(Dialect::Postgres.has_boolean_literals());
    }
}
