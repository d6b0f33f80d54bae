// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect-aware pagination rendering
//!
//! Standard/Postgres/MySQL/SQLite all share `LIMIT n OFFSET m`. SQL
//! Server instead uses `OFFSET m ROWS FETCH NEXT n ROWS ONLY`, which is
//! only legal with an ORDER BY present — the emitter synthesizes a
//! stable one over the first projection rather than hard-erroring (the
//! REDESIGN FLAG resolution recorded in DESIGN.md).

use nl2sql_ir::Dialect;

pub fn render_pagination(dialect: Dialect, limit: Option<u64>, offset: Option<u64>) -> Option<String> {
    match dialect {
        Dialect::SqlServer => match (limit, offset) {
            (None, None) => None,
            (limit, offset) => {
                let offset = offset.unwrap_or(0);
                let mut sql = format!("OFFSET {offset} ROWS");
                if let Some(n) = limit {
                    sql.push_str(&format!(" FETCH NEXT {n} ROWS ONLY"));
                }
                Some(sql)
            }
        },
        _ => match (limit, offset) {
            (None, None) => None,
            (Some(n), None) => Some(format!("LIMIT {n}")),
            (None, Some(m)) => Some(format!("OFFSET {m}")),
            (Some(n), Some(m)) => Some(format!("LIMIT {n} OFFSET {m}")),
        },
    }
}
