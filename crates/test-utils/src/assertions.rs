// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL-shape assertions
//!
//! The emitter joins clauses with newlines purely for readability — no
//! clause boundary is semantically significant, so tests should compare
//! SQL by its line shape, not by an exact byte match that would break
//! the moment a trailing space moves. [`assert_sql_eq`] normalizes both
//! sides before comparing.

/// Assert that `actual` and `expected` are the same SQL modulo leading
/// and trailing whitespace on each line.
#[track_caller]
pub fn assert_sql_eq(actual: &str, expected: &str) {
    let normalize = |s: &str| -> Vec<&str> { s.lines().map(str::trim).filter(|l| !l.is_empty()).collect() };
    let actual_lines = normalize(actual);
    let expected_lines = normalize(expected);
    assert_eq!(
        actual_lines, expected_lines,
        "\n--- actual ---\n{actual}\n--- expected ---\n{expected}\n"
    );
}
