// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Enum-value check severity
//!
//! A literal outside an attribute's declared `enum_values` is a warning
//! or an error, per configuration. The catalog document can dial this
//! per-catalog; the compiler defaults to `Error` when the document is
//! silent.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumSeverity {
    Warn,
    #[default]
    Error,
}
