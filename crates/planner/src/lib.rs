// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Join planner
//!
//! Given the set of physical tables referenced by a resolved IR, computes
//! a minimal connected subgraph of the catalog's foreign-key graph that
//! spans them and assigns stable `t1, t2, …` aliases.

pub mod plan;

pub use plan::{plan, JoinEdge, JoinPlan, PlannedTable, TableRef};
