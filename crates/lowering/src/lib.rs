// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # NL2SQL Expression Lowerer
//!
//! Translates resolved IR constructs — entity references, projections,
//! filter/having trees, and order-by entries — into SQL fragments bound
//! to the table aliases chosen by [`nl2sql_planner`]. This crate never
//! decides *which* tables participate in the query; it only
//! rewrites already-resolved references against a finished [`JoinPlan`].

pub mod clock;
pub mod condition;
pub mod entity;
pub mod literal;
pub mod order_by;
pub mod projection;

pub use clock::{Clock, DateRange, FixedClock, SystemClock};
pub use condition::{lower_filter_group, ClauseKind};
pub use entity::{lower_entity, lower_resolved_entity, EntityFragment};
pub use order_by::{lower_order_by, LoweredOrderBy};
pub use projection::{lower_projection, LoweredProjection};
