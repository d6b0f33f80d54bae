// Copyright (c) 2026 the nl2sql-compiler contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Clock injection
//!
//! Semantic temporal operators (`LAST_MONTH`, `LAST_N_DAYS`, `THIS_YEAR`)
//! must resolve against an injected notion of "today", not the process
//! clock, so that compilation stays deterministic and tests stay
//! reproducible.

use chrono::{Datelike, Duration, NaiveDate};
use nl2sql_ir::{CmpOp, CompileError, CompileErrorKind, CompileResult, ConditionValue};

/// Supplies "today" to the compiler. Implementations must be `Send +
/// Sync` so the compiler stays safely callable from any thread.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Resolves to the real wall-clock date. Used by the CLI; never by tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// An inclusive date range, rendered by the caller as `BETWEEN a AND b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Resolve a temporal operator against `clock` into the date range its
/// `BETWEEN` predicate spans.
pub fn resolve_temporal(
    op: CmpOp,
    value: Option<&ConditionValue>,
    clock: &dyn Clock,
    location: &str,
) -> CompileResult<DateRange> {
    let today = clock.today();
    match op {
        CmpOp::LastMonth => {
            let first_of_this_month = today.with_day(1).expect("day 1 always valid");
            let last_of_prev_month = first_of_this_month - Duration::days(1);
            let start = last_of_prev_month.with_day(1).expect("day 1 always valid");
            Ok(DateRange {
                start,
                end: last_of_prev_month,
            })
        }
        CmpOp::ThisYear => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 always valid");
            let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("Dec 31 always valid");
            Ok(DateRange { start, end })
        }
        CmpOp::LastNDays => match value {
            Some(ConditionValue::Window { days }) if *days >= 0 => Ok(DateRange {
                start: today - Duration::days(*days),
                end: today,
            }),
            _ => Err(CompileError::new(
                CompileErrorKind::OperatorValueMismatch,
                "LAST_N_DAYS requires a non-negative window value",
                location,
            )),
        },
        _ => Err(CompileError::new(
            CompileErrorKind::UnsupportedOperator,
            format!("'{op:?}' is not a semantic temporal operator"),
            location,
        )),
    }
}
