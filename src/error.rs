// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the ledger, the session and the report builder.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: Decimal },

    #[error("Unknown category '{0}' (expected one of Food, Transport, Stationery, Utilities, Leisure, Other)")]
    UnknownCategory(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid expense '{0}', expected DATE,CATEGORY,AMOUNT[,NOTE]")]
    InvalidExpense(String),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<BudgetError>,
    },

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BudgetError {
    pub fn negative(field: &'static str, value: Decimal) -> Self {
        Self::Negative { field, value }
    }

    pub fn at_line(line: usize, source: BudgetError) -> Self {
        Self::AtLine {
            line,
            source: Box::new(source),
        }
    }
}

pub type BudgetResult<T> = Result<T, BudgetError>;
