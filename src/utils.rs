// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{BudgetError, BudgetResult};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BudgetError::InvalidDate(s.trim().to_string()))
}

pub fn parse_decimal(s: &str) -> BudgetResult<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| BudgetError::InvalidAmount(s.trim().to_string()))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

pub fn fmt_opt_money(d: Option<Decimal>, ccy: &str) -> String {
    d.map(|v| fmt_money(&v, ccy))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_trims_input() {
        let d = parse_date(" 2024-03-09 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert!(matches!(parse_date("09/03/2024"), Err(BudgetError::InvalidDate(_))));
    }

    #[test]
    fn fmt_money_rounds_to_cents() {
        assert_eq!(fmt_money(&Decimal::new(12345, 3), "PKR"), "PKR 12.35");
        assert_eq!(fmt_opt_money(None, "PKR"), "N/A");
    }
}
