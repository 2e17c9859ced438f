// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{category_breakdown, category_date_pivot, daily_series, share_percent};
use crate::config::AppConfig;
use crate::session::Session;
use crate::utils::{fmt_money, fmt_opt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Decimal,
    pub share: Option<Decimal>,
}

pub fn breakdown_rows(session: &Session) -> Vec<CategoryRow> {
    let total = session.summary().total_expense;
    let mut rows: Vec<CategoryRow> = category_breakdown(session.ledger())
        .into_iter()
        .map(|(cat, amount)| CategoryRow {
            category: cat.to_string(),
            amount,
            share: share_percent(amount, total),
        })
        .collect();
    // Stable sort keeps canonical category order between equal amounts.
    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

pub fn breakdown(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let rows = breakdown_rows(session);
    let insights = session.insights();
    if maybe_print_json(
        sub.get_flag("json"),
        &serde_json::json!({ "categories": rows, "insights": insights }),
    )? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("No expenses to visualize yet.");
        return Ok(());
    }
    let ccy = cfg.currency.as_str();
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                fmt_money(&r.amount, ccy),
                r.share
                    .map(|s| format!("{}%", s))
                    .unwrap_or_else(|| "N/A".into()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], data));

    let top = match (insights.top_category, insights.top_category_share) {
        (Some(cat), Some(share)) => format!("{} ({}% of total)", cat, share),
        (Some(cat), None) => cat.to_string(),
        _ => "N/A".into(),
    };
    let facts = vec![
        vec!["Top Category".into(), top],
        vec![
            "Largest Expense".into(),
            fmt_opt_money(insights.largest_expense, ccy),
        ],
        vec![
            "Average Expense".into(),
            fmt_opt_money(insights.average_expense, ccy),
        ],
    ];
    println!("{}", pretty_table(&["Insight", "Value"], facts));
    Ok(())
}

pub fn daily(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let series = daily_series(session.ledger());
    if maybe_print_json(sub.get_flag("json"), &series)? {
        return Ok(());
    }
    let ccy = cfg.currency.as_str();
    let data = series
        .iter()
        .map(|(d, amt)| vec![d.to_string(), fmt_money(amt, ccy)])
        .collect();
    println!("{}", pretty_table(&["Date", "Spent"], data));
    Ok(())
}

pub fn pivot(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let pivot = category_date_pivot(session.ledger());
    if maybe_print_json(sub.get_flag("json"), &pivot)? {
        return Ok(());
    }
    let Some(pivot) = pivot else {
        println!("Pivot needs at least two categories and two dates.");
        return Ok(());
    };
    let mut headers = vec!["Category".to_string()];
    headers.extend(pivot.dates.iter().map(|d| d.to_string()));
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let data = pivot
        .categories
        .iter()
        .zip(&pivot.cells)
        .map(|(cat, cells)| {
            let mut row = vec![cat.to_string()];
            row.extend(cells.iter().map(|c| fmt_money(c, &cfg.currency)));
            row
        })
        .collect();
    println!("{}", pretty_table(&header_refs, data));
    Ok(())
}
