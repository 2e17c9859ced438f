// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::AppConfig;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;

pub fn handle(session: &Session, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, cfg, sub)?,
        Some(("export", sub)) => export(session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExpenseRow {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// Rows in entry order.
pub fn query_rows(session: &Session) -> Vec<ExpenseRow> {
    session
        .ledger()
        .iter()
        .map(|r| ExpenseRow {
            date: r.date.to_string(),
            category: r.category.to_string(),
            amount: r.amount.to_string(),
            note: r.note_or_empty().to_string(),
        })
        .collect()
}

fn list(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session);
    if !maybe_print_json(sub.get_flag("json"), &data)? {
        let rows: Vec<Vec<String>> = session
            .ledger()
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.category.to_string(),
                    fmt_money(&r.amount, &cfg.currency),
                    r.note_or_empty().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Amount", "Note"], rows)
        );
    }
    Ok(())
}

fn export(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    let file = File::create(out).with_context(|| format!("Create {}", out))?;
    session
        .ledger()
        .export_csv(file)
        .with_context(|| format!("Export ledger to {}", out))?;
    println!("Exported {} expenses to {}", session.ledger().len(), out);
    Ok(())
}
