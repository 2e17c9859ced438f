// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Entry;
use crate::models::BudgetState;
use crate::session::Session;
use crate::utils::parse_decimal;
use anyhow::{Context, Result};
use clap::{arg, Arg, ArgAction, Command};
use rust_decimal::Decimal;
use std::fs::File;
use tracing::info;

fn json_flag() -> Arg {
    arg!(--json "Print JSON instead of a table")
}

pub fn build_cli() -> Command {
    Command::new("kharchnama")
        .version(clap::crate_version!())
        .about("Monthly budget tracker: totals, category analytics and PDF reports")
        .arg(arg!(--income <AMOUNT> "Monthly income").required(false))
        .arg(arg!(--goal <AMOUNT> "Monthly savings goal").required(false))
        .arg(
            Arg::new("expense")
                .long("expense")
                .value_name("DATE,CATEGORY,AMOUNT[,NOTE]")
                .help("Record an expense; repeatable")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("expenses-csv")
                .long("expenses-csv")
                .value_name("PATH")
                .help("Read expenses from a CSV with header date,category,amount,note"),
        )
        .arg(arg!(--config <PATH> "Config file (JSON)").required(false))
        .subcommand(
            Command::new("summary")
                .about("Totals, remaining budget, savings progress and status")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Spend per category with headline insights")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("daily")
                .about("Spend per day, oldest first")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("pivot")
                .about("Category x date spend table")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("ledger")
                .about("Inspect the expense ledger")
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("export")
                        .arg(arg!(--out <PATH> "CSV file to write").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Write the PDF budget report")
                .arg(arg!(--out <DIR> "Directory for the report").required(false)),
        )
}

/// Assembles the session from the top-level input flags.
pub fn build_session(m: &clap::ArgMatches) -> Result<Session> {
    let income = match m.get_one::<String>("income") {
        Some(v) => parse_decimal(v)?,
        None => Decimal::ZERO,
    };
    let goal = match m.get_one::<String>("goal") {
        Some(v) => parse_decimal(v)?,
        None => Decimal::ZERO,
    };
    let mut session = Session::new(BudgetState::new(income, goal)?);
    if let Some(path) = m.get_one::<String>("expenses-csv") {
        let path = path.trim();
        let file = File::open(path).with_context(|| format!("Open CSV {}", path))?;
        let n = session
            .ledger_mut()
            .import_csv(file)
            .with_context(|| format!("Import expenses from {}", path))?;
        info!(rows = n, path, "expenses imported");
    }
    if let Some(specs) = m.get_many::<String>("expense") {
        for spec in specs {
            let entry = session
                .add_expense_spec(spec)
                .with_context(|| format!("Record expense '{}'", spec))?;
            if entry == Entry::Ignored {
                info!(spec = spec.as_str(), "zero-amount expense skipped");
            }
        }
    }
    Ok(session)
}
