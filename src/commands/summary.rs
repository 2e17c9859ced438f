// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::Summary;
use crate::config::AppConfig;
use crate::feedback::Status;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryView {
    #[serde(flatten)]
    pub summary: Summary,
    pub status: Status,
    pub message: &'static str,
}

pub fn view(session: &Session) -> SummaryView {
    let status = session.status();
    SummaryView {
        summary: session.summary(),
        status,
        message: status.message(),
    }
}

pub fn handle(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let v = view(session);
    if maybe_print_json(sub.get_flag("json"), &v)? {
        return Ok(());
    }
    let ccy = cfg.currency.as_str();
    let s = &v.summary;
    let rows = vec![
        vec!["Total Income".into(), fmt_money(&s.income, ccy)],
        vec!["Total Expenses".into(), fmt_money(&s.total_expense, ccy)],
        vec!["Remaining Budget".into(), fmt_money(&s.remaining, ccy)],
        vec!["Savings Goal".into(), fmt_money(&s.goal, ccy)],
        vec!["Savings Achieved".into(), fmt_money(&s.savings_achieved, ccy)],
        vec!["Progress".into(), format!("{}%", s.progress_display())],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    println!("{}", v.message);
    Ok(())
}
