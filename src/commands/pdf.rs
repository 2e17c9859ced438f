// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::AppConfig;
use crate::report::{ReportBuilder, ReportData};
use crate::session::Session;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handle(session: &Session, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<PathBuf> {
    let dir = sub
        .get_one::<String>("out")
        .map(|s| PathBuf::from(s.trim()))
        .unwrap_or_else(|| PathBuf::from("."));
    let today = chrono::Local::now().date_naive();
    let data = ReportData::from_session(session, today);
    let path = ReportBuilder::new(cfg)
        .write_to_dir(&data, &dir)
        .with_context(|| format!("Error generating report in {}", dir.display()))?;
    println!("Report generated successfully: {}", path.display());
    Ok(path)
}
