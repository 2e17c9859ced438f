// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! PDF budget report.
//!
//! Building is split in three steps: free text is sanitized to the
//! single-byte font encoding, the report is laid out into pages of
//! positioned text, and the layout is rendered to PDF bytes. A report is
//! either produced whole or not at all.

pub mod layout;
pub mod pdf;
pub mod sanitize;

use crate::analytics::Summary;
use crate::config::AppConfig;
use crate::error::{BudgetError, BudgetResult};
use crate::feedback::{classify, Status};
use crate::models::{BudgetState, ExpenseRecord};
use crate::session::Session;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub use layout::Layout;
pub use sanitize::sanitize_text;

pub const PDF_MIME: &str = "application/pdf";

/// Inputs of one report, borrowed from a session at generation time.
#[derive(Debug, Clone)]
pub struct ReportData<'a> {
    pub budget: &'a BudgetState,
    pub records: &'a [ExpenseRecord],
    pub summary: Summary,
    pub status: Status,
    pub generated_on: NaiveDate,
}

impl<'a> ReportData<'a> {
    pub fn from_session(session: &'a Session, generated_on: NaiveDate) -> Self {
        let summary = session.summary();
        Self {
            budget: session.budget(),
            records: session.ledger().records(),
            status: classify(summary.income, summary.total_expense),
            summary,
            generated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

pub struct ReportBuilder<'c> {
    config: &'c AppConfig,
}

impl<'c> ReportBuilder<'c> {
    pub fn new(config: &'c AppConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, data: &ReportData<'_>) -> Layout {
        layout::layout(data, self.config)
    }

    pub fn build(&self, data: &ReportData<'_>) -> BudgetResult<ReportDocument> {
        let layout = self.layout(data);
        let raw_title = self.config.report_title();
        let title = sanitize_text(&raw_title, self.config.placeholder);
        let bytes = pdf::render(&layout, &title)?;
        info!(
            pages = layout.pages.len(),
            rows = data.records.len(),
            bytes = bytes.len(),
            "report built"
        );
        Ok(ReportDocument {
            file_name: self.config.report_file_name(),
            mime: PDF_MIME,
            bytes,
        })
    }

    /// Builds the report and moves it into `dir` under its fixed name.
    ///
    /// The bytes go to a temporary file first; the final path only appears
    /// once the whole document is on disk.
    pub fn write_to_dir(&self, data: &ReportData<'_>, dir: &Path) -> BudgetResult<PathBuf> {
        let doc = self.build(data)?;
        let target = dir.join(&doc.file_name);
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&doc.bytes)?;
        tmp.flush()?;
        tmp.persist(&target).map_err(|e| BudgetError::Io(e.error))?;
        info!(path = %target.display(), "report written");
        Ok(target)
    }
}
