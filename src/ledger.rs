// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, ExpenseRecord};
use crate::utils::{parse_date, parse_decimal};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use rust_decimal::Decimal;
use std::io::{Read, Write};
use tracing::debug;

/// Outcome of submitting an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Recorded,
    /// Zero-amount submissions leave the ledger untouched.
    Ignored,
}

/// Append-only list of expenses, kept in entry order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        note: Option<String>,
    ) -> BudgetResult<Entry> {
        if amount.is_zero() {
            debug!(%date, %category, "ignoring zero-amount expense");
            return Ok(Entry::Ignored);
        }
        if amount.is_sign_negative() {
            return Err(BudgetError::negative("amount", amount));
        }
        let record = ExpenseRecord::new(date, category, amount, note);
        debug!(%date, %category, %amount, "expense recorded");
        self.records.push(record);
        Ok(Entry::Recorded)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads `date,category,amount,note` rows. Returns how many rows were recorded.
    pub fn import_csv<R: Read>(&mut self, rdr: R) -> BudgetResult<usize> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut pending = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let rec = result?;
            let line = idx + 2;
            let field = |i: usize| rec.get(i).unwrap_or("");
            let (date, category, amount) = parse_row(field(0), field(1), field(2))
                .map_err(|e| BudgetError::at_line(line, e))?;
            pending.push((date, category, amount, Some(field(3).to_string())));
        }

        // Rows are validated before any is recorded so a bad file changes nothing.
        let mut recorded = 0;
        for (date, category, amount, note) in pending {
            if self.add(date, category, amount, note)? == Entry::Recorded {
                recorded += 1;
            }
        }
        Ok(recorded)
    }

    pub fn export_csv<W: Write>(&self, w: W) -> BudgetResult<()> {
        let mut wtr = Writer::from_writer(w);
        wtr.write_record(["date", "category", "amount", "note"])?;
        for r in &self.records {
            wtr.write_record([
                r.date.to_string(),
                r.category.to_string(),
                r.amount.to_string(),
                r.note_or_empty().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn parse_row(
    date: &str,
    category: &str,
    amount: &str,
) -> BudgetResult<(NaiveDate, Category, Decimal)> {
    let date = parse_date(date)?;
    let category: Category = category.parse()?;
    let amount = parse_decimal(amount)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BudgetError::negative("amount", amount));
    }
    Ok((date, category, amount))
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
