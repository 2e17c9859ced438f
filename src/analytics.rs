// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures for the current month.
//!
//! Everything here is recomputed from a [`BudgetState`] and a [`Ledger`] on
//! every call; nothing is cached.

use crate::ledger::Ledger;
use crate::models::{BudgetState, Category};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub goal: Decimal,
    pub total_expense: Decimal,
    pub remaining: Decimal,
    pub savings_achieved: Decimal,
    /// Not capped; see [`Summary::progress_display`].
    pub progress_percent: i64,
}

impl Summary {
    pub fn compute(budget: &BudgetState, ledger: &Ledger) -> Self {
        let total = total_expense(ledger);
        let remaining = budget.income - total;
        let savings = remaining.max(Decimal::ZERO);
        Self {
            income: budget.income,
            goal: budget.goal,
            total_expense: total,
            remaining,
            savings_achieved: savings,
            progress_percent: progress_percent(savings, budget.goal),
        }
    }

    /// Progress clamped to 0..=100 for progress bars.
    pub fn progress_display(&self) -> u8 {
        self.progress_percent.clamp(0, 100) as u8
    }
}

/// Sums saturate at [`Decimal::MAX`] instead of overflowing.
pub fn total_expense(ledger: &Ledger) -> Decimal {
    ledger
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount))
}

pub fn progress_percent(savings: Decimal, goal: Decimal) -> i64 {
    if goal <= Decimal::ZERO {
        return 0;
    }
    savings
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|v| v.checked_div(goal))
        .and_then(|v| v.floor().to_i64())
        .unwrap_or(i64::MAX)
}

/// Spend per category, only for categories that appear in the ledger.
pub fn category_breakdown(ledger: &Ledger) -> BTreeMap<Category, Decimal> {
    let mut agg = BTreeMap::new();
    for r in ledger {
        let slot = agg.entry(r.category).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(r.amount);
    }
    agg
}

/// Highest-spend category. Ties go to the category listed first in
/// [`Category::ALL`].
pub fn top_category(breakdown: &BTreeMap<Category, Decimal>) -> Option<(Category, Decimal)> {
    let mut best: Option<(Category, Decimal)> = None;
    for (cat, amt) in breakdown {
        match best {
            Some((_, top)) if *amt <= top => {}
            _ => best = Some((*cat, *amt)),
        }
    }
    best
}

/// `part` as a percentage of `total`, one decimal place. `None` when total is zero.
pub fn share_percent(part: Decimal, total: Decimal) -> Option<Decimal> {
    if total.is_zero() {
        return None;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|v| v.checked_div(total))
        .map(|v| v.round_dp(1))
}

pub fn daily_series(ledger: &Ledger) -> BTreeMap<NaiveDate, Decimal> {
    let mut series = BTreeMap::new();
    for r in ledger {
        let slot = series.entry(r.date).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(r.amount);
    }
    series
}

/// Category x date spend table with zero-filled gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pivot {
    pub categories: Vec<Category>,
    pub dates: Vec<NaiveDate>,
    /// `cells[row][col]` for `categories[row]` and `dates[col]`.
    pub cells: Vec<Vec<Decimal>>,
}

impl Pivot {
    pub fn get(&self, category: Category, date: NaiveDate) -> Option<Decimal> {
        let row = self.categories.iter().position(|c| *c == category)?;
        let col = self.dates.iter().position(|d| *d == date)?;
        Some(self.cells[row][col])
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.categories.len(), self.dates.len())
    }
}

/// Only built when at least two categories and two dates are present.
pub fn category_date_pivot(ledger: &Ledger) -> Option<Pivot> {
    let categories: BTreeSet<Category> = ledger.iter().map(|r| r.category).collect();
    let dates: BTreeSet<NaiveDate> = ledger.iter().map(|r| r.date).collect();
    if categories.len() < 2 || dates.len() < 2 {
        return None;
    }

    let categories: Vec<Category> = categories.into_iter().collect();
    let dates: Vec<NaiveDate> = dates.into_iter().collect();
    let mut cells = vec![vec![Decimal::ZERO; dates.len()]; categories.len()];
    for r in ledger {
        // Both lookups succeed: the axes were collected from this ledger.
        if let (Ok(row), Ok(col)) = (
            categories.binary_search(&r.category),
            dates.binary_search(&r.date),
        ) {
            cells[row][col] = cells[row][col].saturating_add(r.amount);
        }
    }
    Some(Pivot {
        categories,
        dates,
        cells,
    })
}

/// Headline figures shown next to the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub top_category: Option<Category>,
    pub top_category_amount: Option<Decimal>,
    pub top_category_share: Option<Decimal>,
    pub largest_expense: Option<Decimal>,
    pub average_expense: Option<Decimal>,
}

impl Insights {
    pub fn compute(ledger: &Ledger) -> Self {
        let breakdown = category_breakdown(ledger);
        let total = total_expense(ledger);
        let top = top_category(&breakdown);
        Self {
            top_category: top.map(|(c, _)| c),
            top_category_amount: top.map(|(_, a)| a),
            top_category_share: top.and_then(|(_, a)| share_percent(a, total)),
            largest_expense: largest_expense(ledger),
            average_expense: average_expense(ledger),
        }
    }
}

pub fn largest_expense(ledger: &Ledger) -> Option<Decimal> {
    ledger.iter().map(|r| r.amount).max()
}

pub fn average_expense(ledger: &Ledger) -> Option<Decimal> {
    if ledger.is_empty() {
        return None;
    }
    total_expense(ledger)
        .checked_div(Decimal::from(ledger.len()))
        .map(|v| v.round_dp(2))
}
