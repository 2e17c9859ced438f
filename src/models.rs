// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{BudgetError, BudgetResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of expense categories. Declaration order is the canonical order
/// used for breakdowns, pivot rows and tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Stationery,
    Utilities,
    Leisure,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Stationery,
        Category::Utilities,
        Category::Leisure,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Stationery => "Stationery",
            Category::Utilities => "Utilities",
            Category::Leisure => "Leisure",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BudgetError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Decimal,
    pub note: Option<String>,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        note: Option<String>,
    ) -> Self {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            date,
            category,
            amount,
            note,
        }
    }

    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Income and savings goal for the month, last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    pub income: Decimal,
    pub goal: Decimal,
}

impl BudgetState {
    pub fn new(income: Decimal, goal: Decimal) -> BudgetResult<Self> {
        let mut state = Self::default();
        state.set_income(income)?;
        state.set_goal(goal)?;
        Ok(state)
    }

    pub fn set_income(&mut self, income: Decimal) -> BudgetResult<()> {
        if income.is_sign_negative() && !income.is_zero() {
            return Err(BudgetError::negative("income", income));
        }
        self.income = income;
        Ok(())
    }

    pub fn set_goal(&mut self, goal: Decimal) -> BudgetResult<()> {
        if goal.is_sign_negative() && !goal.is_zero() {
            return Err(BudgetError::negative("goal", goal));
        }
        self.goal = goal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" LEISURE ".parse::<Category>().unwrap(), Category::Leisure);
        assert!(matches!(
            "Rent".parse::<Category>(),
            Err(BudgetError::UnknownCategory(_))
        ));
    }

    #[test]
    fn blank_note_is_dropped() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rec = ExpenseRecord::new(d, Category::Food, Decimal::ONE, Some("   ".into()));
        assert_eq!(rec.note, None);
        assert_eq!(rec.note_or_empty(), "");
    }

    #[test]
    fn budget_state_rejects_negative_goal() {
        let mut state = BudgetState::default();
        assert!(state.set_goal(Decimal::new(-1, 0)).is_err());
        assert_eq!(state.goal, Decimal::ZERO);
    }
}
