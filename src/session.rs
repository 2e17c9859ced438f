// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{Insights, Summary};
use crate::error::{BudgetError, BudgetResult};
use crate::feedback::{classify, Status};
use crate::ledger::{Entry, Ledger};
use crate::models::{BudgetState, Category};
use crate::utils::{parse_date, parse_decimal};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Everything a single user session owns: the budget scalars and the ledger.
#[derive(Debug, Clone, Default)]
pub struct Session {
    budget: BudgetState,
    ledger: Ledger,
}

impl Session {
    pub fn new(budget: BudgetState) -> Self {
        Self {
            budget,
            ledger: Ledger::new(),
        }
    }

    pub fn budget(&self) -> &BudgetState {
        &self.budget
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn set_income(&mut self, income: Decimal) -> BudgetResult<()> {
        self.budget.set_income(income)
    }

    pub fn set_goal(&mut self, goal: Decimal) -> BudgetResult<()> {
        self.budget.set_goal(goal)
    }

    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
        note: Option<String>,
    ) -> BudgetResult<Entry> {
        self.ledger.add(date, category, amount, note)
    }

    /// Parses `DATE,CATEGORY,AMOUNT[,NOTE]`. The note may itself contain commas.
    pub fn add_expense_spec(&mut self, spec: &str) -> BudgetResult<Entry> {
        let mut parts = spec.splitn(4, ',');
        let (Some(date), Some(category), Some(amount)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(BudgetError::InvalidExpense(spec.to_string()));
        };
        let date = parse_date(date)?;
        let category: Category = category.parse()?;
        let amount = parse_decimal(amount)?;
        let note = parts.next().map(|n| n.to_string());
        self.add_expense(date, category, amount, note)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.budget, &self.ledger)
    }

    pub fn status(&self) -> Status {
        let summary = self.summary();
        classify(summary.income, summary.total_expense)
    }

    pub fn insights(&self) -> Insights {
        Insights::compute(&self.ledger)
    }
}
