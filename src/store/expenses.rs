//! Expense ledger slice

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub spent_on: NaiveDate,
}

/// Input for a new expense
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub spent_on: NaiveDate,
}

/// The user's expenses, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseLedger {
    items: Vec<Expense>,
    next_id: u32,
}

impl ExpenseLedger {
    /// Record an expense and return its id
    pub fn add(&mut self, expense: NewExpense) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Expense {
            id,
            title: expense.title,
            amount: expense.amount,
            category: expense.category,
            spent_on: expense.spent_on,
        });
        id
    }

    pub fn remove(&mut self, id: u32) -> Option<Expense> {
        let idx = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(idx))
    }

    pub fn items(&self) -> &[Expense] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|e| e.amount).sum()
    }

    /// Total spent per category
    pub fn totals_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for e in &self.items {
            *totals.entry(e.category.clone()).or_insert(0.0) += e.amount;
        }
        totals
    }

    /// Total spent per (year, month)
    pub fn monthly_totals(&self) -> BTreeMap<(i32, u32), f64> {
        let mut totals = BTreeMap::new();
        for e in &self.items {
            *totals
                .entry((e.spent_on.year(), e.spent_on.month()))
                .or_insert(0.0) += e.amount;
        }
        totals
    }

    /// Average monthly spend over the months that have expenses
    pub fn average_monthly(&self) -> Option<f64> {
        let months = self.monthly_totals();
        if months.is_empty() {
            return None;
        }
        Some(months.values().sum::<f64>() / months.len() as f64)
    }
}
