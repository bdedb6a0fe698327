//! Expense ledger
//!
//! An append-only, insertion-ordered list of expenses. There is no update or
//! delete.

use chrono::Utc;
use std::sync::RwLock;

use crate::error::SplitError;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

use super::{read_lock, write_lock};

#[derive(Default)]
pub struct ExpenseLedger {
    expenses: RwLock<Vec<Expense>>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a draft, assigning a fresh id and creation timestamp
    ///
    /// The draft is not validated here. Timestamps never go backwards in
    /// insertion order, even if the wall clock does.
    pub fn append(&self, draft: ExpenseDraft) -> Result<Expense, SplitError> {
        let mut expenses = write_lock(&self.expenses)?;

        let now = Utc::now();
        let created_at = match expenses.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };

        let expense = Expense::from_draft(draft, ExpenseId::new(), created_at);
        expenses.push(expense.clone());
        Ok(expense)
    }

    /// All expenses, oldest first
    pub fn all(&self) -> Result<Vec<Expense>, SplitError> {
        Ok(read_lock(&self.expenses)?.clone())
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SplitError> {
        Ok(read_lock(&self.expenses)?
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    /// Find an expense by full or short id
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, SplitError> {
        Ok(read_lock(&self.expenses)?
            .iter()
            .find(|e| e.id.matches(identifier))
            .cloned())
    }

    pub fn count(&self) -> Result<usize, SplitError> {
        Ok(read_lock(&self.expenses)?.len())
    }
}
