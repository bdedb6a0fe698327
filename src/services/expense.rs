//! Expense service
//!
//! Validates drafts the way the add-expense form does, then appends them to
//! the ledger and records the change in the audit log.

use crate::audit::EntityType;
use crate::error::{SplitError, SplitResult};
use crate::models::category::normalize_currency;
use crate::models::{Expense, ExpenseDraft};
use crate::storage::Storage;

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense
    ///
    /// Validation failures come back as `SplitError::ExpenseValidation`
    /// naming the offending field; nothing reaches the ledger in that case.
    pub fn add(&self, mut draft: ExpenseDraft) -> SplitResult<Expense> {
        draft
            .validate()
            .map_err(|e| SplitError::ExpenseValidation {
                field: e.field(),
                message: e.to_string(),
            })?;

        draft.title = draft.title.trim().to_string();
        draft.category = draft.category.trim().to_string();
        if let Some(code) = normalize_currency(&draft.currency) {
            draft.currency = code;
        }

        let expense = self.storage.expenses.append(draft)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.title.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// All expenses, oldest first
    pub fn list(&self) -> SplitResult<Vec<Expense>> {
        self.storage.expenses.all()
    }

    /// Find an expense by full or short id
    pub fn find(&self, identifier: &str) -> SplitResult<Expense> {
        self.storage
            .expenses
            .find(identifier)?
            .ok_or_else(|| SplitError::expense_not_found(identifier))
    }

    pub fn count(&self) -> SplitResult<usize> {
        self.storage.expenses.count()
    }
}
