//! JSON Export functionality
//!
//! Exports the whole session to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Friend, Money};
use crate::reports::{aggregate_by_category, BalanceReport, BalanceRow};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything in the session at export time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub friends: Vec<Friend>,

    /// Expenses in ledger order
    pub expenses: Vec<Expense>,

    /// Net balance per person, creditors first
    pub balances: Vec<BalanceRow>,

    pub category_totals: BTreeMap<String, Money>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub friend_count: usize,
    pub expense_count: usize,

    /// Currency codes used in the ledger
    pub currencies: Vec<String>,

    /// Earliest expense date
    pub earliest_expense: Option<String>,

    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl SessionSnapshot {
    /// Capture the session; nothing in `storage` is modified
    pub fn from_storage(storage: &Storage) -> SplitResult<Self> {
        let friends = storage.friends.get_all()?;
        let expenses = storage.expenses.all()?;

        let report = BalanceReport::generate(storage)?;
        let balances: Vec<BalanceRow> = report
            .to_receive
            .into_iter()
            .chain(report.to_pay)
            .chain(report.settled)
            .collect();

        let mut currencies: Vec<String> = expenses.iter().map(|e| e.currency.clone()).collect();
        currencies.sort();
        currencies.dedup();

        let metadata = ExportMetadata {
            friend_count: friends.len(),
            expense_count: expenses.len(),
            currencies,
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            category_totals: aggregate_by_category(&expenses),
            friends,
            expenses,
            balances,
            metadata,
        })
    }
}

/// Export the session to JSON format
pub fn export_snapshot_json<W: Write>(storage: &Storage, writer: &mut W) -> SplitResult<()> {
    let snapshot = SessionSnapshot::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| SplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Participant, SplitMethod};
    use crate::services::{ExpenseService, FriendService};
    use chrono::NaiveDate;

    fn populated_storage() -> Storage {
        let storage = Storage::in_memory();
        let friends = FriendService::new(&storage);
        let alice = friends.add("Alice").unwrap();
        let bob = friends.add("Bob").unwrap();

        let draft = ExpenseDraft::new(
            "Groceries",
            Money::from_units(50, 0),
            "USD",
            NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
        )
        .with_category("groceries")
        .with_payers([bob.id])
        .with_participants(
            vec![
                Participant::new(alice.id, "Alice", Money::from_units(25, 0)),
                Participant::new(bob.id, "Bob", Money::from_units(25, 0)),
            ],
            SplitMethod::Equal,
        );
        ExpenseService::new(&storage).add(draft).unwrap();
        storage
    }

    #[test]
    fn test_snapshot_contents() {
        let storage = populated_storage();
        let snapshot = SessionSnapshot::from_storage(&storage).unwrap();

        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.metadata.friend_count, 2);
        assert_eq!(snapshot.metadata.expense_count, 1);
        assert_eq!(snapshot.metadata.currencies, vec!["USD".to_string()]);
        assert_eq!(snapshot.metadata.earliest_expense.as_deref(), Some("2025-08-03"));
        assert_eq!(snapshot.category_totals["groceries"], Money::from_units(50, 0));
        assert_eq!(snapshot.balances[0].name, "Bob");
        assert_eq!(snapshot.balances[0].balance, Money::from_units(25, 0));
    }

    #[test]
    fn test_json_export_parses_back() {
        let storage = populated_storage();
        let mut buffer = Vec::new();
        export_snapshot_json(&storage, &mut buffer).unwrap();

        let parsed: SessionSnapshot = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].title, "Groceries");
        assert_eq!(storage.expenses.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_session() {
        let snapshot = SessionSnapshot::from_storage(&Storage::in_memory()).unwrap();
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.balances.is_empty());
        assert!(snapshot.metadata.earliest_expense.is_none());
    }
}
