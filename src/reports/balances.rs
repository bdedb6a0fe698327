//! Balance Report
//!
//! Net position of everyone who appears in the ledger. Payers are credited
//! what they paid, participants are debited their share. A positive balance
//! means others owe that person; a negative one means they owe others.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::SplitResult;
use crate::models::{Expense, FriendId, Money};
use crate::storage::Storage;

/// Signed net amount per person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSheet {
    balances: BTreeMap<FriendId, Money>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    fn credit(&mut self, id: FriendId, amount: Money) {
        *self.balances.entry(id).or_insert_with(Money::zero) += amount;
    }

    fn debit(&mut self, id: FriendId, amount: Money) {
        *self.balances.entry(id).or_insert_with(Money::zero) -= amount;
    }

    fn apply(&mut self, expense: &Expense) {
        // Empty paid_by credits nobody; the shares are still debited.
        for (payer, paid) in expense
            .paid_by
            .iter()
            .zip(expense.amount.split_evenly(expense.paid_by.len()))
        {
            self.credit(*payer, paid);
        }

        for participant in &expense.participants {
            self.debit(participant.id, participant.share);
        }
    }

    /// Balance for one person; `None` if they never appear in the ledger
    pub fn get(&self, id: FriendId) -> Option<Money> {
        self.balances.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FriendId, Money)> + '_ {
        self.balances.iter().map(|(id, amount)| (*id, *amount))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sum of all balances
    ///
    /// Zero whenever every expense's shares add up to its amount.
    pub fn total(&self) -> Money {
        self.balances.values().sum()
    }

    /// People with a positive balance, largest first
    pub fn to_receive(&self) -> Vec<(FriendId, Money)> {
        self.partition(Money::is_positive)
    }

    /// People with a negative balance, largest debt first
    pub fn to_pay(&self) -> Vec<(FriendId, Money)> {
        self.partition(Money::is_negative)
    }

    fn partition(&self, keep: fn(&Money) -> bool) -> Vec<(FriendId, Money)> {
        let mut entries: Vec<_> = self.iter().filter(|(_, amount)| keep(amount)).collect();
        entries.sort_by(|a, b| b.1.abs().cmp(&a.1.abs()).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Net balances over the whole ledger
///
/// Amounts in different currencies are added together as-is.
pub fn compute_balances(expenses: &[Expense]) -> BalanceSheet {
    let mut sheet = BalanceSheet::new();
    for expense in expenses {
        sheet.apply(expense);
    }
    sheet
}

/// One balance sheet per currency code
pub fn compute_balances_by_currency(expenses: &[Expense]) -> BTreeMap<String, BalanceSheet> {
    let mut sheets: BTreeMap<String, BalanceSheet> = BTreeMap::new();
    for expense in expenses {
        sheets
            .entry(expense.currency.clone())
            .or_default()
            .apply(expense);
    }
    sheets
}

/// One person's line in a balance report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub friend_id: FriendId,
    pub name: String,
    pub balance: Money,
}

/// Balances with names attached, split into creditors and debtors
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    /// Currency the report is restricted to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub to_receive: Vec<BalanceRow>,
    pub to_pay: Vec<BalanceRow>,
    /// People whose expenses cancel out exactly
    pub settled: Vec<BalanceRow>,
}

impl BalanceReport {
    /// Report over every expense, currencies mixed
    pub fn generate(storage: &Storage) -> SplitResult<Self> {
        let expenses = storage.expenses.all()?;
        let names = Self::resolve_names(storage, &expenses)?;
        Ok(Self::build(None, &compute_balances(&expenses), &names))
    }

    /// One report per currency used in the ledger
    pub fn generate_by_currency(storage: &Storage) -> SplitResult<Vec<Self>> {
        let expenses = storage.expenses.all()?;
        let names = Self::resolve_names(storage, &expenses)?;
        Ok(compute_balances_by_currency(&expenses)
            .iter()
            .map(|(currency, sheet)| Self::build(Some(currency.clone()), sheet, &names))
            .collect())
    }

    /// Name lookup: latest name recorded in the ledger, then the directory
    fn resolve_names(
        storage: &Storage,
        expenses: &[Expense],
    ) -> SplitResult<HashMap<FriendId, String>> {
        let mut names: HashMap<FriendId, String> = storage
            .friends
            .get_all()?
            .into_iter()
            .map(|f| (f.id, f.name))
            .collect();

        for expense in expenses {
            for participant in &expense.participants {
                names.insert(participant.id, participant.name.clone());
            }
        }

        Ok(names)
    }

    fn build(
        currency: Option<String>,
        sheet: &BalanceSheet,
        names: &HashMap<FriendId, String>,
    ) -> Self {
        let row = |(id, balance): (FriendId, Money)| BalanceRow {
            friend_id: id,
            name: names.get(&id).cloned().unwrap_or_else(|| id.short()),
            balance,
        };

        let mut settled: Vec<BalanceRow> = sheet
            .iter()
            .filter(|(_, balance)| balance.is_zero())
            .map(row)
            .collect();
        settled.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            currency,
            to_receive: sheet.to_receive().into_iter().map(row).collect(),
            to_pay: sheet.to_pay().into_iter().map(row).collect(),
            settled,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_receive.is_empty() && self.to_pay.is_empty() && self.settled.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match &self.currency {
            Some(code) => output.push_str(&format!("Balances ({})\n", code)),
            None => output.push_str("Balances\n"),
        }
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        output.push_str("\nTo receive:\n");
        if self.to_receive.is_empty() {
            output.push_str("  (nobody)\n");
        }
        for row in &self.to_receive {
            output.push_str(&format!("  {:<24} {:>12}\n", row.name, row.balance));
        }

        output.push_str("\nTo pay:\n");
        if self.to_pay.is_empty() {
            output.push_str("  (nobody)\n");
        }
        for row in &self.to_pay {
            output.push_str(&format!("  {:<24} {:>12}\n", row.name, row.balance.abs()));
        }

        if !self.settled.is_empty() {
            output.push_str("\nSettled up:\n");
            for row in &self.settled {
                output.push_str(&format!("  {}\n", row.name));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, Participant, SplitMethod};
    use crate::services::{ExpenseService, FriendService};
    use chrono::{NaiveDate, Utc};

    fn expense(
        amount: Money,
        currency: &str,
        paid_by: &[FriendId],
        shares: &[(FriendId, &str, Money)],
    ) -> Expense {
        let draft = ExpenseDraft::new(
            "Test",
            amount,
            currency,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
        .with_payers(paid_by.iter().copied())
        .with_participants(
            shares
                .iter()
                .map(|(id, name, share)| Participant::new(*id, *name, *share))
                .collect(),
            SplitMethod::Custom,
        );
        Expense::from_draft(draft, ExpenseId::new(), Utc::now())
    }

    #[test]
    fn test_empty_ledger() {
        let sheet = compute_balances(&[]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.total(), Money::zero());
    }

    #[test]
    fn test_single_payer_even_split() {
        let a = FriendId::new();
        let b = FriendId::new();
        let ledger = vec![expense(
            Money::from_units(100, 0),
            "USD",
            &[a],
            &[(a, "A", Money::from_units(50, 0)), (b, "B", Money::from_units(50, 0))],
        )];

        let sheet = compute_balances(&ledger);
        assert_eq!(sheet.get(a), Some(Money::from_units(50, 0)));
        assert_eq!(sheet.get(b), Some(Money::from_units(-50, 0)));
        assert_eq!(sheet.total(), Money::zero());
    }

    #[test]
    fn test_payer_outside_participants() {
        let a = FriendId::new();
        let b = FriendId::new();
        let c = FriendId::new();
        let ledger = vec![expense(
            Money::from_units(100, 0),
            "USD",
            &[c],
            &[(a, "A", Money::from_units(50, 0)), (b, "B", Money::from_units(50, 0))],
        )];

        let sheet = compute_balances(&ledger);
        assert_eq!(sheet.get(c), Some(Money::from_units(100, 0)));
        assert_eq!(sheet.get(a), Some(Money::from_units(-50, 0)));
        assert_eq!(sheet.get(b), Some(Money::from_units(-50, 0)));
    }

    #[test]
    fn test_multiple_payers_split_contribution() {
        let a = FriendId::new();
        let b = FriendId::new();
        let c = FriendId::new();
        let third = Money::from_cents(3333);
        let ledger = vec![expense(
            Money::from_units(100, 0),
            "USD",
            &[a, b],
            &[(a, "A", Money::from_cents(3334)), (b, "B", third), (c, "C", third)],
        )];

        let sheet = compute_balances(&ledger);
        assert_eq!(sheet.get(a), Some(Money::from_cents(5000 - 3334)));
        assert_eq!(sheet.get(b), Some(Money::from_cents(5000 - 3333)));
        assert_eq!(sheet.get(c), Some(Money::from_cents(-3333)));
        assert_eq!(sheet.total(), Money::zero());
    }

    #[test]
    fn test_no_payers_only_debits() {
        let a = FriendId::new();
        let ledger = vec![expense(
            Money::from_units(10, 0),
            "USD",
            &[],
            &[(a, "A", Money::from_units(10, 0))],
        )];

        let sheet = compute_balances(&ledger);
        assert_eq!(sheet.get(a), Some(Money::from_units(-10, 0)));
    }

    #[test]
    fn test_partition_order() {
        let a = FriendId::new();
        let b = FriendId::new();
        let c = FriendId::new();
        let ledger = vec![
            expense(
                Money::from_units(90, 0),
                "USD",
                &[a],
                &[(b, "B", Money::from_units(60, 0)), (c, "C", Money::from_units(30, 0))],
            ),
            expense(
                Money::from_units(10, 0),
                "USD",
                &[c],
                &[(a, "A", Money::from_units(10, 0))],
            ),
        ];

        let sheet = compute_balances(&ledger);
        assert_eq!(sheet.to_receive(), vec![(a, Money::from_units(80, 0))]);
        assert_eq!(
            sheet.to_pay(),
            vec![(b, Money::from_units(-60, 0)), (c, Money::from_units(-20, 0))]
        );
    }

    #[test]
    fn test_by_currency() {
        let a = FriendId::new();
        let b = FriendId::new();
        let ledger = vec![
            expense(
                Money::from_units(20, 0),
                "USD",
                &[a],
                &[(b, "B", Money::from_units(20, 0))],
            ),
            expense(
                Money::from_units(5, 0),
                "EUR",
                &[b],
                &[(a, "A", Money::from_units(5, 0))],
            ),
        ];

        let mixed = compute_balances(&ledger);
        assert_eq!(mixed.get(a), Some(Money::from_units(15, 0)));

        let sheets = compute_balances_by_currency(&ledger);
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets["USD"].get(a), Some(Money::from_units(20, 0)));
        assert_eq!(sheets["EUR"].get(a), Some(Money::from_units(-5, 0)));
    }

    #[test]
    fn test_report_resolves_names() {
        let storage = Storage::in_memory();
        let friends = FriendService::new(&storage);
        let alice = friends.add("Alice").unwrap();
        let bob = friends.add("Bob").unwrap();

        let draft = ExpenseDraft::new(
            "Dinner",
            Money::from_units(40, 0),
            "USD",
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        )
        .with_payers([alice.id])
        .with_participants(
            vec![
                Participant::new(alice.id, "Alice", Money::from_units(20, 0)),
                Participant::new(bob.id, "Bobby", Money::from_units(20, 0)),
            ],
            SplitMethod::Equal,
        );
        ExpenseService::new(&storage).add(draft).unwrap();
        friends.remove(alice.id).unwrap();

        let report = BalanceReport::generate(&storage).unwrap();
        assert_eq!(report.to_receive[0].name, "Alice");
        assert_eq!(report.to_pay[0].name, "Bobby");

        let text = report.format_terminal();
        assert!(text.contains("To receive:"));
        assert!(text.contains("20.00"));
    }

    #[test]
    fn test_empty_report() {
        let storage = Storage::in_memory();
        let report = BalanceReport::generate(&storage).unwrap();
        assert!(report.is_empty());
        assert!(report.format_terminal().contains("No expenses recorded yet."));
    }
}
