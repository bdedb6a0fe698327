//! Table document export
//!
//! A plain-text table of the ledger, suitable for printing or pasting into
//! a message.

use std::io::Write;

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{SplitError, SplitResult};
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Participants")]
    participants: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.format_with_currency(&expense.currency),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.clone(),
            participants: expense.participant_names(),
        }
    }
}

/// Render the expenses as a text table
pub fn render_expense_table(expenses: &[Expense]) -> String {
    let mut table = Table::new(expenses.iter().map(ExpenseRow::from));
    table.with(Style::ascii());
    table.to_string()
}

/// Export the expense table with a short title block
pub fn export_expense_table<W: Write>(
    expenses: &[Expense],
    generated_at: DateTime<Utc>,
    writer: &mut W,
) -> SplitResult<()> {
    let export_err = |e: std::io::Error| SplitError::Export(e.to_string());

    writeln!(writer, "Expense Report").map_err(export_err)?;
    writeln!(
        writer,
        "Generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "{}", render_expense_table(expenses)).map_err(export_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, FriendId, Money, Participant, SplitMethod};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        let draft = ExpenseDraft::new(
            "Museum tickets",
            Money::from_units(42, 50),
            "EUR",
            NaiveDate::from_ymd_opt(2025, 7, 9).unwrap(),
        )
        .with_category("entertainment")
        .with_participants(
            vec![
                Participant::new(FriendId::new(), "Charlie", Money::from_cents(2125)),
                Participant::new(FriendId::new(), "David", Money::from_cents(2125)),
            ],
            SplitMethod::Equal,
        );
        Expense::from_draft(draft, ExpenseId::new(), Utc::now())
    }

    #[test]
    fn test_table_columns() {
        let table = render_expense_table(&[sample()]);
        let header = table.lines().nth(1).unwrap();
        for column in ["Title", "Amount", "Date", "Category", "Participants"] {
            assert!(header.contains(column), "missing {column}");
        }
        assert!(table.contains("EUR 42.50"));
        assert!(table.contains("Charlie, David"));
    }

    #[test]
    fn test_export_has_title_block() {
        let mut buffer = Vec::new();
        export_expense_table(&[sample()], Utc::now(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("Expense Report\nGenerated on: "));
        assert!(output.contains("Museum tickets"));
    }
}
