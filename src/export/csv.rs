//! CSV Export functionality
//!
//! One row per expense, spreadsheet-compatible.

use std::io::Write;

use crate::error::SplitResult;
use crate::models::Expense;

/// Column headers, in order
pub const CSV_HEADERS: [&str; 10] = [
    "Title",
    "Amount",
    "Currency",
    "Date",
    "Category",
    "Split Method",
    "Participants",
    "Is Recurring",
    "Recurring Type",
    "Notes",
];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for expense in expenses {
        let recurring_type = match (expense.is_recurring, expense.recurring_type) {
            (true, Some(kind)) => kind.to_string(),
            _ => "-".to_string(),
        };

        csv_writer.write_record([
            expense.title.clone(),
            expense.amount.to_string(),
            expense.currency.clone(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.split_method.to_string(),
            expense.participant_names(),
            if expense.is_recurring { "Yes" } else { "No" }.to_string(),
            recurring_type,
            expense.notes.clone().unwrap_or_else(|| "-".to_string()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
