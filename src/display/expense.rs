//! Expense display formatting
//!
//! Register-style listing and the detail view shown by `expense show`.

use super::report::{format_percentage, truncate};
use crate::models::{category_label, Expense};

/// Format a single expense as one register row
pub fn format_expense_row(expense: &Expense) -> String {
    let recurring = if expense.is_recurring { "↻" } else { " " };

    format!(
        "{} {:<13} {} {:<24} {:>14} {:<16} {}",
        recurring,
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.title, 24),
        expense.amount.format_with_currency(&expense.currency),
        truncate(category_label(&expense.category), 16),
        truncate(&expense.participant_names(), 30)
    )
}

/// Format the ledger as a register
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<13} {:<10} {:<24} {:>14} {:<16} {}\n",
        "ID", "Date", "Title", "Amount", "Category", "Participants"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output.push_str(&format!("\n{} expense(s)\n", expenses.len()));
    output
}

/// Format expense details for display
///
/// `payer_names` are the already-resolved names of `expense.paid_by`.
pub fn format_expense_details(expense: &Expense, payer_names: &[String]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.title));
    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_currency(&expense.currency)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        category_label(&expense.category)
    ));
    output.push_str(&format!("Split:       {}\n", expense.split_method));

    if payer_names.is_empty() {
        output.push_str("Paid by:     (nobody)\n");
    } else {
        output.push_str(&format!("Paid by:     {}\n", payer_names.join(", ")));
    }

    if let Some(kind) = expense.recurring_type.filter(|_| expense.is_recurring) {
        output.push_str(&format!("Recurring:   {}\n", kind));
    }

    if !expense.tags.is_empty() {
        let tags: Vec<&str> = expense.tags.iter().map(String::as_str).collect();
        output.push_str(&format!("Tags:        {}\n", tags.join(", ")));
    }

    if let Some(notes) = &expense.notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output.push_str("\nShares:\n");
    for participant in &expense.participants {
        output.push_str(&format!(
            "  {:<24} {:>12} {:>7}\n",
            truncate(&participant.name, 24),
            participant.share,
            format_percentage(expense.share_percentage(participant))
        ));
    }

    let discrepancy = expense.share_discrepancy();
    if !discrepancy.is_zero() {
        output.push_str(&format!(
            "\nWarning: shares differ from the amount by {}\n",
            discrepancy
        ));
    }

    output
}
