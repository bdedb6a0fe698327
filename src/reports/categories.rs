//! Category Report
//!
//! Spending per category over the whole ledger. Each expense counts with its
//! full amount, whoever paid it; currencies are not converted.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::display::report::{format_bar, format_percentage};
use crate::error::SplitResult;
use crate::models::{category_label, Expense, Money};
use crate::storage::Storage;

/// Sum of expense amounts per category id
pub fn aggregate_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(expense.category.clone())
            .or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// One category's line in the report
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub label: String,
    pub total: Money,
    pub expense_count: usize,
    /// Share of the grand total
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub rows: Vec<CategoryRow>,
    pub grand_total: Money,
    pub expense_count: usize,
}

impl CategoryReport {
    pub fn generate(storage: &Storage) -> SplitResult<Self> {
        Ok(Self::from_expenses(&storage.expenses.all()?))
    }

    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let totals = aggregate_by_category(expenses);
        let grand_total: Money = totals.values().sum();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for expense in expenses {
            *counts.entry(expense.category.as_str()).or_default() += 1;
        }

        let mut rows: Vec<CategoryRow> = totals
            .iter()
            .map(|(category, total)| {
                let percentage = if grand_total.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / grand_total.cents() as f64 * 100.0
                };
                CategoryRow {
                    category: category.clone(),
                    label: category_label(category).to_string(),
                    total: *total,
                    expense_count: counts.get(category.as_str()).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        // Largest first; ties in category id order
        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self {
            rows,
            grand_total,
            expense_count: expenses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>12} {:>6} {:>6}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        let max = self
            .rows
            .first()
            .map(|r| r.total.as_units_f64())
            .unwrap_or(0.0);

        for row in &self.rows {
            output.push_str(&format!(
                "{:<22} {:>12} {:>6} {:>6}  {}\n",
                row.label,
                row.total,
                row.expense_count,
                format_percentage(row.percentage),
                format_bar(row.total.as_units_f64(), max, 16)
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12} {:>6}\n",
            "TOTAL", self.grand_total, self.expense_count
        ));

        output
    }
}
