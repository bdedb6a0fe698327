//! Report CLI commands: balances and category totals

use crate::error::SplitResult;
use crate::reports::{BalanceReport, CategoryReport};
use crate::storage::Storage;

/// Print who is owed and who owes
///
/// With `by_currency`, one report per currency instead of a single mixed
/// total.
pub fn handle_balances(storage: &Storage, by_currency: bool) -> SplitResult<()> {
    if by_currency {
        let reports = BalanceReport::generate_by_currency(storage)?;
        if reports.is_empty() {
            print!("{}", BalanceReport::generate(storage)?.format_terminal());
        }
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", report.format_terminal());
        }
    } else {
        print!("{}", BalanceReport::generate(storage)?.format_terminal());
    }
    Ok(())
}

pub fn handle_categories(storage: &Storage) -> SplitResult<()> {
    print!("{}", CategoryReport::generate(storage)?.format_terminal());
    Ok(())
}
