//! Reports module for Splitbook
//!
//! Who owes whom, and where the money went.

pub mod balances;
pub mod categories;

pub use balances::{
    compute_balances, compute_balances_by_currency, BalanceReport, BalanceRow, BalanceSheet,
};
pub use categories::{aggregate_by_category, CategoryReport, CategoryRow};
