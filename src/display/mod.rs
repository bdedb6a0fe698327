//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod expense;
pub mod friend;
pub mod report;

pub use expense::{format_expense_details, format_expense_list};
pub use friend::format_friend_list;
