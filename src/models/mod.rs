//! Core data models for Splitbook
//!
//! Friends, expenses with their participants and shares, users, and the
//! fixed-point `Money` type every amount is expressed in.

pub mod category;
pub mod expense;
pub mod friend;
pub mod ids;
pub mod money;
pub mod user;

pub use category::{category_label, CATEGORIES, CURRENCIES, DEFAULT_CATEGORY};
pub use expense::{
    Expense, ExpenseDraft, ExpenseValidationError, Participant, RecurringType, SplitMethod,
};
pub use friend::Friend;
pub use ids::{ExpenseId, FriendId, UserId};
pub use money::Money;
pub use user::User;
