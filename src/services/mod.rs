//! Service layer for Splitbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, normalization, and audit logging.

pub mod auth;
pub mod expense;
pub mod friend;
pub mod split;

pub use auth::AuthService;
pub use expense::ExpenseService;
pub use friend::FriendService;
