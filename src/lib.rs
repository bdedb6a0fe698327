//! Splitbook - shared expense tracking for groups of friends
//!
//! This library provides the core functionality for the Splitbook
//! application: a roster of friends, an append-only ledger of shared
//! expenses, and reports on who owes whom and where the money went.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (friends, expenses, money, users)
//! - `storage`: In-memory session state
//! - `services`: Business logic layer
//! - `reports`: Balances and category totals
//! - `audit`: Audit logging system
//! - `crypto`: Password hashing and secure strings
//! - `export`: CSV, table, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: The interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use splitbook::config::{Settings, SplitbookPaths};
//! use splitbook::storage::Storage;
//!
//! let paths = SplitbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
