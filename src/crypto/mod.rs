//! Credential protection for Splitbook
//!
//! Argon2id password hashing for the user store and a zeroizing string for
//! passwords while they are in memory.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, verify_password};
pub use secure_memory::SecureString;
