//! Secure memory handling for passwords
//!
//! Passwords typed into a session are held in a [`SecureString`], which is
//! wiped when dropped and never printed.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that zeroes its contents on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Never print the contents
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_accessible() {
        let secret = SecureString::from("password123");
        assert_eq!(secret.as_str(), "password123");
        assert_eq!(&*secret, "password123");
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_not_printed() {
        let secret = SecureString::from("password123");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert!(!format!("{:?}", secret).contains("password123"));
    }

    #[test]
    fn test_explicit_zeroize() {
        let mut secret = SecureString::from("password123");
        secret.zeroize();
        assert!(secret.is_empty());
    }
}
