//! Authentication service
//!
//! Login, registration and logout against the in-memory user store.
//! Passwords are checked against Argon2 hashes; they are never stored.

use crate::audit::{EntityType, Operation};
use crate::crypto::{hash_password, verify_password, SecureString};
use crate::error::{SplitError, SplitResult};
use crate::models::User;
use crate::storage::Storage;

pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log in with an email and password
    ///
    /// An unknown email and a wrong password fail the same way, with
    /// `SplitError::InvalidCredentials`.
    pub fn login(&self, email: &str, password: &SecureString) -> SplitResult<User> {
        let user = self
            .storage
            .users
            .get_by_email(email)?
            .ok_or(SplitError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(SplitError::InvalidCredentials);
        }

        self.storage.users.set_current(Some(user.id))?;
        self.storage
            .log_session(Operation::Login, user.id.to_string(), Some(user.name.clone()))?;

        Ok(user)
    }

    /// Create an account and log it in
    pub fn register(&self, name: &str, email: &str, password: &SecureString) -> SplitResult<User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(SplitError::Validation("Name cannot be empty".into()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(SplitError::Validation(format!("Invalid email: '{}'", email)));
        }
        if password.is_empty() {
            return Err(SplitError::Validation("Password cannot be empty".into()));
        }

        if self.storage.users.get_by_email(email)?.is_some() {
            return Err(SplitError::user_exists(email));
        }

        let user = User::new(name, email, hash_password(password)?);
        self.storage.users.insert(user.clone())?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.name.clone()),
            &user,
        )?;

        self.storage.users.set_current(Some(user.id))?;
        self.storage
            .log_session(Operation::Login, user.id.to_string(), Some(user.name.clone()))?;

        Ok(user)
    }

    /// Log out; returns who was logged in, if anyone
    pub fn logout(&self) -> SplitResult<Option<User>> {
        let current = self.storage.users.current()?;
        self.storage.users.set_current(None)?;

        if let Some(user) = &current {
            self.storage.log_session(
                Operation::Logout,
                user.id.to_string(),
                Some(user.name.clone()),
            )?;
        }

        Ok(current)
    }

    pub fn current_user(&self) -> SplitResult<Option<User>> {
        self.storage.users.current()
    }

    /// The logged-in user, or `SplitError::NotLoggedIn`
    pub fn require_user(&self) -> SplitResult<User> {
        self.current_user()?.ok_or(SplitError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::storage::seed::{seed_demo_data, DEMO_USER};
    use tempfile::TempDir;

    fn seeded_storage() -> Storage {
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();
        storage
    }

    #[test]
    fn test_login_with_seeded_credentials() {
        let storage = seeded_storage();
        let auth = AuthService::new(&storage);

        let user = auth
            .login("john@example.com", &SecureString::from("password123"))
            .unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(auth.current_user().unwrap().map(|u| u.id), Some(user.id));
    }

    #[test]
    fn test_login_failures() {
        let storage = seeded_storage();
        let auth = AuthService::new(&storage);

        for (email, password) in [
            ("john@example.com", "password124"),
            ("jane@example.com", "password123"),
            ("", ""),
            ("john@example.com", ""),
        ] {
            let err = auth.login(email, &SecureString::from(password)).unwrap_err();
            assert!(matches!(err, SplitError::InvalidCredentials));
            assert_eq!(err.user_message(), "Invalid credentials");
        }
        assert!(auth.current_user().unwrap().is_none());
    }

    #[test]
    fn test_register_logs_in() {
        let storage = seeded_storage();
        let auth = AuthService::new(&storage);

        let user = auth
            .register("Jane", "jane@example.com", &SecureString::from("hunter2"))
            .unwrap();
        assert_eq!(auth.require_user().unwrap().id, user.id);
        assert_ne!(user.password_hash, "hunter2");

        auth.logout().unwrap();
        let again = auth
            .login("jane@example.com", &SecureString::from("hunter2"))
            .unwrap();
        assert_eq!(again.id, user.id);
    }

    #[test]
    fn test_register_existing_email() {
        let storage = seeded_storage();
        let auth = AuthService::new(&storage);

        let err = auth
            .register("Johnny", "JOHN@example.com", &SecureString::from("x"))
            .unwrap_err();
        assert_eq!(err.user_message(), "User already exists");
        assert_eq!(storage.users.count().unwrap(), 1);
    }

    #[test]
    fn test_logout() {
        let storage = seeded_storage();
        let auth = AuthService::new(&storage);

        assert!(auth.logout().unwrap().is_none());
        auth.login(DEMO_USER.1, &SecureString::from(DEMO_USER.2))
            .unwrap();
        assert_eq!(auth.logout().unwrap().map(|u| u.name), Some("John Doe".into()));
        assert!(matches!(auth.require_user(), Err(SplitError::NotLoggedIn)));
    }

    #[test]
    fn test_audit_never_contains_password() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::in_memory()
            .with_audit_logger(AuditLogger::new(temp_dir.path().join("audit.log")));
        let auth = AuthService::new(&storage);

        auth.register("Jane", "jane@example.com", &SecureString::from("hunter2"))
            .unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("audit.log")).unwrap();
        assert!(!raw.contains("hunter2"));
        assert!(!raw.contains("argon2"));
        assert_eq!(raw.lines().count(), 2);
    }
}
