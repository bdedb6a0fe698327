//! Session commands: login, register, logout, whoami

use crate::crypto::SecureString;
use crate::error::{SplitError, SplitResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// Use the password given on the command line, or prompt for it
fn read_password(given: Option<String>) -> SplitResult<SecureString> {
    match given {
        Some(password) => Ok(SecureString::from(password)),
        None => rpassword::prompt_password("Password: ")
            .map(SecureString::from)
            .map_err(|e| SplitError::Credential(format!("Failed to read password: {}", e))),
    }
}

pub fn handle_login(storage: &Storage, email: &str, password: Option<String>) -> SplitResult<()> {
    let password = read_password(password)?;
    let user = AuthService::new(storage).login(email, &password)?;
    println!("Welcome back, {}!", user.name);
    Ok(())
}

pub fn handle_register(
    storage: &Storage,
    name: &str,
    email: &str,
    password: Option<String>,
) -> SplitResult<()> {
    let password = read_password(password)?;
    let user = AuthService::new(storage).register(name, email, &password)?;
    println!("Registered and logged in as {}", user);
    Ok(())
}

pub fn handle_logout(storage: &Storage) -> SplitResult<()> {
    match AuthService::new(storage).logout()? {
        Some(user) => println!("Logged out {}", user.name),
        None => println!("Nobody is logged in."),
    }
    Ok(())
}

pub fn handle_whoami(storage: &Storage) -> SplitResult<()> {
    match AuthService::new(storage).current_user()? {
        Some(user) => println!("Logged in as {}", user),
        None => println!("Not logged in."),
    }
    Ok(())
}
