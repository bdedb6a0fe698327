//! CLI command handlers
//!
//! This module contains the interactive shell and the handlers behind each
//! shell command, bridging clap argument parsing with the service layer.
//! Every input line is parsed on its own, so a bad command only affects
//! that line.

pub mod auth;
pub mod expense;
pub mod export;
pub mod friend;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, ExportFormat};
pub use friend::{handle_friend_command, FriendCommands};

use clap::{Parser, Subcommand};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::config::{Settings, SplitbookPaths};
use crate::error::{SplitError, SplitResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// One line of shell input
#[derive(Parser, Debug)]
#[command(
    name = "splitbook",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands available inside the shell
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Log in with email and password
    Login {
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register {
        name: String,
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Manage friends
    #[command(subcommand)]
    Friend(FriendCommands),
    /// Record and browse expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),
    /// Show who owes whom
    Balances {
        /// One report per currency instead of mixing them
        #[arg(long)]
        by_currency: bool,
    },
    /// Show spending per category
    Categories,
    /// Export expenses or a session snapshot
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to the exports directory)
        output: Option<PathBuf>,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the shell does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line into arguments, honoring single and double quotes
///
/// Inside double quotes a backslash escapes the next character.
pub fn split_args(line: &str) -> SplitResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('"'), '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_arg = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if quote.is_some() {
        return Err(SplitError::Validation("Unterminated quote".into()));
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}

/// Interactive session over a `Storage`
pub struct Shell<'a> {
    storage: &'a Storage,
    paths: &'a SplitbookPaths,
    settings: &'a Settings,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a Storage, paths: &'a SplitbookPaths, settings: &'a Settings) -> Self {
        Self {
            storage,
            paths,
            settings,
        }
    }

    /// Read commands until `quit` or end of input
    ///
    /// Failures of a single command are reported and the session goes on.
    pub fn run<R: BufRead>(&self, input: R) -> SplitResult<()> {
        let interactive = std::io::stdin().is_terminal();
        if interactive {
            println!("Splitbook - shared expenses. Type 'help' for commands.");
        }

        let mut lines = input.lines();
        loop {
            if interactive {
                print!("splitbook> ");
                std::io::stdout().flush()?;
            }

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match self.execute_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("Error: {}", e.user_message()),
            }
        }

        Ok(())
    }

    /// Parse and run one input line
    pub fn execute_line(&self, line: &str) -> SplitResult<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let args = split_args(trimmed)?;
        match ShellLine::try_parse_from(args) {
            Ok(parsed) => self.execute(parsed.command),
            Err(err) => {
                // Help output and usage errors alike
                err.print()?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&self, command: ShellCommand) -> SplitResult<Flow> {
        let storage = self.storage;

        match command {
            ShellCommand::Login { email, password } => auth::handle_login(storage, &email, password)?,
            ShellCommand::Register {
                name,
                email,
                password,
            } => auth::handle_register(storage, &name, &email, password)?,
            ShellCommand::Logout => auth::handle_logout(storage)?,
            ShellCommand::Whoami => auth::handle_whoami(storage)?,
            ShellCommand::Friend(cmd) => {
                self.require_login()?;
                handle_friend_command(storage, cmd)?;
            }
            ShellCommand::Expense(cmd) => {
                self.require_login()?;
                handle_expense_command(storage, self.settings, cmd)?;
            }
            ShellCommand::Balances { by_currency } => {
                self.require_login()?;
                report::handle_balances(storage, by_currency)?;
            }
            ShellCommand::Categories => {
                self.require_login()?;
                report::handle_categories(storage)?;
            }
            ShellCommand::Export { format, output } => {
                self.require_login()?;
                handle_export(storage, self.paths, format, output)?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn require_login(&self) -> SplitResult<()> {
        AuthService::new(self.storage).require_user().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_demo_data;
    use tempfile::TempDir;

    #[test]
    fn test_split_args() {
        assert_eq!(
            split_args(r#"expense add "Team lunch" 42.50 --with 'Alice,Bob'"#).unwrap(),
            vec!["expense", "add", "Team lunch", "42.50", "--with", "Alice,Bob"]
        );
        assert_eq!(split_args("  ").unwrap(), Vec::<String>::new());
        assert_eq!(split_args(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
        assert_eq!(split_args(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
    }

    #[test]
    fn test_split_args_unterminated() {
        assert!(split_args("friend add 'Eve").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_shell_line() {
        let parsed = ShellLine::try_parse_from(["balances", "--by-currency"]).unwrap();
        assert!(matches!(
            parsed.command,
            ShellCommand::Balances { by_currency: true }
        ));

        let parsed = ShellLine::try_parse_from(["exit"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Quit));

        assert!(ShellLine::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn test_commands_need_login() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();
        let shell = Shell::new(&storage, &paths, &settings);

        for line in ["friend add Eve", "balances", "categories", "export csv"] {
            let err = shell.execute_line(line).unwrap_err();
            assert!(matches!(err, SplitError::NotLoggedIn), "{line}");
        }

        shell
            .execute_line("login john@example.com --password password123")
            .unwrap();
        shell.execute_line("friend add Eve").unwrap();
        assert_eq!(storage.friends.count().unwrap(), 5);
    }

    #[test]
    fn test_expense_flow() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();
        let shell = Shell::new(&storage, &paths, &settings);

        shell
            .execute_line("login john@example.com -p password123")
            .unwrap();
        shell
            .execute_line(r#"expense add "Pizza night" 30 --with Alice,Bob,Charlie -c food"#)
            .unwrap();

        let expenses = storage.expenses.all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title, "Pizza night");
        assert_eq!(expenses[0].paid_by, vec![expenses[0].participants[0].id]);
        assert_eq!(expenses[0].share_total(), expenses[0].amount);

        let err = shell
            .execute_line("expense add Nothing 0 --with Alice")
            .unwrap_err();
        assert_eq!(err.user_message(), "Amount must be greater than 0");
        assert_eq!(storage.expenses.count().unwrap(), 1);

        assert_eq!(shell.execute_line("quit").unwrap(), Flow::Quit);
    }
}
