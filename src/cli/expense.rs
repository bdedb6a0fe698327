//! Expense CLI commands
//!
//! Builds expense drafts from shell arguments and hands them to the
//! expense service.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SplitError, SplitResult};
use crate::models::category::is_known_category;
use crate::models::{
    Expense, ExpenseDraft, FriendId, Money, Participant, RecurringType, SplitMethod, CURRENCIES,
    DEFAULT_CATEGORY,
};
use crate::services::{split, ExpenseService, FriendService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Total amount (e.g., "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Friends sharing the expense, comma-separated names or IDs
        #[arg(short, long = "with", value_delimiter = ',')]
        with: Vec<String>,
        /// Who paid, comma-separated (defaults to the first participant)
        #[arg(short, long, value_delimiter = ',')]
        paid_by: Vec<String>,
        /// Split method (equal, percentage, custom)
        #[arg(short, long, default_value = "equal")]
        split: String,
        /// Percentages or amounts per participant, in participant order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        shares: Vec<String>,
        /// Currency code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<String>,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Category ID (food, travel, rent, ...)
        #[arg(short, long)]
        category: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Mark as recurring (weekly, monthly, yearly)
        #[arg(short, long)]
        recurring: Option<String>,
        /// Tag, may be repeated
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List recorded expenses
    #[command(alias = "ls")]
    List {
        /// Only expenses involving this friend
        #[arg(short, long)]
        friend: Option<String>,
        /// Only expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show expense details
    Show {
        /// Expense ID (short or full)
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            with,
            paid_by,
            split,
            shares,
            currency,
            date,
            category,
            notes,
            recurring,
            tags,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                SplitError::Validation(format!("{}. Use a format like '42.50' or '42'", e))
            })?;
            let split_method: SplitMethod = split.parse().map_err(SplitError::Validation)?;
            let date = match date {
                Some(text) => parse_date(&text, &settings.date_format)?,
                None => Local::now().date_naive(),
            };

            let friends = FriendService::new(storage);
            let people: Vec<(FriendId, String)> = friends
                .resolve_all(&with)?
                .into_iter()
                .map(|f| (f.id, f.name))
                .collect();

            let payers: Vec<FriendId> = if paid_by.is_empty() {
                people.first().map(|(id, _)| *id).into_iter().collect()
            } else {
                friends.resolve_all(&paid_by)?.iter().map(|f| f.id).collect()
            };

            let participants = build_participants(amount, &people, split_method, &shares)?;

            let mut draft = ExpenseDraft::new(
                title,
                amount,
                currency.unwrap_or_else(|| settings.default_currency.clone()),
                date,
            )
            .with_category(category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()))
            .with_payers(payers)
            .with_participants(participants, split_method)
            .with_tags(tags);

            if let Some(notes) = notes {
                draft = draft.with_notes(notes);
            }
            if let Some(kind) = recurring {
                let kind: RecurringType = kind.parse().map_err(SplitError::Validation)?;
                draft = draft.with_recurring(kind);
            }

            let expense = service.add(draft)?;
            print_added(&expense);
        }

        ExpenseCommands::List { friend, category } => {
            let mut expenses = service.list()?;

            if let Some(ident) = friend {
                let found = FriendService::new(storage)
                    .find(&ident)?
                    .ok_or_else(|| SplitError::friend_not_found(&ident))?;
                expenses.retain(|e| e.involves(found.id));
            }
            if let Some(category) = category {
                expenses.retain(|e| e.category.eq_ignore_ascii_case(category.trim()));
            }

            print!("{}", format_expense_list(&expenses));
        }

        ExpenseCommands::Show { expense } => {
            let found = service.find(&expense)?;
            let payer_names = payer_names(storage, &found)?;
            print!("{}", format_expense_details(&found, &payer_names));
        }
    }

    Ok(())
}

fn parse_date(text: &str, format: &str) -> SplitResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).map_err(|_| {
        SplitError::Validation(format!(
            "Invalid date '{}'. Expected format: {}",
            text, format
        ))
    })
}

/// Turn the participant list and `--shares` values into stored shares
fn build_participants(
    amount: Money,
    people: &[(FriendId, String)],
    method: SplitMethod,
    shares: &[String],
) -> SplitResult<Vec<Participant>> {
    if method == SplitMethod::Equal {
        if !shares.is_empty() {
            return Err(SplitError::Validation(
                "--shares only applies to percentage and custom splits".into(),
            ));
        }
        return Ok(split::equal(amount, people));
    }

    if shares.len() != people.len() {
        return Err(SplitError::Validation(format!(
            "Expected {} share value(s), one per participant, got {}",
            people.len(),
            shares.len()
        )));
    }

    match method {
        SplitMethod::Percentage => {
            let entries = people
                .iter()
                .zip(shares)
                .map(|((id, name), value)| {
                    let pct: f64 = value.trim().parse().map_err(|_| {
                        SplitError::Validation(format!("Invalid percentage: '{}'", value))
                    })?;
                    Ok((*id, name.clone(), pct))
                })
                .collect::<SplitResult<Vec<_>>>()?;
            split::percentage(amount, &entries)
        }
        _ => {
            let entries = people
                .iter()
                .zip(shares)
                .map(|((id, name), value)| {
                    let share = Money::parse(value)
                        .map_err(|e| SplitError::Validation(e.to_string()))?;
                    Ok((*id, name.clone(), share))
                })
                .collect::<SplitResult<Vec<_>>>()?;
            Ok(split::custom(&entries))
        }
    }
}

/// Names of the payers: name on the expense, then the roster, then short id
fn payer_names(storage: &Storage, expense: &Expense) -> SplitResult<Vec<String>> {
    let friends = FriendService::new(storage);
    expense
        .paid_by
        .iter()
        .map(|id| {
            if let Some(p) = expense.participants.iter().find(|p| p.id == *id) {
                return Ok(p.name.clone());
            }
            Ok(friends
                .get(*id)?
                .map(|f| f.name)
                .unwrap_or_else(|| id.short()))
        })
        .collect()
}

fn print_added(expense: &Expense) {
    println!(
        "Added expense: {} ({})",
        expense.title,
        expense.amount.format_with_currency(&expense.currency)
    );
    println!("  ID: {}", expense.id);
    for participant in &expense.participants {
        println!("  {:<20} {:>10}", participant.name, participant.share);
    }

    let discrepancy = expense.share_discrepancy();
    if !discrepancy.is_zero() {
        println!(
            "  Note: shares differ from the amount by {}",
            discrepancy
        );
    }
    if !is_known_category(&expense.category) {
        println!("  Note: '{}' is not a standard category", expense.category);
    }
    if !CURRENCIES.contains(&expense.currency.as_str()) {
        println!("  Note: {} is not one of {}", expense.currency, CURRENCIES.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<(FriendId, String)> {
        vec![
            (FriendId::new(), "Alice".to_string()),
            (FriendId::new(), "Bob".to_string()),
        ]
    }

    #[test]
    fn test_equal_participants() {
        let shares =
            build_participants(Money::from_cents(1001), &people(), SplitMethod::Equal, &[])
                .unwrap();
        assert_eq!(shares[0].share, Money::from_cents(501));
        assert_eq!(shares[1].share, Money::from_cents(500));
    }

    #[test]
    fn test_share_count_must_match() {
        let err = build_participants(
            Money::from_units(10, 0),
            &people(),
            SplitMethod::Custom,
            &["10".to_string()],
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_percentage_participants() {
        let shares = build_participants(
            Money::from_units(40, 0),
            &people(),
            SplitMethod::Percentage,
            &["75".to_string(), "25".to_string()],
        )
        .unwrap();
        assert_eq!(shares[0].share, Money::from_units(30, 0));
        assert_eq!(shares[1].share, Money::from_units(10, 0));
    }

    #[test]
    fn test_custom_participants_reject_bad_amount() {
        let err = build_participants(
            Money::from_units(10, 0),
            &people(),
            SplitMethod::Custom,
            &["5".to_string(), "five".to_string()],
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_date_uses_format() {
        assert_eq!(
            parse_date("03/04/2025", "%d/%m/%Y").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()
        );
        assert!(parse_date("2025-13-01", "%Y-%m-%d").is_err());
    }
}
