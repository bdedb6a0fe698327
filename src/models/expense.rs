//! Expense model
//!
//! An expense records who paid, who shares in it and how much each
//! participant owes. Shares are always stored as absolute amounts; the split
//! method only says how they were worked out.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::category::{normalize_currency, DEFAULT_CATEGORY};
use super::ids::{ExpenseId, FriendId};
use super::money::Money;

/// Maximum length of an expense title
pub const MAX_TITLE_LEN: usize = 200;

/// How participant shares were derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    #[default]
    Equal,
    Custom,
    Percentage,
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Custom => write!(f, "custom"),
            Self::Percentage => write!(f, "percentage"),
        }
    }
}

impl FromStr for SplitMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "custom" => Ok(Self::Custom),
            "percentage" | "percent" => Ok(Self::Percentage),
            other => Err(format!("Unknown split method: {}", other)),
        }
    }
}

/// Recurrence label. Nothing acts on it; no expenses are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringType {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for RecurringType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!("Unknown recurring type: {}", other)),
        }
    }
}

/// One person's part in an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: FriendId,

    /// Name at the time the expense was recorded
    pub name: String,

    /// Absolute amount owed by this participant
    pub share: Money,
}

impl Participant {
    pub fn new(id: FriendId, name: impl Into<String>, share: Money) -> Self {
        Self {
            id,
            name: name.into(),
            share,
        }
    }
}

/// An expense as entered, before the ledger assigns an id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Money,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: String,
    pub paid_by: Vec<FriendId>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub split_method: SplitMethod,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<RecurringType>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ExpenseDraft {
    /// Start a draft with no payers or participants
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            currency: currency.into(),
            date,
            notes: None,
            category: DEFAULT_CATEGORY.to_string(),
            paid_by: Vec::new(),
            participants: Vec::new(),
            split_method: SplitMethod::default(),
            is_recurring: false,
            recurring_type: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Set the payers; repeated ids are kept once, first occurrence wins
    pub fn with_payers(mut self, payers: impl IntoIterator<Item = FriendId>) -> Self {
        self.paid_by.clear();
        for payer in payers {
            if !self.paid_by.contains(&payer) {
                self.paid_by.push(payer);
            }
        }
        self
    }

    pub fn with_participants(
        mut self,
        participants: Vec<Participant>,
        split_method: SplitMethod,
    ) -> Self {
        self.participants = participants;
        self.split_method = split_method;
        self
    }

    pub fn with_recurring(mut self, recurring_type: RecurringType) -> Self {
        self.is_recurring = true;
        self.recurring_type = Some(recurring_type);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(|t| {
                let t: String = t.into();
                t.trim().to_string()
            })
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Form-level validation, run before a draft is handed to the ledger
    ///
    /// Shares are not required to add up to the amount.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ExpenseValidationError::MissingTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ExpenseValidationError::TitleTooLong(title.chars().count()));
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge);
        }
        if normalize_currency(&self.currency).is_none() {
            return Err(ExpenseValidationError::InvalidCurrency(
                self.currency.clone(),
            ));
        }
        if self.participants.is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }
        if self.paid_by.is_empty() {
            return Err(ExpenseValidationError::NoPayers);
        }
        if let Some(p) = self.participants.iter().find(|p| p.share.is_negative()) {
            return Err(ExpenseValidationError::NegativeShare(p.name.clone()));
        }
        if let Some(p) = self.participants.iter().find(|p| p.share > Money::MAX) {
            return Err(ExpenseValidationError::ShareTooLarge(p.name.clone()));
        }
        Ok(())
    }
}

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: Money,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: String,
    pub paid_by: Vec<FriendId>,
    pub participants: Vec<Participant>,
    pub split_method: SplitMethod,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<RecurringType>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Set once by the ledger on insertion
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Build the stored record from a draft
    pub fn from_draft(draft: ExpenseDraft, id: ExpenseId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            currency: draft.currency,
            date: draft.date,
            notes: draft.notes,
            category: draft.category,
            paid_by: draft.paid_by,
            participants: draft.participants,
            split_method: draft.split_method,
            is_recurring: draft.is_recurring,
            recurring_type: draft.recurring_type,
            tags: draft.tags,
            created_at,
        }
    }

    /// Sum of all participant shares
    pub fn share_total(&self) -> Money {
        self.participants.iter().map(|p| p.share).sum()
    }

    /// `amount - share_total()`; zero when the shares account for the amount
    pub fn share_discrepancy(&self) -> Money {
        self.amount - self.share_total()
    }

    /// Participant names joined with ", "
    pub fn participant_names(&self) -> String {
        self.participants
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// A participant's share as a percentage of the amount
    pub fn share_percentage(&self, participant: &Participant) -> f64 {
        if self.amount.is_zero() {
            0.0
        } else {
            participant.share.cents() as f64 / self.amount.cents() as f64 * 100.0
        }
    }

    pub fn involves(&self, id: FriendId) -> bool {
        self.paid_by.contains(&id) || self.participants.iter().any(|p| p.id == id)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount.format_with_currency(&self.currency)
        )
    }
}

/// Field-level validation failures for an expense draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingTitle,
    TitleTooLong(usize),
    NonPositiveAmount,
    AmountTooLarge,
    InvalidCurrency(String),
    NoParticipants,
    NoPayers,
    NegativeShare(String),
    ShareTooLarge(String),
}

impl ExpenseValidationError {
    /// The form field the failure belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingTitle | Self::TitleTooLong(_) => "title",
            Self::NonPositiveAmount | Self::AmountTooLarge => "amount",
            Self::InvalidCurrency(_) => "currency",
            Self::NoParticipants | Self::NegativeShare(_) | Self::ShareTooLarge(_) => {
                "participants"
            }
            Self::NoPayers => "paid_by",
        }
    }
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::TitleTooLong(len) => {
                write!(f, "Title too long ({} chars, max {})", len, MAX_TITLE_LEN)
            }
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", Money::MAX),
            Self::InvalidCurrency(code) => write!(f, "Invalid currency code: {}", code),
            Self::NoParticipants => write!(f, "At least one participant is required"),
            Self::NoPayers => write!(f, "At least one payer is required"),
            Self::NegativeShare(name) => write!(f, "Share for {} cannot be negative", name),
            Self::ShareTooLarge(name) => {
                write!(f, "Share for {} cannot exceed {}", name, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
