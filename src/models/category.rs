//! Expense categories and currency codes
//!
//! An expense's category is a free string. The catalogue below lists the
//! categories offered when adding an expense and gives each a label.

/// Known category ids with their display labels
pub const CATEGORIES: &[(&str, &str)] = &[
    ("food", "Food & Dining"),
    ("groceries", "Groceries"),
    ("travel", "Travel"),
    ("rent", "Rent & Housing"),
    ("shopping", "Shopping"),
    ("entertainment", "Entertainment"),
    ("utilities", "Utilities"),
    ("health", "Healthcare"),
    ("education", "Education"),
    ("transport", "Transportation"),
    ("fitness", "Fitness"),
    ("pets", "Pets"),
    ("gifts", "Gifts"),
    ("misc", "Miscellaneous"),
];

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "misc";

/// Currency codes offered when adding an expense
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "INR", "JPY", "AUD", "CAD", "SGD", "CNY"];

/// Display label for a category id; unknown ids are shown as-is
pub fn category_label(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}

/// Whether `id` is one of the catalogue categories
pub fn is_known_category(id: &str) -> bool {
    CATEGORIES.iter().any(|(known, _)| *known == id)
}

/// Normalize a currency code to upper case, rejecting anything that is not
/// three ASCII letters
pub fn normalize_currency(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("food"), "Food & Dining");
        assert_eq!(category_label("boat"), "boat");
        assert!(is_known_category(DEFAULT_CATEGORY));
    }

    #[test]
    fn test_normalize_currency() {
        assert_eq!(normalize_currency("eur"), Some("EUR".to_string()));
        assert_eq!(normalize_currency(" usd "), Some("USD".to_string()));
        assert_eq!(normalize_currency("US"), None);
        assert_eq!(normalize_currency("U$D"), None);
    }
}
