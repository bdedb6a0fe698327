//! Share calculation for the three split methods
//!
//! Whatever the method, the result is a list of participants with absolute
//! shares ready to be stored on an expense.

use crate::error::{SplitError, SplitResult};
use crate::models::{FriendId, Money, Participant};

/// Allowed distance of a percentage total from 100
const PERCENT_TOLERANCE: f64 = 0.01;

/// Split `amount` evenly; leftover cents go to the first people
pub fn equal(amount: Money, people: &[(FriendId, String)]) -> Vec<Participant> {
    people
        .iter()
        .zip(amount.split_evenly(people.len()))
        .map(|((id, name), share)| Participant::new(*id, name.clone(), share))
        .collect()
}

/// Split `amount` by percentages that must add up to 100
///
/// Each share is rounded down to the cent and the cents lost to rounding
/// are handed out one at a time from the first person on, so the shares
/// always add up to `amount`.
pub fn percentage(amount: Money, people: &[(FriendId, String, f64)]) -> SplitResult<Vec<Participant>> {
    if people.is_empty() {
        return Ok(Vec::new());
    }

    if let Some((_, name, pct)) = people.iter().find(|(_, _, pct)| *pct < 0.0 || !pct.is_finite()) {
        return Err(SplitError::Validation(format!(
            "Invalid percentage {} for {}",
            pct, name
        )));
    }

    let total: f64 = people.iter().map(|(_, _, pct)| pct).sum();
    if (total - 100.0).abs() > PERCENT_TOLERANCE {
        return Err(SplitError::Validation(format!(
            "Percentages must add up to 100 (got {:.2})",
            total
        )));
    }

    let mut participants: Vec<Participant> = people
        .iter()
        .map(|(id, name, pct)| Participant::new(*id, name.clone(), amount.percentage(*pct)))
        .collect();

    // Totals inside the tolerance but above 100 leave a negative leftover
    let assigned: Money = participants.iter().map(|p| p.share).sum();
    let mut leftover = (amount - assigned).cents();
    let mut index = 0;
    while leftover != 0 {
        let step = leftover.signum();
        let slot = &mut participants[index % people.len()];
        slot.share += Money::from_cents(step);
        leftover -= step;
        index += 1;
    }

    Ok(participants)
}

/// Shares given directly; no check that they cover the amount
pub fn custom(people: &[(FriendId, String, Money)]) -> Vec<Participant> {
    people
        .iter()
        .map(|(id, name, share)| Participant::new(*id, name.clone(), *share))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<(FriendId, String)> {
        names
            .iter()
            .map(|n| (FriendId::new(), n.to_string()))
            .collect()
    }

    #[test]
    fn test_equal_split_sums_to_amount() {
        let shares = equal(Money::from_units(100, 0), &people(&["A", "B", "C"]));
        let cents: Vec<_> = shares.iter().map(|p| p.share.cents()).collect();
        assert_eq!(cents, vec![3334, 3333, 3333]);
        assert_eq!(shares[0].name, "A");
    }

    #[test]
    fn test_equal_split_of_nobody() {
        assert!(equal(Money::from_units(10, 0), &[]).is_empty());
    }

    #[test]
    fn test_percentage_split() {
        let ids = people(&["A", "B", "C"]);
        let input: Vec<_> = ids
            .iter()
            .zip([50.0, 30.0, 20.0])
            .map(|((id, name), pct)| (*id, name.clone(), pct))
            .collect();

        let shares = percentage(Money::from_units(80, 0), &input).unwrap();
        let cents: Vec<_> = shares.iter().map(|p| p.share.cents()).collect();
        assert_eq!(cents, vec![4000, 2400, 1600]);
    }

    #[test]
    fn test_percentage_rounding_leftover() {
        let ids = people(&["A", "B", "C"]);
        let third = 100.0 / 3.0;
        let input: Vec<_> = ids
            .iter()
            .map(|(id, name)| (*id, name.clone(), third))
            .collect();

        let shares = percentage(Money::from_cents(1000), &input).unwrap();
        let total: Money = shares.iter().map(|p| p.share).sum();
        assert_eq!(total, Money::from_cents(1000));
        assert_eq!(shares[0].share, Money::from_cents(334));
    }

    #[test]
    fn test_percentage_slightly_over_100() {
        let ids = people(&["A", "B"]);
        let input = vec![
            (ids[0].0, ids[0].1.clone(), 50.004),
            (ids[1].0, ids[1].1.clone(), 50.004),
        ];

        let shares = percentage(Money::from_units(1000, 0), &input).unwrap();
        let total: Money = shares.iter().map(|p| p.share).sum();
        assert_eq!(total, Money::from_units(1000, 0));
        assert_eq!(shares[0].share, Money::from_cents(50_000));
        assert_eq!(shares[1].share, Money::from_cents(50_000));
    }

    #[test]
    fn test_percentage_must_total_100() {
        let ids = people(&["A", "B"]);
        let input = vec![
            (ids[0].0, ids[0].1.clone(), 60.0),
            (ids[1].0, ids[1].1.clone(), 30.0),
        ];
        let err = percentage(Money::from_units(10, 0), &input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_custom_split_is_permissive() {
        let ids = people(&["A", "B"]);
        let input = vec![
            (ids[0].0, ids[0].1.clone(), Money::from_units(10, 0)),
            (ids[1].0, ids[1].1.clone(), Money::from_units(5, 0)),
        ];
        let shares = custom(&input);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[1].share, Money::from_units(5, 0));
    }
}
