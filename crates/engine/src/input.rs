//! Defensive parsing at the boundary between raw UI text and the engine.
//!
//! The presentation layer hands over whatever the user typed. Everything that
//! is not a valid non-negative number coerces to zero here, so the session
//! operations can assume well-typed values and never fail. Callers that want
//! a diagnostic instead use the strict `FromStr` impls on [`MoneyCents`] and
//! [`Rate`] directly.

use crate::{MoneyCents, Rate};

/// Parses a raw money string, coercing invalid or negative input to zero.
#[must_use]
pub fn parse_money_input(raw: &str) -> MoneyCents {
    match raw.parse::<MoneyCents>() {
        Ok(amount) if !amount.is_negative() => amount,
        _ => MoneyCents::ZERO,
    }
}

/// Parses a raw percent string (`"10"` → 10%), coercing invalid or negative
/// input to a zero rate.
#[must_use]
pub fn parse_rate_input(raw: &str) -> Rate {
    raw.parse::<Rate>().unwrap_or(Rate::ZERO)
}

/// Trims and collapses inner whitespace in a user-supplied name.
///
/// Returns an empty string for blank input, which the session treats as a
/// rejected add.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_coerces_garbage_and_negatives_to_zero() {
        assert_eq!(parse_money_input("12.50"), MoneyCents::new(1250));
        assert_eq!(parse_money_input(""), MoneyCents::ZERO);
        assert_eq!(parse_money_input("abc"), MoneyCents::ZERO);
        assert_eq!(parse_money_input("-3"), MoneyCents::ZERO);
    }

    #[test]
    fn rate_coerces_garbage_and_negatives_to_zero() {
        assert_eq!(parse_rate_input("10"), Rate::from_percent(10));
        assert_eq!(parse_rate_input("8.25%"), Rate::from_basis_points(825));
        assert_eq!(parse_rate_input(""), Rate::ZERO);
        assert_eq!(parse_rate_input("-5"), Rate::ZERO);
        assert_eq!(parse_rate_input("tip"), Rate::ZERO);
    }

    #[test]
    fn names_are_trimmed_and_collapsed() {
        assert_eq!(normalize_name("  Ada   Lovelace "), "Ada Lovelace");
        assert_eq!(normalize_name("   "), "");
    }
}
