//! Fixed-point money amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` normalized to two fractional
//! digits, so arithmetic and comparisons are exact at that scale.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The fixed scale all ledger amounts are kept at.
const SCALE: u32 = 2;

/// A monetary amount with a fixed scale of two fractional digits.
///
/// Construction normalizes the input to scale 2 using banker's rounding,
/// so every `Money` value is exact at cent precision. Balances are
/// non-negative by ledger invariant; signed values are still representable
/// for derived report totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a money amount, rescaling to two fractional digits with
    /// banker's rounding.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven))
    }

    /// Creates a money amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, SCALE))
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition; `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction; `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.0;
        amount.rescale(SCALE);
        write!(f, "{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_normalizes_to_two_places() {
        assert_eq!(Money::new(dec!(10.5)).amount(), dec!(10.50));
        assert_eq!(Money::new(dec!(10)).amount(), dec!(10.00));
    }

    #[rstest]
    #[case(dec!(10.005), dec!(10.00))] // midpoint rounds to even
    #[case(dec!(10.015), dec!(10.02))]
    #[case(dec!(10.014), dec!(10.01))]
    #[case(dec!(10.016), dec!(10.02))]
    fn test_money_bankers_rounding(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(Money::new(input).amount(), expected);
    }

    #[test]
    fn test_money_from_cents() {
        assert_eq!(Money::from_cents(12345), Money::new(dec!(123.45)));
        assert_eq!(Money::from_cents(-50), Money::new(dec!(-0.50)));
    }

    #[test]
    fn test_money_signs() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn test_money_exact_arithmetic() {
        // The classic float failure: 0.1 + 0.2 must equal 0.3 exactly.
        let sum = Money::new(dec!(0.1)) + Money::new(dec!(0.2));
        assert_eq!(sum, Money::new(dec!(0.3)));

        let diff = Money::new(dec!(100.00)) - Money::new(dec!(99.99));
        assert_eq!(diff, Money::new(dec!(0.01)));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(dec!(49.99)) < Money::new(dec!(50.00)));
        assert!(Money::new(dec!(50.00)) >= Money::new(dec!(50.00)));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total, Money::new(dec!(6.60)));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(100)).to_string(), "100.00");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_money_serde_roundtrip() {
        let money = Money::new(dec!(42.42));
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }

    #[test]
    fn test_money_deserialize_rescales() {
        let money: Money = serde_json::from_str("\"10.999\"").unwrap();
        assert_eq!(money, Money::new(dec!(11.00)));
    }
}
