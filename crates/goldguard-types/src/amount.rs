use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{LedgerError, Result};

/// Whole-unit token amount
/// Unsigned so a balance can never go negative; all arithmetic is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Largest representable amount
    pub const MAX: Amount = Amount(u128::MAX);

    /// Create from base units
    pub const fn from_units(units: u128) -> Self {
        Amount(units)
    }

    /// Get the base units
    pub const fn units(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    /// Checked sum; fails with `ArithmeticOverflow` instead of saturating
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(amounts: I) -> Result<Self> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, a| acc.checked_add(a))
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Amount(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_checked_arithmetic() {
        let a = Amount::from_units(10);
        let b = Amount::from_units(5);

        assert_eq!(a.checked_add(b).unwrap(), Amount::from_units(15));
        assert_eq!(a.checked_sub(b).unwrap(), Amount::from_units(5));
        assert!(matches!(b.checked_sub(a), Err(LedgerError::ArithmeticOverflow)));
        assert!(matches!(
            Amount::MAX.checked_add(Amount::from_units(1)),
            Err(LedgerError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn test_amount_checks() {
        assert!(Amount::from_units(10).is_positive());
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_amount_checked_sum() {
        let total = Amount::checked_sum([1u128, 2, 3].into_iter().map(Amount::from_units));
        assert_eq!(total, Ok(Amount::from_units(6)));
        assert_eq!(Amount::checked_sum(std::iter::empty()), Ok(Amount::ZERO));

        let overflow = Amount::checked_sum([Amount::MAX, Amount::from_units(5)]);
        assert_eq!(overflow, Err(LedgerError::ArithmeticOverflow));
    }
}
