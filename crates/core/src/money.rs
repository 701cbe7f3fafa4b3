//! Monetary amounts backed by a fixed-point decimal.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A monetary amount (price, sale total, inventory valuation).
///
/// Backed by [`rust_decimal::Decimal`], so summing many `price * quantity`
/// products stays exact at whatever precision the operator typed. Arithmetic
/// saturates instead of overflowing. Any sign is accepted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Amount from integer hundredths (e.g. cents): `from_minor(1050)` is `10.50`.
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, 2))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// At least two decimal places, more when the amount carries them
/// (`10.00`, `0.05`, `19.999`).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut value = self.0.normalize();
        if value.scale() < 2 {
            value.rescale(2);
        }
        write!(f, "{value}")
    }
}

/// Parses plain (`10`, `10.5`, `-3.25`) or scientific (`1e2`, `2.5E1`)
/// decimal text.
impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Self)
            .map_err(|e| DomainError::invalid_amount(format!("'{raw}': {e}")))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

/// Unit price times a (signed) quantity.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        Money(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
