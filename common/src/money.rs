//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal;

/// Non-negative amount of money in the store currency.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] if the provided `amount` is not negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Returns the underlying [`Decimal`] amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns this [`Money`] rounded to cents.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp_with_strategy(
            2,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Subtracts the `other` amount, returning [`None`] if the result would
    /// be negative.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Self::new(self.0 - other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round().0)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("negative amount")
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        decimal::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let amount = decimal::deserialize(deserializer)?;
        Self::new(amount).ok_or_else(|| {
            D::Error::custom(format!("negative amount: {amount}"))
        })
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn money(s: &str) -> Money {
        Money::new(s.parse::<Decimal>().unwrap()).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("123.45").unwrap(), money("123.45"));
        assert_eq!(Money::from_str(" 12 ").unwrap(), money("12"));
        assert_eq!(Money::from_str("0").unwrap(), Money::ZERO);

        assert!(Money::from_str("-1").is_err());
        assert!(Money::from_str("12.3USD").is_err());
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(money("123.45").to_string(), "123.45");
        assert_eq!(money("123").to_string(), "123.00");
        assert_eq!(money("123.4").to_string(), "123.40");
        assert_eq!(money("0.005").to_string(), "0.01");
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_float: Money = serde_json::from_str("99.9").unwrap();
        let from_int: Money = serde_json::from_str("100").unwrap();
        let from_text: Money = serde_json::from_str("\"99.90\"").unwrap();

        assert_eq!(from_float, money("99.9"));
        assert_eq!(from_int, money("100"));
        assert_eq!(from_text, money("99.9"));

        assert!(serde_json::from_str::<Money>("-5").is_err());
        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&money("100")).unwrap(), "100");
        assert_eq!(serde_json::to_string(&money("12.5")).unwrap(), "12.5");
    }

    #[test]
    fn arithmetic() {
        let total: Money = [money("1.10"), money("2.20")].into_iter().sum();
        assert_eq!(total, money("3.30"));
        assert_eq!(money("2.5") * 4, money("10"));
        assert_eq!(money("1").checked_sub(money("2")), None);
        assert_eq!(money("3").checked_sub(money("2")), Some(money("1")));
    }
}
