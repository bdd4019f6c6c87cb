//! Shopping cart definitions.

use common::Money;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{product, Product};

/// Line of the shopping cart.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Item {
    /// ID of this [`Item`].
    pub id: Id,

    /// ID of the [`Product`] in this [`Item`].
    pub product_id: product::Id,

    /// [`Product`] in this [`Item`], if expanded by the backend.
    #[serde(default)]
    pub product: Option<Product>,

    /// Number of [`Product`] units.
    pub quantity: Count,
}

impl Item {
    /// Returns the price of this [`Item`], if its [`Product`] is known.
    #[must_use]
    pub fn subtotal(&self) -> Option<Money> {
        self.product
            .as_ref()
            .map(|p| p.price * u32::from(self.quantity))
    }
}

/// ID of a cart [`Item`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Positive number of [`Product`] units.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Count(u32);

impl Count {
    /// Single unit.
    pub const ONE: Self = Self(1);

    /// Creates a new [`Count`] if the provided `count` is positive.
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::str::FromStr for Count {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid `Count`")
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        Self::new(u32::deserialize(deserializer)?)
            .ok_or_else(|| D::Error::custom("quantity must be positive"))
    }
}

/// Number of units in the cart, as reported by the backend.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Size {
    /// Total number of units.
    #[serde(alias = "total")]
    pub count: u64,
}

#[cfg(test)]
mod spec {
    use super::{Count, Item};

    #[test]
    fn computes_subtotal_from_expanded_product() {
        let item: Item = serde_json::from_str(
            r#"{"id": 3, "product_id": 1, "quantity": 3,
                "product": {"id": 1, "name": "Tea", "price": "19.90"}}"#,
        )
        .unwrap();
        assert_eq!(item.subtotal().unwrap().to_string(), "59.70");

        let item: Item =
            serde_json::from_str(r#"{"id": 3, "product_id": 1, "quantity": 1}"#)
                .unwrap();
        assert_eq!(item.subtotal(), None);
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(Count::new(0).is_none());
        assert!("0".parse::<Count>().is_err());
        assert!(serde_json::from_str::<Count>("0").is_err());
    }
}
