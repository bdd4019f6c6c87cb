//! [`Coupon`] definitions.

use common::{unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Discount coupon.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coupon {
    /// ID of this [`Coupon`].
    pub id: Id,

    /// Name of this [`Coupon`].
    pub name: String,

    /// Description of the [`Coupon`] terms.
    #[serde(default)]
    pub description: String,

    /// Discount granted by this [`Coupon`].
    pub amount: Money,

    /// Minimal order amount this [`Coupon`] applies to.
    #[serde(default)]
    pub min_amount: Option<Money>,

    /// [`Status`] of this [`Coupon`] for the current customer.
    #[serde(default)]
    pub status: Option<Status>,

    /// Expiration moment of this [`Coupon`].
    #[serde(default, alias = "end_time")]
    pub expires_at: Option<DateTimeOf<(Coupon, unit::Completion)>>,
}

/// ID of a [`Coupon`].
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

common::define_kind! {
    #[doc = "Status of a received [`Coupon`]."]
    enum Status {
        #[doc = "[`Coupon`] can be applied."]
        Unused = "unused",

        #[doc = "[`Coupon`] has been applied to an order."]
        Used = "used",

        #[doc = "[`Coupon`] is no longer valid."]
        Expired = "expired",
    }
}

/// Result of checking whether a [`Coupon`] applies to an amount.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Check {
    /// Indicator whether the [`Coupon`] applies.
    #[serde(alias = "available")]
    pub applicable: bool,

    /// Discount the [`Coupon`] grants for the checked amount.
    #[serde(default)]
    pub discount: Option<Money>,

    /// Explanation of why the [`Coupon`] does not apply.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub message: Option<String>,
}
