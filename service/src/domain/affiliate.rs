//! Affiliate program definitions.

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{product, Product};

/// Affiliate link promoting a [`Product`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Link {
    /// ID of this [`Link`].
    pub id: Id,

    /// Promoted [`Product`], if expanded by the backend.
    #[serde(default)]
    pub product: Option<Product>,

    /// Referral code of this [`Link`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub code: Option<String>,

    /// Full URL of this [`Link`], if provided by the backend.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub link: Option<String>,

    /// Number of visits through this [`Link`].
    #[serde(default)]
    pub clicks: u64,

    /// Number of orders placed through this [`Link`].
    #[serde(default, alias = "orders")]
    pub conversions: u64,

    /// Moment this [`Link`] was created.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Link, unit::Creation)>>,
}

/// ID of a [`Link`].
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

/// Request for a new [`Link`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LinkDraft {
    /// [`Product`] to promote.
    pub product: product::Id,
}

/// Commission earned through a [`Link`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Commission {
    /// ID of this [`Commission`].
    pub id: u64,

    /// Earned amount.
    pub amount: Money,

    /// Rate the amount was computed with.
    #[serde(default)]
    pub rate: Option<Percent>,

    /// [`CommissionStatus`] of this [`Commission`].
    pub status: CommissionStatus,

    /// Number of the order the [`Commission`] originates from.
    #[serde(default)]
    pub order_no: Option<String>,

    /// Moment this [`Commission`] was accrued.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Commission, unit::Creation)>>,
}

common::define_kind! {
    #[doc = "Settlement status of a [`Commission`]."]
    enum CommissionStatus {
        #[doc = "Awaiting order completion."]
        Pending = "pending",

        #[doc = "Paid out to the balance."]
        Settled = "settled",

        #[doc = "Voided by an order cancellation."]
        Cancelled = "cancelled",
    }
}

/// Aggregated affiliate statistics of the current customer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Stats {
    /// Total accrued commission.
    #[serde(default)]
    pub total_commission: Money,

    /// Commission awaiting settlement.
    #[serde(default)]
    pub pending_commission: Money,

    /// Commission already settled.
    #[serde(default)]
    pub settled_commission: Money,

    /// Total visits through all [`Link`]s.
    #[serde(default)]
    pub total_clicks: u64,

    /// Total orders placed through all [`Link`]s.
    #[serde(default)]
    pub total_conversions: u64,
}
