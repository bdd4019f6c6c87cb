//! [`Withdrawal`] definitions.

use common::{unit, DateTimeOf, Money};
use derive_more::{Debug, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Payout of the earned commission to a bank account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Withdrawal {
    /// ID of this [`Withdrawal`].
    pub id: Id,

    /// Withdrawn amount.
    pub amount: Money,

    /// [`Status`] of this [`Withdrawal`].
    pub status: Status,

    /// Name of the receiving bank.
    #[serde(default)]
    pub bank_name: Option<String>,

    /// Receiving bank account, masked by the backend.
    #[serde(default)]
    pub bank_account: Option<String>,

    /// Moment this [`Withdrawal`] was requested.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Withdrawal, unit::Creation)>>,
}

/// ID of a [`Withdrawal`].
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
    #[doc = "Processing status of a [`Withdrawal`]."]
    enum Status {
        #[doc = "Awaiting review."]
        Pending = "pending",

        #[doc = "Approved, awaiting transfer."]
        Approved = "approved",

        #[doc = "Transferred to the bank account."]
        Completed = "completed",

        #[doc = "Rejected by the store."]
        Rejected = "rejected",

        #[doc = "Cancelled by the customer."]
        Cancelled = "cancelled",
    }
}

/// Request for a new [`Withdrawal`].
#[derive(Clone, Debug, Serialize)]
pub struct Draft {
    /// Amount to withdraw.
    pub amount: Money,

    /// Receiving bank account.
    #[debug(skip)]
    pub bank_account: String,

    /// Name of the receiving bank.
    pub bank_name: String,
}
