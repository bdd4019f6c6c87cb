//! Shipping [`Address`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::user::Phone;

/// Saved shipping address of a customer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Address {
    /// ID of this [`Address`].
    pub id: Id,

    /// Name of the recipient.
    pub name: String,

    /// [`Phone`] of the recipient.
    pub phone: Phone,

    /// Province.
    pub province: String,

    /// City.
    pub city: String,

    /// District.
    #[serde(default)]
    pub district: String,

    /// Street, building and apartment.
    pub detail: String,

    /// Indicator whether this [`Address`] is used by default.
    #[serde(default)]
    pub is_default: bool,
}

/// ID of an [`Address`].
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

/// New or edited [`Address`].
#[derive(Clone, Debug, Serialize)]
pub struct Draft {
    /// Name of the recipient.
    pub name: String,

    /// [`Phone`] of the recipient.
    pub phone: Phone,

    /// Province.
    pub province: String,

    /// City.
    pub city: String,

    /// District.
    pub district: String,

    /// Street, building and apartment.
    pub detail: String,

    /// Indicator whether the [`Address`] should become the default one.
    pub is_default: bool,
}

impl From<Address> for Draft {
    fn from(address: Address) -> Self {
        Self {
            name: address.name,
            phone: address.phone,
            province: address.province,
            city: address.city,
            district: address.district,
            detail: address.detail,
            is_default: address.is_default,
        }
    }
}
