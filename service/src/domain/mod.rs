//! Domain definitions.

pub mod address;
pub mod affiliate;
pub mod cart;
pub mod coupon;
pub mod distribution;
pub mod order;
pub mod product;
pub mod user;
pub mod withdrawal;

use serde::{de::IntoDeserializer as _, Deserialize, Deserializer};

pub use self::{
    address::Address, coupon::Coupon, order::Order, product::Product,
    user::User, withdrawal::Withdrawal,
};

/// Deserializes an optional value, treating an empty string as absent.
///
/// The backend reports unset text fields as `""` rather than `null`.
pub(crate) fn non_empty<'de, D, T>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => {
            T::deserialize(s.into_deserializer()).map(Some)
        }
        Some(_) | None => Ok(None),
    }
}
