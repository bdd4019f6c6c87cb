//! [`Decimal`] wire helpers.
//!
//! Backend sends decimal values either as JSON numbers (`99.9`) or as strings
//! (`"99.90"`), and accepts JSON numbers back.

use std::str::FromStr as _;

use rust_decimal::{
    prelude::{FromPrimitive as _, ToPrimitive as _},
    Decimal,
};
use serde::{de, ser, Deserialize, Deserializer, Serializer};

/// Raw wire representation of a [`Decimal`].
#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    /// Integer JSON number.
    Integer(i64),

    /// Floating-point JSON number.
    Float(f64),

    /// Decimal string.
    Text(String),
}

/// Serializes the provided [`Decimal`] as a JSON number.
pub(crate) fn serialize<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.is_integer() {
        if let Some(int) = value.to_i64() {
            return serializer.serialize_i64(int);
        }
    }
    let float = value.to_f64().ok_or_else(|| {
        ser::Error::custom(format!("`{value}` is not representable as f64"))
    })?;
    serializer.serialize_f64(float)
}

/// Deserializes a [`Decimal`] from either a JSON number or a string.
pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Decimal, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Integer(int) => Ok(Decimal::from(int)),
        Repr::Float(float) => Decimal::from_f64(float).ok_or_else(|| {
            de::Error::custom(format!("`{float}` is not a valid decimal"))
        }),
        Repr::Text(text) => Decimal::from_str(text.trim()).map_err(|e| {
            de::Error::custom(format!("`{text}` is not a valid decimal: {e}"))
        }),
    }
}
