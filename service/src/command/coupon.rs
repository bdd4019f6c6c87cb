//! [`Endpoint`]s claiming and applying [`Coupon`]s.
//!
//! [`Coupon`]: crate::domain::Coupon

use common::Money;
use serde::de::IgnoredAny;
use serde_json::json;

use crate::{
    domain::coupon::{self, Check},
    infra::{api::Method, Endpoint},
};

/// Claims a [`Coupon`] for the current [`User`].
///
/// [`Coupon`]: crate::domain::Coupon
/// [`User`]: crate::domain::User
#[derive(Clone, Copy, Debug)]
pub struct ReceiveCoupon(pub coupon::Id);

impl Endpoint for ReceiveCoupon {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("coupons/{}/receive/", self.0)
    }
}

/// Checks whether a [`Coupon`] applies to an order of the provided amount.
///
/// [`Coupon`]: crate::domain::Coupon
#[derive(Clone, Copy, Debug)]
pub struct CheckCoupon {
    /// ID of the [`Coupon`] to check.
    ///
    /// [`Coupon`]: crate::domain::Coupon
    pub id: coupon::Id,

    /// Order amount to check against.
    pub amount: Money,
}

impl Endpoint for CheckCoupon {
    type Output = Check;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("coupons/{}/check/", self.id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({ "amount": self.amount })))
    }
}
