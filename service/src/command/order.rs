//! [`Endpoint`]s placing and managing [`Order`]s.

use serde::de::IgnoredAny;

use crate::{
    domain::{
        order::{self, Draft, Payment},
        Order,
    },
    infra::{api::Method, Endpoint},
};

/// Places a new [`Order`].
#[derive(Clone, Debug)]
pub struct CreateOrder(pub Draft);

impl Endpoint for CreateOrder {
    type Output = Order;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "orders/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// Cancels a pending [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct CancelOrder(pub order::Id);

impl Endpoint for CancelOrder {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("orders/{}/cancel/", self.0)
    }
}

/// Pays a pending [`Order`].
///
/// Outputs the payload of the payment gateway as is.
#[derive(Clone, Copy, Debug)]
pub struct PayOrder {
    /// ID of the [`Order`] to pay.
    pub id: order::Id,

    /// [`Payment`] details.
    pub payment: Payment,
}

impl Endpoint for PayOrder {
    type Output = serde_json::Value;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("orders/{}/pay/", self.id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self.payment).map(Some)
    }
}

/// Confirms receipt of a shipped [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct ConfirmOrder(pub order::Id);

impl Endpoint for ConfirmOrder {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("orders/{}/confirm/", self.0)
    }
}
