//! [`Endpoint`]s changing the shopping cart.

use serde::de::IgnoredAny;
use serde_json::json;

use crate::{
    domain::{
        cart::{self, Count, Item},
        product,
    },
    infra::{api::Method, Endpoint},
};

/// Adds a product to the shopping cart.
#[derive(Clone, Copy, Debug)]
pub struct AddToCart {
    /// ID of the product to add.
    pub product_id: product::Id,

    /// Number of units to add.
    pub quantity: Count,
}

impl Endpoint for AddToCart {
    type Output = Item;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "orders/cart/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({
            "product_id": self.product_id,
            "quantity": self.quantity,
        })))
    }
}

/// Sets the quantity of a cart [`Item`].
#[derive(Clone, Copy, Debug)]
pub struct UpdateCartItem {
    /// ID of the cart [`Item`].
    pub id: cart::Id,

    /// New number of units.
    pub quantity: Count,
}

impl Endpoint for UpdateCartItem {
    type Output = Item;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("orders/cart/{}/", self.id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({ "quantity": self.quantity })))
    }
}

/// Removes an [`Item`] from the shopping cart.
#[derive(Clone, Copy, Debug)]
pub struct RemoveFromCart(pub cart::Id);

impl Endpoint for RemoveFromCart {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("orders/cart/{}/", self.0)
    }
}

/// Removes every [`Item`] from the shopping cart.
#[derive(Clone, Copy, Debug)]
pub struct ClearCart;

impl Endpoint for ClearCart {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        "orders/cart/clear/".into()
    }
}
