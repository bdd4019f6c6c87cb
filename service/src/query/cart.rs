//! [`Query`] collection related to the shopping cart.

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::cart::{Item, Size},
    infra::{api::Method, Endpoint},
};

/// Queries all the cart [`Item`]s.
#[derive(Clone, Copy, Debug)]
pub struct Items;

impl Endpoint for Items {
    type Output = Vec<Item>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "orders/cart/".into()
    }
}

/// Queries the number of units in the cart.
#[derive(Clone, Copy, Debug)]
pub struct Count;

impl Endpoint for Count {
    type Output = Size;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "orders/cart/count/".into()
    }
}
