//! [`Query`] definition.

pub mod address;
pub mod affiliate;
pub mod cart;
pub mod coupon;
pub mod distribution;
pub mod order;
pub mod product;
pub mod user;
pub mod withdrawal;

use tracerr::Traced;

#[cfg(doc)]
use crate::Command;
use crate::{
    infra::{api, Api, Endpoint},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// Every [`Endpoint`] is executable by the [`Service`] through its [`Api`],
/// both as a [`Query`] and as a [`Command`].
impl<A, S, E> Query<E> for Service<A, S>
where
    E: Endpoint,
    A: Api<E, Ok = E::Output, Err = Traced<api::Error>>,
{
    type Ok = E::Output;
    type Err = Traced<api::Error>;

    async fn execute(&self, endpoint: E) -> Result<Self::Ok, Self::Err> {
        self.api().execute(endpoint).await.map_err(tracerr::wrap!())
    }
}
