//! [`Query`] collection related to the current [`User`].

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::User,
    infra::{api::Method, Endpoint},
};

/// Queries the [`User`] of the current session.
#[derive(Clone, Copy, Debug)]
pub struct Current;

impl Endpoint for Current {
    type Output = User;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "auth/user/".into()
    }
}
