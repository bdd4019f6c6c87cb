//! [`Query`] collection related to [`Address`]es.

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::Address,
    infra::{api::Method, Endpoint},
};

/// Queries all the saved [`Address`]es.
#[derive(Clone, Copy, Debug)]
pub struct List;

impl Endpoint for List {
    type Output = Vec<Address>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "addresses/".into()
    }
}
