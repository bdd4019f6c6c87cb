//! [`Endpoint`]s managing shipping [`Address`]es.

use serde::de::IgnoredAny;

use crate::{
    domain::{
        address::{self, Draft},
        Address,
    },
    infra::{api::Method, Endpoint},
};

/// Creates a new [`Address`].
#[derive(Clone, Debug)]
pub struct CreateAddress(pub Draft);

impl Endpoint for CreateAddress {
    type Output = Address;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "addresses/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}

/// Replaces an existing [`Address`].
#[derive(Clone, Debug)]
pub struct UpdateAddress {
    /// ID of the [`Address`] to replace.
    pub id: address::Id,

    /// New contents of the [`Address`].
    pub draft: Draft,
}

impl Endpoint for UpdateAddress {
    type Output = Address;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("addresses/{}/", self.id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.draft).map(Some)
    }
}

/// Deletes an [`Address`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteAddress(pub address::Id);

impl Endpoint for DeleteAddress {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("addresses/{}/", self.0)
    }
}

/// Makes an [`Address`] the default one.
#[derive(Clone, Copy, Debug)]
pub struct SetDefaultAddress(pub address::Id);

impl Endpoint for SetDefaultAddress {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("addresses/{}/default/", self.0)
    }
}
