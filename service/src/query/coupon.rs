//! [`Query`] collection related to [`Coupon`]s.

use common::{pagination, Page};

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{
        coupon::{self, Status},
        Coupon,
    },
    infra::{api::Method, Endpoint},
};

/// Queries a [`Page`] of the received [`Coupon`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct List {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`Status`] to filter by.
    pub status: Option<Status>,
}

impl Endpoint for List {
    type Output = Page<Coupon>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "coupons/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        query
    }
}

/// Queries [`Coupon`]s available to be received.
#[derive(Clone, Copy, Debug)]
pub struct Available;

impl Endpoint for Available {
    type Output = Vec<Coupon>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "coupons/available/".into()
    }
}

/// Queries a [`Coupon`] by its [`coupon::Id`].
#[derive(Clone, Copy, Debug)]
pub struct ById(pub coupon::Id);

impl Endpoint for ById {
    type Output = Coupon;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("coupons/{}/", self.0)
    }
}
