//! [`Query`] collection related to [`Order`]s.

use common::{pagination, Page};

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{
        order::{self, Logistics, Status},
        Order,
    },
    infra::{api::Method, Endpoint},
};

/// Queries a [`Page`] of the customer [`Order`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct List {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`Status`] to filter by.
    pub status: Option<Status>,
}

impl Endpoint for List {
    type Output = Page<Order>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "orders/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        query
    }
}

/// Queries an [`Order`] by its [`order::Id`].
#[derive(Clone, Copy, Debug)]
pub struct ById(pub order::Id);

impl Endpoint for ById {
    type Output = Order;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("orders/{}/", self.0)
    }
}

/// Queries shipment [`Logistics`] of an [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct LogisticsOf(pub order::Id);

impl Endpoint for LogisticsOf {
    type Output = Logistics;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("orders/{}/logistics/", self.0)
    }
}
