//! [`Query`] collection related to the distribution program.

use common::{pagination, Page};

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{
        affiliate::CommissionStatus,
        distribution::{Commission, Order, Status},
    },
    infra::{api::Method, Endpoint},
};

/// Returns query parameters of the provided [`pagination::Arguments`] in the
/// form the distribution endpoints expect.
fn paging(page: pagination::Arguments) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.page().to_string()),
        ("limit", page.page_size().to_string()),
    ]
}

/// Queries the distribution program [`Status`] of the customer.
#[derive(Clone, Copy, Debug)]
pub struct StatusOf;

impl Endpoint for StatusOf {
    type Output = Status;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "accounts/distribution/status/".into()
    }
}

/// Queries a [`Page`] of [`Order`]s placed through the distributor.
#[derive(Clone, Copy, Debug, Default)]
pub struct Orders {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`CommissionStatus`] to filter by.
    pub status: Option<CommissionStatus>,
}

impl Endpoint for Orders {
    type Output = Page<Order>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "accounts/distribution/orders/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = paging(self.page);
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        query
    }
}

/// Queries a [`Page`] of the distributor [`Commission`] ledger.
#[derive(Clone, Debug, Default)]
pub struct Commissions {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// Kind of [`Commission`] entries to filter by.
    pub kind: Option<String>,
}

impl Endpoint for Commissions {
    type Output = Page<Commission>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "accounts/distribution/commission/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = paging(self.page);
        if let Some(kind) = &self.kind {
            query.push(("type", kind.clone()));
        }
        query
    }
}

#[cfg(test)]
mod spec {
    use common::pagination;

    use crate::infra::Endpoint as _;

    use super::Commissions;

    #[test]
    fn pages_with_limit() {
        let query = Commissions {
            page: pagination::Arguments::new(3, 15).unwrap(),
            kind: Some("settlement".into()),
        }
        .query();

        assert_eq!(
            query,
            vec![
                ("page", "3".to_owned()),
                ("limit", "15".to_owned()),
                ("type", "settlement".to_owned()),
            ],
        );
    }
}
