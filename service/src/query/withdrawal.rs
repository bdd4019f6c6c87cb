//! [`Query`] collection related to [`Withdrawal`]s.

use common::{pagination, Page};

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{withdrawal, Withdrawal},
    infra::{api::Method, Endpoint},
};

/// Queries a [`Page`] of the requested [`Withdrawal`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct List {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`withdrawal::Status`] to filter by.
    pub status: Option<withdrawal::Status>,
}

impl Endpoint for List {
    type Output = Page<Withdrawal>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "withdrawals/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        query
    }
}

/// Queries a [`Withdrawal`] by its [`withdrawal::Id`].
#[derive(Clone, Copy, Debug)]
pub struct ById(pub withdrawal::Id);

impl Endpoint for ById {
    type Output = Withdrawal;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("withdrawals/{}/", self.0)
    }
}
