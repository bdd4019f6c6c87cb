//! [`Query`] collection related to the affiliate program.

use common::{pagination, Page};
use tracerr::Traced;
use url::Url;

use crate::{
    domain::{
        affiliate::{Commission, CommissionStatus, Link, Stats},
        product,
    },
    infra::{api::Method, Endpoint},
    Query, Service,
};

/// Queries a [`Page`] of the customer affiliate [`Link`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Links {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// Promoted [`Product`] to filter by.
    ///
    /// [`Product`]: crate::domain::Product
    pub product: Option<product::Id>,
}

impl Endpoint for Links {
    type Output = Page<Link>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "affiliate/links/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(id) = self.product {
            query.push(("product", id.to_string()));
        }
        query
    }
}

/// Queries a [`Page`] of the earned [`Commission`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Commissions {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`CommissionStatus`] to filter by.
    pub status: Option<CommissionStatus>,
}

impl Endpoint for Commissions {
    type Output = Page<Commission>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "affiliate/commissions/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().into()));
        }
        query
    }
}

/// Queries the affiliate [`Stats`] of the customer.
#[derive(Clone, Copy, Debug)]
pub struct StatsOf;

impl Endpoint for StatsOf {
    type Output = Stats;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "affiliate/stats/".into()
    }
}

/// Builds a shareable storefront URL for the provided referral code.
///
/// Computed locally from the configured share origin, no backend call is
/// made.
#[derive(Clone, Debug)]
pub struct ShareLink {
    /// Referral code of a [`Link`].
    pub code: String,
}

impl<A, S> Query<ShareLink> for Service<A, S> {
    type Ok = Url;
    type Err = Traced<url::ParseError>;

    async fn execute(
        &self,
        ShareLink { code }: ShareLink,
    ) -> Result<Self::Ok, Self::Err> {
        let mut url = self
            .config()
            .share_origin
            .join("product")
            .map_err(tracerr::wrap!())?;
        _ = url.query_pairs_mut().clear().append_pair("ref", &code);
        Ok(url)
    }
}
