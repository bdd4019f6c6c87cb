//! [`Endpoint`] applying for the distributor program.

use serde::de::IgnoredAny;

use crate::{
    domain::distribution::Application,
    infra::{api::Method, Endpoint},
};

/// Submits an [`Application`] for the distributor program.
#[derive(Clone, Debug)]
pub struct ApplyDistribution(pub Application);

impl Endpoint for ApplyDistribution {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "accounts/distribution/apply/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}
