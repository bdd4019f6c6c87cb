//! [`Endpoint`] generating affiliate [`Link`]s.

use crate::{
    domain::affiliate::{Link, LinkDraft},
    infra::{api::Method, Endpoint},
};

/// Generates a new affiliate [`Link`] to a product.
#[derive(Clone, Copy, Debug)]
pub struct GenerateLink(pub LinkDraft);

impl Endpoint for GenerateLink {
    type Output = Link;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "affiliate/links/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(self.0).map(Some)
    }
}
