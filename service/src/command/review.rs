//! [`Endpoint`] posting a product [`Review`].

use crate::{
    domain::product::{Review, ReviewDraft},
    infra::{api::Method, Endpoint},
};

/// Posts a [`Review`] of a purchased product.
#[derive(Clone, Debug)]
pub struct CreateReview(pub ReviewDraft);

impl Endpoint for CreateReview {
    type Output = Review;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "products/reviews/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}
