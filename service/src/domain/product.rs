//! [`Product`] definitions.

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use common::DateTime;

use super::{order, user};

/// Product offered by the store.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// Name of this [`Product`].
    pub name: String,

    /// Description of this [`Product`].
    #[serde(default)]
    pub description: String,

    /// Current price of this [`Product`].
    pub price: Money,

    /// Price before discount, if this [`Product`] is discounted.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// URL of the cover image.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub image: Option<String>,

    /// URLs of the gallery images.
    #[serde(default)]
    pub images: Vec<String>,

    /// Number of items in stock.
    #[serde(default)]
    pub stock: u32,

    /// Number of items sold.
    #[serde(default, alias = "sales")]
    pub sales_count: u64,

    /// Commission paid to distributors for selling this [`Product`].
    #[serde(default, alias = "affiliate_rate")]
    pub commission_rate: Option<Percent>,

    /// ID of the [`Category`] this [`Product`] belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// [`Status`] of this [`Product`].
    #[serde(default)]
    pub status: Status,

    /// [`DateTime`] when this [`Product`] was created.
    #[serde(default)]
    pub created_at: Option<CreationDateTime>,
}

impl Product {
    /// Indicates whether this [`Product`] can be put into the cart.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == Status::Active && self.stock > 0
    }
}

/// ID of a [`Product`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

common::define_kind! {
    #[doc = "Sale status of a [`Product`]."]
    enum Status {
        #[doc = "[`Product`] is on sale."]
        Active = "active",

        #[doc = "[`Product`] is withdrawn from sale."]
        Inactive = "inactive",
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Active
    }
}

common::define_kind! {
    #[doc = "Ordering of a [`Product`] list."]
    enum Sort {
        #[doc = "Newest first."]
        Newest = "newest",

        #[doc = "Best selling first."]
        Sales = "sales",

        #[doc = "Cheapest first."]
        PriceAsc = "price_asc",

        #[doc = "Most expensive first."]
        PriceDesc = "price_desc",
    }
}

/// Category of [`Product`]s.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Category {
    /// ID of this [`Category`].
    pub id: CategoryId,

    /// Name of this [`Category`].
    pub name: String,

    /// Description of this [`Category`].
    #[serde(default, deserialize_with = "super::non_empty")]
    pub description: Option<String>,

    /// URL of the [`Category`] image.
    #[serde(default, deserialize_with = "super::non_empty")]
    pub image: Option<String>,

    /// Parent [`Category`], if any.
    #[serde(default)]
    pub parent: Option<CategoryId>,
}

/// ID of a [`Category`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct CategoryId(u64);

/// Customer review of a [`Product`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Review {
    /// ID of this [`Review`].
    pub id: ReviewId,

    /// Author of this [`Review`].
    #[serde(default, alias = "user_id")]
    pub user: Option<user::Id>,

    /// Reviewed [`Product`].
    #[serde(default, alias = "product_id")]
    pub product: Option<Id>,

    /// [`Rating`] given by the author.
    pub rating: Rating,

    /// Text of this [`Review`].
    #[serde(default)]
    pub content: String,

    /// URLs of the attached images.
    #[serde(default)]
    pub images: Vec<String>,

    /// Number of likes of this [`Review`].
    #[serde(default)]
    pub likes_count: u64,

    /// [`DateTime`] when this [`Review`] was posted.
    #[serde(default)]
    pub created_at: Option<DateTimeOf<(Review, unit::Creation)>>,
}

/// ID of a [`Review`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct ReviewId(u64);

/// Rating of a [`Review`], from one to five stars.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Creates a new [`Rating`] if the given number of `stars` is within
    /// `1..=5`.
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        (1..=5).contains(&stars).then_some(Self(stars))
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let stars = u8::deserialize(deserializer)?;
        Self::new(stars)
            .ok_or_else(|| D::Error::custom(format!("invalid rating: {stars}")))
    }
}

/// New [`Review`] of a purchased [`Product`].
#[derive(Clone, Debug, Serialize)]
pub struct ReviewDraft {
    /// Reviewed [`Product`].
    pub product_id: Id,

    /// [`Order`] the [`Product`] was purchased with.
    ///
    /// [`Order`]: order::Order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<order::Id>,

    /// [`Rating`] to give.
    pub rating: Rating,

    /// Text of the [`Review`].
    pub content: String,

    /// URLs of the images to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// [`DateTime`] when a [`Product`] was created.
pub type CreationDateTime = DateTimeOf<(Product, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Product, Rating, Status};

    #[test]
    fn deserializes_both_backend_shapes() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Tea", "price": 19.9, "original_price": null,
                "sales": 12, "affiliate_rate": 5, "stock": 3}"#,
        )
        .unwrap();
        assert_eq!(product.sales_count, 12);
        assert_eq!(product.commission_rate.unwrap().to_string(), "5");
        assert_eq!(product.status, Status::Active);
        assert!(product.is_available());

        let product: Product = serde_json::from_str(
            r#"{"id": 2, "name": "Cup", "price": "7.00", "stock": 0,
                "status": "inactive", "image": ""}"#,
        )
        .unwrap();
        assert_eq!(product.image, None);
        assert!(!product.is_available());
    }

    #[test]
    fn bounds_rating() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(
            serde_json::from_str::<Rating>("4").unwrap(),
            Rating::new(4).unwrap(),
        );
    }
}
