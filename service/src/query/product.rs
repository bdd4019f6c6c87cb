//! [`Query`] collection related to [`Product`]s.

use common::{pagination, Page};

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{
        product::{self, Category, Review, Sort},
        Product,
    },
    infra::{api::Method, Endpoint},
};

/// Queries a [`Page`] of [`Product`]s.
#[derive(Clone, Debug, Default)]
pub struct List {
    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// [`Category`] to list [`Product`]s of.
    pub category: Option<product::CategoryId>,

    /// Free-text filter.
    pub search: Option<String>,

    /// Ordering of the [`Product`]s.
    pub sort: Option<Sort>,
}

impl Endpoint for List {
    type Output = Page<Product>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "products/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.page.query().to_vec();
        if let Some(id) = self.category {
            query.push(("category", id.to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().into()));
        }
        query
    }
}

/// Searches [`Product`]s by a keyword.
#[derive(Clone, Debug)]
pub struct Search {
    /// Keyword to search by.
    pub keyword: String,

    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// Ordering of the found [`Product`]s.
    pub sort: Option<Sort>,
}

impl Endpoint for Search {
    type Output = Page<Product>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "products/search/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("keyword", self.keyword.clone())];
        query.extend(self.page.query());
        if let Some(sort) = self.sort {
            query.push(("sort_by", sort.as_str().into()));
        }
        query
    }
}

/// Queries a [`Product`] by its [`product::Id`].
#[derive(Clone, Copy, Debug)]
pub struct ById(pub product::Id);

impl Endpoint for ById {
    type Output = Product;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("products/{}/", self.0)
    }
}

/// Queries all the [`Category`]s.
#[derive(Clone, Copy, Debug)]
pub struct Categories;

impl Endpoint for Categories {
    type Output = Vec<Category>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "categories/".into()
    }
}

/// Queries a [`Category`] by its [`product::CategoryId`].
#[derive(Clone, Copy, Debug)]
pub struct CategoryById(pub product::CategoryId);

impl Endpoint for CategoryById {
    type Output = Category;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("categories/{}/", self.0)
    }
}

/// Curated [`Product`] selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    /// Recommended by the store.
    Recommended,

    /// Selling best right now.
    Hot,

    /// Recently added.
    New,
}

impl Endpoint for Selection {
    type Output = Vec<Product>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::Recommended => "products/recommended/",
            Self::Hot => "products/hot/",
            Self::New => "products/new/",
        }
        .into()
    }
}

/// Queries [`Product`]s related to the one with the provided
/// [`product::Id`].
#[derive(Clone, Copy, Debug)]
pub struct Related(pub product::Id);

impl Endpoint for Related {
    type Output = Vec<Product>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("products/recommendations/related/{}/", self.0)
    }
}

/// Queries a [`Page`] of [`Review`]s of a [`Product`].
#[derive(Clone, Copy, Debug)]
pub struct Reviews {
    /// Reviewed [`Product`].
    pub product: product::Id,

    /// Requested [`Page`].
    pub page: pagination::Arguments,

    /// Exact [`product::Rating`] to filter by.
    pub rating: Option<product::Rating>,

    /// Whether to list only [`Review`]s with images.
    pub with_images: bool,
}

impl Endpoint for Reviews {
    type Output = Page<Review>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "products/reviews/".into()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("product_id", self.product.to_string())];
        query.extend(self.page.query());
        if let Some(rating) = self.rating {
            query.push(("rating", rating.to_string()));
        }
        if self.with_images {
            query.push(("has_image", "true".into()));
        }
        query
    }
}

#[cfg(test)]
mod spec {
    use common::pagination;

    use crate::{domain::product::Sort, infra::Endpoint as _};

    use super::{List, Selection};

    #[test]
    fn builds_list_query() {
        let list = List {
            page: pagination::Arguments::new(2, 10).unwrap(),
            category: Some(3_u64.into()),
            search: Some("green tea".into()),
            sort: Some(Sort::PriceAsc),
        };

        assert_eq!(
            list.query(),
            vec![
                ("page", "2".to_owned()),
                ("page_size", "10".to_owned()),
                ("category", "3".to_owned()),
                ("search", "green tea".to_owned()),
                ("sort", "price_asc".to_owned()),
            ],
        );
        assert_eq!(List::default().query().len(), 2);
    }

    #[test]
    fn routes_selections() {
        assert_eq!(Selection::Hot.path(), "products/hot/");
        assert_eq!(Selection::New.path(), "products/new/");
    }
}
