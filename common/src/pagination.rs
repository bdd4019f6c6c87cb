//! Abstractions for page-number pagination.

use serde::{Deserialize, Serialize};

/// Page of results returned by a paginated list endpoint.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    /// Total number of results across all pages.
    pub count: u64,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Results on this [`Page`].
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Indicates whether there is a [`Page`] after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Indicates whether there is a [`Page`] before this one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Maps the results of this [`Page`], keeping its navigation links.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arguments {
    /// One-based number of the requested page.
    page: u32,

    /// Number of results per page.
    page_size: u8,
}

impl Arguments {
    /// Default number of results per page.
    pub const DEFAULT_PAGE_SIZE: u8 = 20;

    /// Maximum number of results per page.
    pub const MAX_PAGE_SIZE: u8 = 100;

    /// Creates new pagination [`Arguments`].
    ///
    /// [`None`] is returned if `page` is zero or `page_size` is outside of
    /// `1..=`[`MAX_PAGE_SIZE`].
    ///
    /// [`MAX_PAGE_SIZE`]: Self::MAX_PAGE_SIZE
    #[must_use]
    pub fn new(page: u32, page_size: u8) -> Option<Self> {
        (page > 0 && (1..=Self::MAX_PAGE_SIZE).contains(&page_size))
            .then_some(Self { page, page_size })
    }

    /// Returns the requested page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    /// Returns query parameters representing these [`Arguments`].
    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Arguments, Page};

    #[test]
    fn validates_arguments() {
        assert!(Arguments::new(0, 20).is_none());
        assert!(Arguments::new(1, 0).is_none());
        assert!(Arguments::new(1, 101).is_none());

        let args = Arguments::new(3, 50).unwrap();
        assert_eq!(
            args.query(),
            [("page", "3".to_owned()), ("page_size", "50".to_owned())],
        );
        assert_eq!(Arguments::default().page_size(), 20);
    }

    #[test]
    fn deserializes_backend_page() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"count": 41, "next": "http://x/?page=2", "previous": null,
                "results": [1, 2, 3]}"#,
        )
        .unwrap();

        assert!(page.has_next());
        assert!(!page.has_previous());

        let page = page.map(|n| n * 10);
        assert_eq!(page.results, vec![10, 20, 30]);
        assert_eq!(page.count, 41);
    }
}
