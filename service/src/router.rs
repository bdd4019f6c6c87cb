//! [`Router`] guarding navigation by the session state.

use std::{borrow::Cow, fmt, sync::Arc};

use tokio::sync::watch;

/// Path of the login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the original target of a login redirect.
pub const REDIRECT_PARAM: &str = "redirect";

/// Navigation guard of a [`Route`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Guard {
    /// [`Route`] is reachable by anyone.
    Unguarded,

    /// [`Route`] requires an authenticated session.
    Guarded,
}

/// Named path pattern of the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Route {
    /// Name of this [`Route`].
    pub name: &'static str,

    /// Path pattern of this [`Route`].
    ///
    /// Segments starting with `:` match any non-empty segment.
    pub path: &'static str,

    /// [`Guard`] of this [`Route`].
    pub guard: Guard,
}

impl Route {
    /// Creates a new [`Guard::Unguarded`] [`Route`].
    #[must_use]
    pub const fn open(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            guard: Guard::Unguarded,
        }
    }

    /// Creates a new [`Guard::Guarded`] [`Route`].
    #[must_use]
    pub const fn guarded(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            guard: Guard::Guarded,
        }
    }

    /// Indicates whether this [`Route`] matches the provided `path`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = segments(self.path);
        let mut actual = segments(path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(a)) if p.starts_with(':') || p == a => {}
                (Some(_), Some(_) | None) | (None, Some(_)) => return false,
            }
        }
    }
}

/// Splits the provided `path` into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Location of the client: a path with query parameters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Location {
    /// Path of this [`Location`], always starting with `/`.
    path: String,

    /// Decoded query parameters of this [`Location`].
    query: Vec<(String, String)>,
}

impl Location {
    /// Parses a [`Location`] from the provided full path.
    ///
    /// Fragments are dropped and a missing leading `/` is added.
    #[must_use]
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = target.split_once('?').unwrap_or((target, ""));

        let path = if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        };
        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(k).into_owned(), decode(v).into_owned())
            })
            .collect();

        Self { path, query }
    }

    /// Returns the path of this [`Location`].
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the value of the query parameter with the provided `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v.as_str()))
    }

    /// Sets the query parameter with the provided `name` to `value`.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self
            .query
            .iter_mut()
            .find_map(|(k, v)| (k == name).then_some(v))
        {
            *slot = value;
        } else {
            self.query.push((name.to_owned(), value));
        }
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (n, (k, v)) in self.query.iter().enumerate() {
            let sep = if n == 0 { '?' } else { '&' };
            write!(
                f,
                "{sep}{}={}",
                urlencoding::encode(k),
                urlencoding::encode(v),
            )?;
        }
        Ok(())
    }
}

/// Decodes a query component, falling back to the raw input if it is not
/// valid UTF-8 after decoding.
fn decode(raw: &str) -> Cow<'_, str> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        return Cow::Owned(
            urlencoding::decode(&spaced)
                .map_or_else(|_| spaced.clone(), Cow::into_owned),
        );
    }
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Outcome of a guarded navigation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Navigation {
    /// Navigation proceeds to the target [`Location`].
    Proceed(Location),

    /// Navigation is redirected to the login entry point.
    Redirect {
        /// Originally requested [`Location`].
        from: Location,

        /// Login [`Location`] carrying the original target.
        to: Location,
    },
}

impl Navigation {
    /// Returns the [`Location`] the client ends up at.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Proceed(to) | Self::Redirect { to, .. } => to,
        }
    }
}

/// Route table and current [`Location`] of the client.
#[derive(Clone, Debug)]
pub struct Router {
    /// Shared state of this [`Router`].
    inner: Arc<Inner>,
}

/// Shared state of a [`Router`].
#[derive(Debug)]
struct Inner {
    /// Known [`Route`]s, matched in order.
    routes: Vec<Route>,

    /// Current [`Location`], observable by subscribers.
    location: watch::Sender<Location>,
}

impl Router {
    /// Creates a new [`Router`] with the provided [`Route`]s, located at the
    /// root path.
    #[must_use]
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            inner: Arc::new(Inner {
                routes: routes.into_iter().collect(),
                location: watch::Sender::new(Location::parse("/")),
            }),
        }
    }

    /// Creates a new [`Router`] with the storefront [`Route`]s.
    #[must_use]
    pub fn storefront() -> Self {
        Self::new([
            Route::open("home", "/"),
            Route::open("product-detail", "/product/:id"),
            Route::open("search", "/search"),
            Route::guarded("cart", "/cart"),
            Route::guarded("checkout", "/checkout"),
            Route::guarded("payment", "/payment/:orderId"),
            Route::guarded("profile", "/profile"),
            Route::guarded("affiliate-dashboard", "/affiliate"),
            Route::open("login", LOGIN_PATH),
            Route::open("register", "/register"),
            Route::guarded("orders", "/orders"),
            Route::guarded("order-detail", "/order/:id"),
            Route::guarded("address", "/address"),
            Route::guarded("coupons", "/coupons"),
            Route::guarded("after-sales", "/after-sales"),
            Route::guarded("distribution", "/distribution"),
            Route::guarded(
                "distribution-withdrawal",
                "/distribution/withdrawal",
            ),
            Route::guarded(
                "distribution-application",
                "/distribution/application",
            ),
            Route::guarded("distribution-team", "/distribution/team"),
            Route::guarded("distribution-ranking", "/distribution/ranking"),
            Route::guarded("collection", "/collection"),
            Route::guarded("collection-folder", "/collection/:id"),
            Route::open("collection-share", "/collection/share/:code"),
            Route::open("oauth-callback", "/auth/callback/:platform"),
            Route::open("wechat-callback", "/wechat-callback"),
        ])
    }

    /// Returns the first [`Route`] matching the provided `path`.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<&Route> {
        self.inner.routes.iter().find(|r| r.matches(path))
    }

    /// Returns the current [`Location`].
    #[must_use]
    pub fn location(&self) -> Location {
        self.inner.location.borrow().clone()
    }

    /// Subscribes to changes of the current [`Location`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.inner.location.subscribe()
    }

    /// Navigates to the provided `target`.
    ///
    /// A [`Guard::Guarded`] target is redirected to the login entry point
    /// unless `authenticated`. Unknown paths are not guarded.
    pub fn navigate(&self, target: &str, authenticated: bool) -> Navigation {
        let from = Location::parse(target);
        let guarded = self
            .route(from.path())
            .is_some_and(|r| r.guard == Guard::Guarded);

        let navigation = if guarded && !authenticated {
            let to = Self::login_for(&from);
            Navigation::Redirect { from, to }
        } else {
            Navigation::Proceed(from)
        };
        drop(self.inner.location.send_replace(navigation.location().clone()));
        navigation
    }

    /// Redirects the client from its current [`Location`] to the login entry
    /// point.
    ///
    /// Does nothing if the client is already there, so the original target
    /// survives repeated redirects. Returns the new [`Location`], if
    /// redirected.
    pub fn redirect_to_login(&self) -> Option<Location> {
        let mut redirected = None;
        _ = self.inner.location.send_if_modified(|current| {
            if current.path() == LOGIN_PATH {
                return false;
            }
            let to = Self::login_for(current);
            *current = to.clone();
            redirected = Some(to);
            true
        });
        redirected
    }

    /// Returns the full path to continue with after a successful login.
    ///
    /// Only local paths are honored, anything else yields the root path.
    #[must_use]
    pub fn return_target(&self) -> String {
        self.location()
            .param(REDIRECT_PARAM)
            .filter(|t| t.starts_with('/') && !t.starts_with("//"))
            .map_or_else(|| "/".to_owned(), ToOwned::to_owned)
    }

    /// Builds the login [`Location`] returning to the provided one.
    fn login_for(from: &Location) -> Location {
        Location::parse(LOGIN_PATH).with_param(REDIRECT_PARAM, from.to_string())
    }
}

#[cfg(test)]
mod spec {
    use super::{Guard, Location, Navigation, Router};

    #[test]
    fn redirects_guarded_route_when_anonymous() {
        let router = Router::storefront();

        let nav = router.navigate("/order/5?tab=logistics", false);
        let Navigation::Redirect { from, to } = &nav else {
            panic!("expected redirect, got {nav:?}");
        };
        assert_eq!(from.to_string(), "/order/5?tab=logistics");
        assert_eq!(
            to.to_string(),
            "/login?redirect=%2Forder%2F5%3Ftab%3Dlogistics",
        );
        assert_eq!(router.location(), *to);
        assert_eq!(router.return_target(), "/order/5?tab=logistics");
    }

    #[test]
    fn proceeds_when_authenticated() {
        let router = Router::storefront();

        let nav = router.navigate("/cart", true);
        assert_eq!(nav, Navigation::Proceed(Location::parse("/cart")));
        assert_eq!(router.location().path(), "/cart");
    }

    #[test]
    fn leaves_open_and_unknown_routes_unguarded() {
        let router = Router::storefront();

        for path in ["/", "/product/12", "/collection/share/xyz", "/nowhere"] {
            assert!(
                matches!(router.navigate(path, false), Navigation::Proceed(_)),
                "{path} should not be guarded",
            );
        }
        assert_eq!(
            router.route("/collection/7").map(|r| r.guard),
            Some(Guard::Guarded),
        );
    }

    #[test]
    fn keeps_original_target_on_repeated_redirects() {
        let router = Router::storefront();
        drop(router.navigate("/orders?page=2", true));

        let first = router.redirect_to_login().unwrap();
        assert_eq!(first.param("redirect"), Some("/orders?page=2"));
        assert_eq!(router.redirect_to_login(), None);
        assert_eq!(router.return_target(), "/orders?page=2");
    }

    #[test]
    fn rejects_foreign_return_targets() {
        let router = Router::storefront();

        drop(router.navigate("/login?redirect=https://evil.example", false));
        assert_eq!(router.return_target(), "/");

        drop(router.navigate("/login?redirect=%2F%2Fevil.example", false));
        assert_eq!(router.return_target(), "/");

        drop(router.navigate("/login", false));
        assert_eq!(router.return_target(), "/");
    }

    #[test]
    fn parses_locations() {
        let loc = Location::parse("search?q=green+tea&page=2#top");
        assert_eq!(loc.path(), "/search");
        assert_eq!(loc.param("q"), Some("green tea"));
        assert_eq!(loc.param("page"), Some("2"));
        assert_eq!(loc.to_string(), "/search?q=green%20tea&page=2");

        let loc = loc.with_param("page", "3");
        assert_eq!(loc.param("page"), Some("3"));
    }

    #[tokio::test]
    async fn publishes_location_changes() {
        let router = Router::storefront();
        let mut rx = router.subscribe();

        drop(router.navigate("/profile", false));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().path(), "/login");
    }
}
