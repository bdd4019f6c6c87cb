//! Service contains the storefront client logic: session state, the request
//! pipeline towards the backend and the route guard.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod credentials;
pub mod domain;
pub mod infra;
pub mod query;
pub mod router;

use derive_more::Debug;
use url::Url;

#[cfg(doc)]
use infra::{Api, Storage};
use infra::storage::KeyValue;

pub use self::{
    command::Command,
    credentials::Credentials,
    query::Query,
    router::{Navigation, Router},
};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Origin of the storefront, used for building shareable links.
    pub share_origin: Url,

    /// [`command::AuthorizeOAuth`] configuration.
    pub oauth: command::oauth::Config,
}

/// Storefront client service.
#[derive(Clone, Debug)]
pub struct Service<A, S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Api`] of this [`Service`].
    api: A,

    /// [`Credentials`] of this [`Service`].
    credentials: Credentials<S>,

    /// [`Router`] of this [`Service`].
    router: Router,
}

impl<A, S> Service<A, S> {
    /// Creates a new [`Service`] with the provided parameters.
    ///
    /// The provided `api` is expected to share the same [`Credentials`] and
    /// [`Router`], so that the backend and the route guard observe a single
    /// session.
    #[must_use]
    pub fn new(
        config: Config,
        api: A,
        credentials: Credentials<S>,
        router: Router,
    ) -> Self {
        Self {
            config,
            api,
            credentials,
            router,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Api`] of this [`Service`].
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns [`Credentials`] of this [`Service`].
    #[must_use]
    pub fn credentials(&self) -> &Credentials<S> {
        &self.credentials
    }

    /// Returns [`Router`] of this [`Service`].
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigates to the provided `target` path, applying the route guard
    /// against the current session.
    pub fn navigate(&self, target: &str) -> Navigation {
        self.router
            .navigate(target, self.credentials.is_authenticated())
    }
}

impl<A, S: KeyValue> Service<A, S> {
    /// Starts this [`Service`] by restoring a previously persisted session
    /// from the [`Storage`].
    ///
    /// The restored token is trusted without asking the backend. Returns
    /// whether a session has been restored.
    pub async fn start(&self) -> bool {
        self.credentials.restore_from_storage().await
    }
}
