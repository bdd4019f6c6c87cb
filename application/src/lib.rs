//! Application provides a terminal shell driving the storefront [`Service`].

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

pub mod args;
pub mod config;
mod context;
pub mod error;
pub mod notifier;
pub mod shell;

use service::{
    infra::{api, Fs, Http},
    Credentials, Router,
};
use tracerr::Traced;
// Used in binary.
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    context::Context,
    error::{AsError, Error},
    notifier::{Console, Notifier},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<Http<Fs>, Fs>;

/// Builds the [`Service`] described by the provided [`Config`].
///
/// The persisted session is not restored yet.
///
/// # Errors
///
/// If the HTTP client cannot be initialized.
pub fn build_service(conf: &Config) -> Result<Service, Traced<api::Error>> {
    let credentials = Credentials::new(Fs::new(conf.storage.path.clone()));
    let router = Router::storefront();
    let api = Http::new(
        &conf.api.clone().into(),
        credentials.clone(),
        router.clone(),
    )
    .map_err(tracerr::wrap!())?;

    Ok(service::Service::new(
        conf.service(),
        api,
        credentials,
        router,
    ))
}
