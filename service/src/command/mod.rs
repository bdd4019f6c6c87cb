//! [`Command`] definition.
//!
//! Commands with local effects on the session are implemented by the
//! [`Service`] explicitly. The rest are plain [`Endpoint`]s, executed
//! through the [`Service`] [`Api`] as they are.
//!
//! [`Api`]: crate::infra::Api
//! [`Endpoint`]: crate::infra::Endpoint
//! [`Service`]: crate::Service

pub mod address;
pub mod affiliate;
pub mod cart;
pub mod coupon;
pub mod distribution;
pub mod login;
pub mod logout;
pub mod oauth;
pub mod order;
pub mod password;
pub mod refresh_user;
pub mod register;
pub mod review;
pub mod update_user;
pub mod withdrawal;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    login::Login,
    logout::Logout,
    oauth::{AuthorizeOAuth, OAuthLogin},
    refresh_user::RefreshUser,
    register::Register,
    update_user::UpdateUser,
};

/// Builds a [`Service`] talking to the provided mock backend.
///
/// [`Service`]: crate::Service
#[cfg(test)]
pub(crate) fn mocked(
    server: &wiremock::MockServer,
) -> crate::Service<
    crate::infra::Http<crate::infra::Memory>,
    crate::infra::Memory,
> {
    use std::time::Duration;

    use crate::{
        infra::{api::http, Http, Memory},
        Config, Credentials, Router, Service,
    };

    let credentials = Credentials::new(Memory::new());
    let router = Router::storefront();
    let http = Http::new(
        &http::Config {
            base_url: format!("{}/api/", server.uri()).parse().unwrap(),
            timeout: Duration::from_millis(500),
        },
        credentials.clone(),
        router.clone(),
    )
    .unwrap();
    let config = Config {
        share_origin: "https://shop.example/".parse().unwrap(),
        oauth: oauth::Config {
            wechat_app_id: "wx-app".into(),
            douyin_app_id: "dy-key".into(),
            redirect_origin: "https://shop.example/".parse().unwrap(),
        },
    };
    Service::new(config, http, credentials, router)
}
