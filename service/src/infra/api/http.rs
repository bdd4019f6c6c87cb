//! HTTP [`Api`] implementation.

use std::time::{Duration, Instant};

use derive_more::Debug;
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::{
    credentials::Credentials,
    infra::storage::KeyValue,
    router::Router,
};

use super::{Api, Endpoint, Error, Rejection, StatusCode};

/// [`Http`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL every [`Endpoint`] path is resolved against.
    #[default(Url::parse("http://127.0.0.1:8000/api/").expect("valid URL"))]
    pub base_url: Url,

    /// Timeout applied to every request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,
}

/// [`Api`] reaching the backend over HTTP.
///
/// Every call passes through the same pipeline: the bearer token of the
/// current session is attached on the way out, and the response is
/// classified on the way back. A `401 Unauthorized` response ends the session
/// the call was issued with and redirects the [`Router`] to the login entry
/// point.
#[derive(Debug)]
pub struct Http<S> {
    /// Underlying HTTP client.
    #[debug(skip)]
    client: reqwest::Client,

    /// Base URL of the backend, always ending with `/`.
    base_url: Url,

    /// [`Credentials`] providing and invalidating the session.
    credentials: Credentials<S>,

    /// [`Router`] to redirect on session invalidation.
    router: Router,
}

impl<S> Http<S> {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying HTTP client cannot be initialized.
    pub fn new(
        conf: &Config,
        credentials: Credentials<S>,
        router: Router,
    ) -> Result<Self, Traced<Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(|e| tracerr::new!(Error::Init(e)))?;

        let mut base_url = conf.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            credentials,
            router,
        })
    }

    /// Returns the base URL of this [`Http`] client.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl<S> Clone for Http<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            credentials: self.credentials.clone(),
            router: self.router.clone(),
        }
    }
}

impl<S, E> Api<E> for Http<S>
where
    S: KeyValue,
    E: Endpoint,
{
    type Ok = E::Output;
    type Err = Traced<Error>;

    async fn execute(&self, endpoint: E) -> Result<Self::Ok, Self::Err> {
        let method = endpoint.method();
        let path = endpoint.path();
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let mut request = self.client.request(method.clone(), url);
        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) =
            endpoint.body().map_err(|e| tracerr::new!(Error::Encode(e)))?
        {
            request = request.json(&body);
        }
        let token = self.credentials.token();
        if let Some(token) = &token {
            request = request.bearer_auth(token.as_str());
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            log::warn!(%method, %path, "request was not answered: {e}");
            tracerr::new!(Error::Network(e))
        })?;
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) if status.is_success() => {
                log::warn!(%method, %path, "response body was cut off: {e}");
                return Err(tracerr::new!(Error::Network(e)));
            }
            // Rejections are classified by their status alone.
            Err(e) => {
                log::debug!(%method, %path, "rejection body unreadable: {e}");
                Vec::new()
            }
        };
        log::debug!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed = ?started.elapsed(),
            "backend responded",
        );

        if status.is_success() {
            let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
                b"null"
            } else {
                &body
            };
            return serde_json::from_slice(body)
                .map_err(|e| tracerr::new!(Error::Decode(e)));
        }

        let rejection = Rejection {
            status,
            message: Rejection::message_of(&body),
            path,
        };
        if status == StatusCode::UNAUTHORIZED {
            if let Some(token) = &token {
                _ = self.credentials.invalidate(token).await;
            }
            // A newer session may have started while this call was in
            // flight, in which case it stays where it is.
            if !self.credentials.is_authenticated() {
                if let Some(to) = self.router.redirect_to_login() {
                    log::info!("redirected to `{to}` after session expiry");
                }
            }
        }
        Err(tracerr::new!(Error::rejected(rejection)))
    }
}
