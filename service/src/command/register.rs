//! [`Command`] for registering a new [`User`].

use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretBox};
use serde::Deserialize;
use serde_json::json;
use tracerr::Traced;

use crate::{
    domain::{
        user::{session::Token, Email, Password, Username},
        User,
    },
    infra::{
        api::{self, Method},
        storage::KeyValue,
        Api, Endpoint,
    },
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`User`].
///
/// Starts a new session only if the backend issues a [`Token`] right away.
#[derive(Clone, Debug)]
pub struct Register {
    /// [`Username`] of the new [`User`].
    pub username: Username,

    /// [`Password`] of the new [`User`].
    pub password: SecretBox<Password>,

    /// [`Email`] of the new [`User`].
    pub email: Email,
}

/// Backend call of the [`Register`] [`Command`].
#[derive(Clone, Debug)]
pub struct Request(#[debug(skip)] pub Register);

impl Endpoint for Request {
    type Output = Output;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "auth/register/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        let Register {
            username,
            password,
            email,
        } = &self.0;
        Ok(Some(json!({
            "username": username,
            "password": password.expose_secret().as_ref(),
            "email": email,
        })))
    }
}

/// Response of the backend to a [`Request`].
#[derive(Clone, Debug, Deserialize)]
pub struct Output {
    /// [`Token`] of the started session, if the backend starts one.
    #[serde(default)]
    pub token: Option<Token>,

    /// Registered [`User`].
    pub user: User,
}

/// Result of the [`Register`] [`Command`].
#[derive(Clone, Debug)]
pub struct Registered {
    /// Registered [`User`].
    pub user: User,

    /// Indicator whether a session has been started.
    pub logged_in: bool,
}

impl<A, S> Command<Register> for Service<A, S>
where
    A: Api<Request, Ok = Output, Err = Traced<api::Error>>,
    S: KeyValue,
{
    type Ok = Registered;
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: Register) -> Result<Self::Ok, Self::Err> {
        let Output { token, user } = self
            .api()
            .execute(Request(cmd))
            .await
            .map_err(tracerr::wrap!())?;

        let logged_in = token.is_some();
        if let Some(token) = token {
            self.credentials().set_session(token, user.clone()).await;
        }

        Ok(Registered { user, logged_in })
    }
}
