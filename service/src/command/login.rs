//! [`Command`] for logging in with a username and a password.

use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretBox};
use serde::Deserialize;
use serde_json::json;
use tracerr::Traced;

use crate::{
    domain::{
        user::{session::Token, Password, Username},
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

/// [`Command`] for logging in with a [`Username`] and a [`Password`].
///
/// Starts a new session on success.
#[derive(Clone, Debug)]
pub struct Login {
    /// [`Username`] of the [`User`].
    pub username: Username,

    /// [`Password`] of the [`User`].
    pub password: SecretBox<Password>,
}

/// Backend call of the [`Login`] [`Command`].
#[derive(Clone, Debug)]
pub struct Request {
    /// [`Username`] of the [`User`].
    pub username: Username,

    /// [`Password`] of the [`User`].
    #[debug(skip)]
    pub password: SecretBox<Password>,
}

impl Endpoint for Request {
    type Output = Output;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "auth/login/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({
            "username": self.username,
            "password": self.password.expose_secret().as_ref(),
        })))
    }
}

/// Response of the backend to a [`Request`].
#[derive(Clone, Debug, Deserialize)]
pub struct Output {
    /// [`Token`] of the started session.
    pub token: Token,

    /// Authenticated [`User`].
    pub user: User,
}

impl<A, S> Command<Login> for Service<A, S>
where
    A: Api<Request, Ok = Output, Err = Traced<api::Error>>,
    S: KeyValue,
{
    type Ok = User;
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: Login) -> Result<Self::Ok, Self::Err> {
        let Login { username, password } = cmd;

        let Output { token, user } = self
            .api()
            .execute(Request { username, password })
            .await
            .map_err(tracerr::wrap!())?;
        self.credentials().set_session(token, user.clone()).await;

        Ok(user)
    }
}
