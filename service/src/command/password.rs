//! [`Endpoint`]s managing the [`Password`] of a [`User`].
//!
//! [`User`]: crate::domain::User

use secrecy::{ExposeSecret as _, SecretBox};
use serde::de::IgnoredAny;
use serde_json::json;

use crate::{
    domain::user::{Email, Password},
    infra::{api::Method, Endpoint},
};

/// Changes the [`Password`] of the current [`User`].
///
/// [`User`]: crate::domain::User
#[derive(Clone, Debug)]
pub struct ChangePassword {
    /// Current [`Password`].
    pub old: SecretBox<Password>,

    /// New [`Password`].
    pub new: SecretBox<Password>,
}

impl Endpoint for ChangePassword {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "auth/change-password/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({
            "old_password": self.old.expose_secret().as_ref(),
            "new_password": self.new.expose_secret().as_ref(),
        })))
    }
}

/// Requests a [`Password`] reset link to be sent to the provided [`Email`].
#[derive(Clone, Debug)]
pub struct ResetPassword {
    /// [`Email`] of the [`User`].
    ///
    /// [`User`]: crate::domain::User
    pub email: Email,
}

impl Endpoint for ResetPassword {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "auth/reset-password/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({ "email": self.email })))
    }
}
