//! [`Command`] for logging out.

use std::convert::Infallible;

use crate::{infra::storage::KeyValue, Service};

use super::Command;

/// [`Command`] for ending the current session locally.
#[derive(Clone, Copy, Debug)]
pub struct Logout;

impl<A, S: KeyValue> Command<Logout> for Service<A, S> {
    /// Indicator whether there was a session to end.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(&self, _: Logout) -> Result<Self::Ok, Self::Err> {
        Ok(self.credentials().clear_session().await)
    }
}
