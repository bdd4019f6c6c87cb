//! [`Command`] for refreshing the [`User`] of the current session.

use tracerr::Traced;

use crate::{
    domain::User,
    infra::{api, storage::KeyValue, Api},
    query::user::Current,
    Service,
};

use super::Command;

/// [`Command`] for refreshing the [`User`] of the current session from the
/// backend.
#[derive(Clone, Copy, Debug)]
pub struct RefreshUser;

impl<A, S> Command<RefreshUser> for Service<A, S>
where
    A: Api<Current, Ok = User, Err = Traced<api::Error>>,
    S: KeyValue,
{
    type Ok = User;
    type Err = Traced<api::Error>;

    async fn execute(&self, _: RefreshUser) -> Result<Self::Ok, Self::Err> {
        let user = self
            .api()
            .execute(Current)
            .await
            .map_err(tracerr::wrap!())?;
        _ = self.credentials().replace_user(user.clone());
        Ok(user)
    }
}
