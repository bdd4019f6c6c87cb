//! [`Command`] for updating the profile of the current [`User`].

use tracerr::Traced;

use crate::{
    domain::{user::Patch, User},
    infra::{
        api::{self, Method},
        storage::KeyValue,
        Api, Endpoint,
    },
    Service,
};

use super::Command;

/// [`Command`] for updating the profile of the current [`User`].
///
/// Only the provided fields of the [`Patch`] are changed.
#[derive(Clone, Debug)]
pub struct UpdateUser(pub Patch);

/// Backend call of the [`UpdateUser`] [`Command`].
#[derive(Clone, Debug)]
pub struct Request(pub Patch);

impl Endpoint for Request {
    type Output = User;

    fn method(&self) -> Method {
        Method::PATCH
    }

    fn path(&self) -> String {
        "auth/user/".into()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        serde_json::to_value(&self.0).map(Some)
    }
}

impl<A, S> Command<UpdateUser> for Service<A, S>
where
    A: Api<Request, Ok = User, Err = Traced<api::Error>>,
    S: KeyValue,
{
    type Ok = User;
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: UpdateUser) -> Result<Self::Ok, Self::Err> {
        let user = self
            .api()
            .execute(Request(cmd.0))
            .await
            .map_err(tracerr::wrap!())?;
        _ = self.credentials().replace_user(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{
        command::RefreshUser,
        domain::user::{session::Token, Patch},
        Command as _,
    };

    use super::UpdateUser;

    #[tokio::test]
    async fn replaces_user_of_current_session() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/auth/user/"))
            .and(body_json(json!({"nickname": "Al"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "username": "alice",
                "nickname": "Al",
            })))
            .mount(&server)
            .await;
        let service = super::super::mocked(&server);
        service
            .credentials()
            .set_session(
                Token::new("abc").unwrap(),
                serde_json::from_value(json!({"id": 1, "username": "alice"}))
                    .unwrap(),
            )
            .await;

        let user = service
            .execute(UpdateUser(Patch {
                nickname: Some("Al".into()),
                ..Patch::default()
            }))
            .await
            .unwrap();

        assert_eq!(user.display_name(), "Al");
        assert_eq!(service.credentials().user(), Some(user));
        assert_eq!(service.credentials().token().unwrap().as_str(), "abc");
    }

    #[tokio::test]
    async fn refreshes_user_of_restored_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/user/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2,
                "username": "bob",
                "role": "distributor",
            })))
            .mount(&server)
            .await;
        let service = super::super::mocked(&server);
        service
            .credentials()
            .set_session(
                Token::new("abc").unwrap(),
                serde_json::from_value(json!({"id": 2, "username": "bob"}))
                    .unwrap(),
            )
            .await;

        let user = service.execute(RefreshUser).await.unwrap();

        assert_eq!(service.credentials().user(), Some(user));
        assert!(service
            .credentials()
            .has_permission(crate::domain::user::Permission::Distributor));
    }
}
