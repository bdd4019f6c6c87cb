//! [`Command`]s for logging in through a third-party OAuth platform.

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use serde_json::json;
use smart_default::SmartDefault;
use tracerr::Traced;
use url::Url;
use uuid::Uuid;

use crate::{
    domain::{user::session::Token, User},
    infra::{
        api::{self, Method},
        storage::{self, Entry, Key, KeyValue},
        Api, Endpoint,
    },
    Service,
};

use super::Command;

common::define_kind! {
    #[doc = "Third-party OAuth platform."]
    enum Platform {
        #[doc = "WeChat open platform."]
        Wechat = "wechat",

        #[doc = "Douyin open platform."]
        Douyin = "douyin",
    }
}

/// OAuth configuration of the storefront.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Application ID registered on the WeChat open platform.
    pub wechat_app_id: String,

    /// Client key registered on the Douyin open platform.
    pub douyin_app_id: String,

    /// Origin the platforms redirect back to after an authorization.
    #[default(Url::parse("http://localhost:5173/").expect("valid URL"))]
    pub redirect_origin: Url,
}

/// [`Command`] for starting an OAuth authorization on the provided
/// [`Platform`].
///
/// Persists a fresh anti-forgery `state` and returns the authorization
/// [`Url`] of the [`Platform`] to open.
#[derive(Clone, Copy, Debug)]
pub struct AuthorizeOAuth {
    /// [`Platform`] to authorize on.
    pub platform: Platform,
}

impl<A, S: KeyValue> Command<AuthorizeOAuth> for Service<A, S> {
    type Ok = Url;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeOAuth,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let conf = &self.config().oauth;
        let state = Uuid::new_v4().simple().to_string();
        let redirect_uri = conf
            .redirect_origin
            .join(&format!("auth/callback/{}", cmd.platform))
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let url = match cmd.platform {
            Platform::Wechat => {
                let mut url = Url::parse_with_params(
                    "https://open.weixin.qq.com/connect/qrconnect",
                    [
                        ("appid", conf.wechat_app_id.as_str()),
                        ("redirect_uri", redirect_uri.as_str()),
                        ("response_type", "code"),
                        ("scope", "snsapi_userinfo"),
                        ("state", state.as_str()),
                    ],
                )
                .map_err(tracerr::from_and_wrap!(=> E))?;
                url.set_fragment(Some("wechat_redirect"));
                url
            }
            Platform::Douyin => Url::parse_with_params(
                "https://open.douyin.com/platform/oauth/connect/",
                [
                    ("client_key", conf.douyin_app_id.as_str()),
                    ("redirect_uri", redirect_uri.as_str()),
                    ("response_type", "code"),
                    ("scope", "user_info"),
                    ("state", state.as_str()),
                ],
            )
            .map_err(tracerr::from_and_wrap!(=> E))?,
        };

        self.credentials()
            .storage()
            .execute(Insert(Entry::new(Key::OAuthState, state)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(url)
    }
}

/// [`Command`] for completing an OAuth authorization with the `code`
/// the [`Platform`] redirected back with.
///
/// Starts a new session on success.
#[derive(Clone, Debug)]
pub struct OAuthLogin {
    /// [`Platform`] the authorization was made on.
    pub platform: Platform,

    /// Authorization code issued by the [`Platform`].
    pub code: String,

    /// Anti-forgery `state` echoed back by the [`Platform`].
    pub state: Option<String>,
}

/// Backend call of the [`OAuthLogin`] [`Command`].
#[derive(Clone, Debug)]
pub struct Request {
    /// [`Platform`] the `code` is issued by.
    pub platform: Platform,

    /// Authorization code issued by the [`Platform`].
    pub code: String,
}

impl Endpoint for Request {
    type Output = Output;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("auth/oauth/{}/", self.platform)
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(Some(json!({ "code": self.code })))
    }
}

/// Response of the backend to a [`Request`].
#[derive(Clone, Debug, Deserialize)]
pub struct Output {
    /// [`Token`] of the started session.
    pub token: Token,

    /// Authenticated [`User`].
    pub user: User,

    /// Indicator whether the [`User`] has been created by this login.
    #[serde(default, alias = "isNewUser")]
    pub is_new_user: bool,
}

impl<A, S> Command<OAuthLogin> for Service<A, S>
where
    A: Api<Request, Ok = Output, Err = Traced<api::Error>>,
    S: KeyValue,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: OAuthLogin) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let OAuthLogin {
            platform,
            code,
            state,
        } = cmd;

        let storage = self.credentials().storage();
        let expected = storage
            .execute(Select(By::<Option<String>, _>::new(Key::OAuthState)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if expected.is_none() || state != expected {
            return Err(tracerr::new!(E::StateMismatch));
        }
        storage
            .execute(Delete(Key::OAuthState))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if code.trim().is_empty() {
            return Err(tracerr::new!(E::MissingCode));
        }

        let output = self
            .api()
            .execute(Request { platform, code })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        self.credentials()
            .set_session(output.token.clone(), output.user.clone())
            .await;

        Ok(output)
    }
}

/// Error of [`AuthorizeOAuth`] or [`OAuthLogin`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` call failed: {_0}")]
    Api(api::Error),

    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),

    /// Authorization [`Url`] cannot be built.
    #[display("Failed to build an authorization URL: {_0}")]
    Url(url::ParseError),

    /// Echoed `state` doesn't match the persisted one.
    #[display("OAuth `state` mismatch")]
    StateMismatch,

    /// [`Platform`] redirected back without an authorization code.
    #[display("OAuth authorization code is missing")]
    MissingCode,
}

#[cfg(test)]
mod spec {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{infra::storage::Key, Command as _};

    use super::{AuthorizeOAuth, ExecutionError, OAuthLogin, Platform};

    #[tokio::test]
    async fn builds_wechat_authorization_url() {
        let server = MockServer::start().await;
        let service = super::super::mocked(&server);

        let url = service
            .execute(AuthorizeOAuth {
                platform: Platform::Wechat,
            })
            .await
            .unwrap();

        let state = service.credentials().storage().get(Key::OAuthState);
        assert!(state.is_some());
        assert_eq!(url.host_str(), Some("open.weixin.qq.com"));
        assert_eq!(url.path(), "/connect/qrconnect");
        assert_eq!(url.fragment(), Some("wechat_redirect"));
        let params = url.query_pairs().into_owned().collect::<Vec<_>>();
        assert_eq!(
            params,
            [
                ("appid".into(), "wx-app".into()),
                (
                    "redirect_uri".into(),
                    "https://shop.example/auth/callback/wechat".into(),
                ),
                ("response_type".into(), "code".into()),
                ("scope".into(), "snsapi_userinfo".into()),
                ("state".into(), state.unwrap()),
            ],
        );
    }

    #[tokio::test]
    async fn builds_douyin_authorization_url_with_fresh_state() {
        let server = MockServer::start().await;
        let service = super::super::mocked(&server);

        let first = service
            .execute(AuthorizeOAuth {
                platform: Platform::Douyin,
            })
            .await
            .unwrap();
        let second = service
            .execute(AuthorizeOAuth {
                platform: Platform::Douyin,
            })
            .await
            .unwrap();

        assert_eq!(first.host_str(), Some("open.douyin.com"));
        assert_eq!(first.fragment(), None);
        assert!(first
            .query_pairs()
            .any(|(k, v)| k == "client_key" && v == "dy-key"));
        assert_ne!(first, second);
        let state = service.credentials().storage().get(Key::OAuthState);
        assert!(second
            .query_pairs()
            .any(|(k, v)| k == "state" && Some(&*v) == state.as_deref()));
    }

    #[tokio::test]
    async fn rejects_mismatched_state_without_calling_backend() {
        let server = MockServer::start().await;
        let service = super::super::mocked(&server);
        _ = service
            .execute(AuthorizeOAuth {
                platform: Platform::Wechat,
            })
            .await
            .unwrap();

        for state in [None, Some("forged".to_owned())] {
            let err = service
                .execute(OAuthLogin {
                    platform: Platform::Wechat,
                    code: "code".into(),
                    state,
                })
                .await
                .unwrap_err();
            assert!(matches!(err.as_ref(), ExecutionError::StateMismatch));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
        assert!(!service.credentials().is_authenticated());
    }

    #[tokio::test]
    async fn rejects_missing_code() {
        let server = MockServer::start().await;
        let service = super::super::mocked(&server);
        _ = service
            .execute(AuthorizeOAuth {
                platform: Platform::Douyin,
            })
            .await
            .unwrap();
        let state = service.credentials().storage().get(Key::OAuthState);

        let err = service
            .execute(OAuthLogin {
                platform: Platform::Douyin,
                code: " ".into(),
                state,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::MissingCode));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn starts_session_and_consumes_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/oauth/wechat/"))
            .and(body_json(json!({"code": "c0de"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "t0ken",
                "user": {"id": 7, "username": "wx_7"},
                "isNewUser": true,
            })))
            .expect(1)
            .mount(&server)
            .await;
        let service = super::super::mocked(&server);
        _ = service
            .execute(AuthorizeOAuth {
                platform: Platform::Wechat,
            })
            .await
            .unwrap();
        let state = service.credentials().storage().get(Key::OAuthState);

        let output = service
            .execute(OAuthLogin {
                platform: Platform::Wechat,
                code: "c0de".into(),
                state: state.clone(),
            })
            .await
            .unwrap();

        assert!(output.is_new_user);
        assert_eq!(output.user.username.as_str(), "wx_7");
        assert!(service.credentials().is_authenticated());
        assert_eq!(service.credentials().storage().get(Key::OAuthState), None);

        let replayed = service
            .execute(OAuthLogin {
                platform: Platform::Wechat,
                code: "c0de".into(),
                state,
            })
            .await
            .unwrap_err();
        assert!(matches!(replayed.as_ref(), ExecutionError::StateMismatch));
    }
}
