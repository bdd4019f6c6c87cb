//! Backend [`Api`] and its request pipeline.

pub mod http;

use std::fmt;

use derive_more::{Display, Error as StdError, From};
use serde::de::DeserializeOwned;

pub use reqwest::{Method, StatusCode};

pub use self::http::Http;

/// Backend call.
pub use common::Handler as Api;

/// Typed description of a backend call.
pub trait Endpoint {
    /// Type of the decoded response body.
    type Output: DeserializeOwned;

    /// Returns the HTTP [`Method`] of this [`Endpoint`].
    fn method(&self) -> Method;

    /// Returns the path of this [`Endpoint`], relative to the base URL.
    fn path(&self) -> String;

    /// Returns the query parameters of this [`Endpoint`].
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the JSON body of this [`Endpoint`], if any.
    ///
    /// # Errors
    ///
    /// If the body cannot be represented as JSON.
    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(None)
    }
}

/// Response of the backend rejecting a call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rejection {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// Path of the rejected call.
    pub path: String,

    /// Message supplied by the backend, if any.
    pub message: Option<String>,
}

impl Rejection {
    /// Extracts the backend-supplied message from the provided response
    /// `body`.
    ///
    /// The `message` field is preferred over the `detail` one.
    #[must_use]
    pub fn message_of(body: &[u8]) -> Option<String> {
        let body = serde_json::from_slice::<serde_json::Value>(body).ok()?;
        ["message", "detail"].into_iter().find_map(|field| {
            body.get(field)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(ToOwned::to_owned)
        })
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` responded with {}", self.path, self.status)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

/// Class of an [`Error`], deciding how it is reported.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Session is no longer valid (401).
    Unauthorized,

    /// Access is denied (403).
    Forbidden,

    /// Resource does not exist (404).
    NotFound,

    /// Backend failed (5xx).
    ServerError,

    /// No response has been received.
    NetworkFailure,

    /// Any other failed call.
    ClientError,
}

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Backend rejected the session.
    #[display("Unauthorized: {_0}")]
    #[from(ignore)]
    Unauthorized(#[error(not(source))] Rejection),

    /// Backend denied the access.
    #[display("Forbidden: {_0}")]
    #[from(ignore)]
    Forbidden(#[error(not(source))] Rejection),

    /// Requested resource does not exist.
    #[display("Not found: {_0}")]
    #[from(ignore)]
    NotFound(#[error(not(source))] Rejection),

    /// Backend failed to process the call.
    #[display("Server error: {_0}")]
    #[from(ignore)]
    Server(#[error(not(source))] Rejection),

    /// Backend refused the call.
    #[display("Request failed: {_0}")]
    #[from(ignore)]
    Client(#[error(not(source))] Rejection),

    /// No response has been received.
    #[display("No response received: {_0}")]
    #[from(ignore)]
    Network(reqwest::Error),

    /// HTTP client cannot be initialized.
    #[display("Failed to initialize HTTP client: {_0}")]
    #[from(ignore)]
    Init(reqwest::Error),

    /// Request body cannot be encoded.
    #[display("Failed to encode request body: {_0}")]
    #[from(ignore)]
    Encode(serde_json::Error),

    /// Response body cannot be decoded.
    #[display("Failed to decode response body: {_0}")]
    #[from(ignore)]
    Decode(serde_json::Error),

    /// Request URL cannot be built.
    #[display("Invalid request URL: {_0}")]
    Url(url::ParseError),
}

impl Error {
    /// Classifies the provided [`Rejection`] by its status.
    #[must_use]
    pub fn rejected(rejection: Rejection) -> Self {
        match rejection.status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(rejection),
            StatusCode::FORBIDDEN => Self::Forbidden(rejection),
            StatusCode::NOT_FOUND => Self::NotFound(rejection),
            s if s.is_server_error() => Self::Server(rejection),
            _ => Self::Client(rejection),
        }
    }

    /// Returns the [`Kind`] of this [`Error`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Unauthorized(_) => Kind::Unauthorized,
            Self::Forbidden(_) => Kind::Forbidden,
            Self::NotFound(_) => Kind::NotFound,
            Self::Server(_) => Kind::ServerError,
            Self::Network(_) => Kind::NetworkFailure,
            Self::Client(_)
            | Self::Init(_)
            | Self::Encode(_)
            | Self::Decode(_)
            | Self::Url(_) => Kind::ClientError,
        }
    }

    /// Returns the [`Rejection`] of this [`Error`], if the backend responded.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Unauthorized(r)
            | Self::Forbidden(r)
            | Self::NotFound(r)
            | Self::Server(r)
            | Self::Client(r) => Some(r),
            Self::Network(_)
            | Self::Init(_)
            | Self::Encode(_)
            | Self::Decode(_)
            | Self::Url(_) => None,
        }
    }

    /// Returns the message supplied by the backend, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.rejection().and_then(|r| r.message.as_deref())
    }
}

#[cfg(test)]
mod spec {
    use super::{Error, Kind, Rejection, StatusCode};

    fn rejection(status: u16) -> Rejection {
        Rejection {
            status: StatusCode::from_u16(status).unwrap(),
            path: "orders/".into(),
            message: None,
        }
    }

    #[test]
    fn classifies_by_status() {
        for (status, kind) in [
            (401, Kind::Unauthorized),
            (403, Kind::Forbidden),
            (404, Kind::NotFound),
            (500, Kind::ServerError),
            (502, Kind::ServerError),
            (400, Kind::ClientError),
            (409, Kind::ClientError),
            (429, Kind::ClientError),
        ] {
            assert_eq!(Error::rejected(rejection(status)).kind(), kind);
        }
    }

    #[test]
    fn extracts_server_message() {
        assert_eq!(
            Rejection::message_of(br#"{"message": "Out of stock"}"#).as_deref(),
            Some("Out of stock"),
        );
        assert_eq!(
            Rejection::message_of(br#"{"detail": "Not enough balance"}"#)
                .as_deref(),
            Some("Not enough balance"),
        );
        assert_eq!(
            Rejection::message_of(br#"{"message": "", "detail": "x"}"#)
                .as_deref(),
            Some("x"),
        );
        assert_eq!(Rejection::message_of(br#"{"quantity": ["bad"]}"#), None);
        assert_eq!(Rejection::message_of(b"<html>502</html>"), None);
    }
}
