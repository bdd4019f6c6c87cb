//! [`Error`]-related definitions.

use std::{convert::Infallible, fmt, io};

use derive_more::{Display, Error as StdError};
use itertools::Itertools as _;
use service::{
    command::oauth,
    infra::{api, storage},
};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[level = $level:ident]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            level: $crate::error::Level::$level,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }

        impl $crate::AsError for $name {
            fn try_as_error(&self) -> Option<$crate::Error> {
                Some((*self).into())
            }
        }
    };
}

/// Severity of an [`Error`] notification.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Level {
    /// Condition the user is expected to fix.
    #[display("warning")]
    Warning,

    /// Failure of the operation itself.
    #[display("error")]
    Error,
}

/// User-facing [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// [`Level`] of this [`Error`].
    pub level: Level,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// [`Code`] of internal failures.
    const INTERNAL: Code = "INTERNAL_ERROR";

    /// Create a new [`Error`] representing an internal failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: Self::INTERNAL,
            level: Level::Error,
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Indicates whether this [`Error`] represents an internal failure.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.code == Self::INTERNAL
    }

    /// Creates a new [`Error`] with the provided parameters.
    fn new(code: Code, level: Level, message: impl Into<String>) -> Self {
        Self {
            code,
            level,
            message: message.into(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            level: _,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(self.clone())
    }
}

impl AsError for Infallible {
    fn try_as_error(&self) -> Option<Error> {
        match *self {}
    }
}

impl AsError for api::Error {
    fn try_as_error(&self) -> Option<Error> {
        use api::Kind as K;

        Some(match self.kind() {
            K::Unauthorized => Error::new(
                "SESSION_EXPIRED",
                Level::Warning,
                "Session expired, please log in again",
            ),
            K::Forbidden => {
                Error::new("FORBIDDEN", Level::Error, "Access forbidden")
            }
            K::NotFound => {
                Error::new("NOT_FOUND", Level::Error, "Resource not found")
            }
            K::ServerError => Error::new(
                "SERVER_ERROR",
                Level::Error,
                "Server error, please try again later",
            ),
            K::NetworkFailure => Error::new(
                "NETWORK_ERROR",
                Level::Error,
                "Network error, please check the connection",
            ),
            K::ClientError => Error::new(
                "REQUEST_FAILED",
                Level::Error,
                self.server_message().unwrap_or("Request failed"),
            ),
        })
    }
}

impl AsError for storage::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for io::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for serde_json::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for url::ParseError {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for oauth::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use oauth::ExecutionError as E;

        match self {
            E::Api(e) => e.try_as_error(),
            E::Storage(e) => e.try_as_error(),
            E::Url(e) => e.try_as_error(),
            E::StateMismatch => Some(Error::new(
                "OAUTH_STATE_MISMATCH",
                Level::Warning,
                "Authorization has expired or was not started here, \
                 please try again",
            )),
            E::MissingCode => Some(Error::new(
                "OAUTH_CODE_MISSING",
                Level::Warning,
                "Authorization was cancelled",
            )),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::infra::api::{self, Rejection, StatusCode};

    use super::{AsError as _, Level};

    fn rejected(status: u16, body: &[u8]) -> api::Error {
        let status = StatusCode::from_u16(status).unwrap();
        api::Error::rejected(Rejection {
            status,
            path: "orders/".into(),
            message: Rejection::message_of(body),
        })
    }

    #[test]
    fn describes_every_rejection() {
        for (status, code, level) in [
            (401, "SESSION_EXPIRED", Level::Warning),
            (403, "FORBIDDEN", Level::Error),
            (404, "NOT_FOUND", Level::Error),
            (502, "SERVER_ERROR", Level::Error),
            (409, "REQUEST_FAILED", Level::Error),
        ] {
            let err = rejected(status, b"").as_error();
            assert_eq!(err.code, code, "status {status}");
            assert_eq!(err.level, level, "status {status}");
        }
    }

    #[test]
    fn prefers_server_message_of_client_errors() {
        let err = rejected(400, br#"{"message": "Out of stock"}"#).as_error();
        assert_eq!(err.message, "Out of stock");

        let err = rejected(400, br#"{"foo": "bar"}"#).as_error();
        assert_eq!(err.message, "Request failed");
    }

    #[test]
    fn keeps_backtrace_of_traced_errors() {
        let err = tracerr::new!(rejected(404, b"")).into_error();

        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.backtrace.is_some());
        assert!(err.to_string().starts_with("[NOT_FOUND]: Resource not found"));
    }
}
