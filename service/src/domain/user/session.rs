//! [`Session`] definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Authenticated session of the client.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Bearer [`Token`] of this [`Session`].
    pub token: Token,

    /// [`User`] this [`Session`] belongs to.
    ///
    /// [`None`] while the [`User`] identity is not fetched yet, which is the
    /// case for a [`Session`] restored from durable storage.
    pub user: Option<User>,
}

/// Opaque bearer token of a [`Session`].
#[derive(Clone, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] if the given `token` is valid.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        Self::check(&token).then_some(Self(token))
    }

    /// Returns this [`Token`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `token` is a valid [`Token`].
    fn check(token: &str) -> bool {
        !token.is_empty() && !token.chars().any(char::is_whitespace)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl TryFrom<String> for Token {
    type Error = &'static str;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token).ok_or("invalid `Token`")
    }
}

#[cfg(test)]
mod spec {
    use super::Token;

    #[test]
    fn rejects_blank_tokens() {
        assert!(Token::new("").is_none());
        assert!(Token::new("abc def").is_none());
        assert!(serde_json::from_str::<Token>("\"\"").is_err());

        let token: Token = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(token.as_str(), "abc");
        assert_eq!(format!("{token:?}"), "Token(***)");
    }
}
