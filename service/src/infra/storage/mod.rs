//! Durable key/value [`Storage`] of the client.

pub mod fs;
pub mod memory;

use std::io;

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

pub use self::{fs::Fs, memory::Memory};

/// Durable storage operation.
pub use common::Handler as Storage;

common::define_kind! {
    #[doc = "Key of a durably stored value."]
    enum Key {
        #[doc = "Bearer token of the current session."]
        Token = "token",

        #[doc = "Anti-forgery `state` of a pending OAuth authorization."]
        OAuthState = "oauth_state",
    }
}

/// Value stored under a [`Key`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// [`Key`] of this [`Entry`].
    pub key: Key,

    /// Stored value.
    pub value: String,
}

impl Entry {
    /// Creates a new [`Entry`].
    #[must_use]
    pub fn new(key: Key, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O error of the underlying medium.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),
}

/// [`Storage`] supporting all the key/value operations.
pub trait KeyValue:
    Storage<
        Select<By<Option<String>, Key>>,
        Ok = Option<String>,
        Err = Traced<Error>,
    > + Storage<Insert<Entry>, Ok = (), Err = Traced<Error>>
    + Storage<Delete<Key>, Ok = (), Err = Traced<Error>>
{
}

impl<T> KeyValue for T where
    T: Storage<
            Select<By<Option<String>, Key>>,
            Ok = Option<String>,
            Err = Traced<Error>,
        > + Storage<Insert<Entry>, Ok = (), Err = Traced<Error>>
        + Storage<Delete<Key>, Ok = (), Err = Traced<Error>>
{
}
