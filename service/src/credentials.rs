//! [`Credentials`] store of the current [`Session`].

use std::{fmt, sync::Arc};

use arc_swap::ArcSwapOption;
use common::operations::{By, Delete, Insert, Select};
use tokio::sync::Mutex;
use tracing as log;

use crate::{
    domain::{
        user::{session::Token, Permission, Session},
        User,
    },
    infra::storage::{Entry, Key, KeyValue, Storage as _},
};

/// Process-wide store of the current [`Session`].
///
/// The in-memory [`Session`] is authoritative. Every mutation is written
/// through to the durable [`Storage`], and a failure to do so is logged
/// without failing the mutation. Mutations are serialized, so the persisted
/// token always ends up matching the in-memory one.
///
/// [`Storage`]: crate::infra::Storage
pub struct Credentials<S> {
    /// Shared state of this [`Credentials`] store.
    inner: Arc<Inner<S>>,
}

/// Shared state of [`Credentials`].
struct Inner<S> {
    /// Current [`Session`], if any.
    ///
    /// Swapped as a whole, so the token and the [`User`] are never observed
    /// from different [`Session`]s.
    current: ArcSwapOption<Session>,

    /// Durable storage mirroring the [`Session`] token.
    storage: S,

    /// Lock held while mutating the [`Session`] and persisting it.
    write: Mutex<()>,
}

impl<S> Credentials<S> {
    /// Creates a new unauthenticated [`Credentials`] store persisting into
    /// the provided `storage`.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: ArcSwapOption::empty(),
                storage,
                write: Mutex::new(()),
            }),
        }
    }

    /// Returns the durable storage of this [`Credentials`] store.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.inner.storage
    }

    /// Returns the current [`Session`], if any.
    #[must_use]
    pub fn session(&self) -> Option<Arc<Session>> {
        self.inner.current.load_full()
    }

    /// Returns the [`Token`] of the current [`Session`], if any.
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.inner
            .current
            .load()
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Returns the [`User`] of the current [`Session`], if known.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner
            .current
            .load()
            .as_ref()
            .and_then(|s| s.user.clone())
    }

    /// Indicates whether a [`Session`] is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.current.load().is_some()
    }

    /// Returns [`Permission`]s granted by the current [`Session`].
    ///
    /// A [`Session`] whose [`User`] is not fetched yet holds the
    /// [`Permission::BASELINE`] only.
    #[must_use]
    pub fn permissions(&self) -> Vec<Permission> {
        match self.inner.current.load().as_ref() {
            None => Vec::new(),
            Some(s) => s.user.as_ref().map_or_else(
                || Permission::BASELINE.to_vec(),
                User::permissions,
            ),
        }
    }

    /// Indicates whether the current [`Session`] grants the provided
    /// [`Permission`].
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Replaces the [`User`] of the current [`Session`] with the provided
    /// one, keeping its [`Token`].
    ///
    /// Returns `false` if there is no active [`Session`] to update.
    pub fn replace_user(&self, user: User) -> bool {
        let previous = self.inner.current.rcu(|current| {
            current.as_ref().map(|s| {
                Arc::new(Session {
                    token: s.token.clone(),
                    user: Some(user.clone()),
                })
            })
        });
        previous.is_some()
    }
}

impl<S: KeyValue> Credentials<S> {
    /// Starts a new [`Session`] with the provided [`Token`] and [`User`].
    pub async fn set_session(&self, token: Token, user: User) {
        let _write = self.inner.write.lock().await;
        self.inner.current.store(Some(Arc::new(Session {
            token,
            user: Some(user),
        })));
        self.persist().await;
    }

    /// Ends the current [`Session`], if any.
    ///
    /// Returns whether there was an active [`Session`].
    pub async fn clear_session(&self) -> bool {
        let _write = self.inner.write.lock().await;
        let previous = self.inner.current.swap(None);
        self.persist().await;
        previous.is_some()
    }

    /// Restores the [`Session`] persisted by a previous process.
    ///
    /// The persisted [`Token`] is trusted without asking the backend, so the
    /// restored [`Session`] lasts until the first request rejected as
    /// unauthorized. Returns whether a [`Session`] is active afterwards.
    pub async fn restore_from_storage(&self) -> bool {
        let _write = self.inner.write.lock().await;
        if self.is_authenticated() {
            return true;
        }

        let stored = match self
            .inner
            .storage
            .execute(Select(By::<Option<String>, _>::new(Key::Token)))
            .await
        {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("failed to read persisted `Session` token: {e}");
                return false;
            }
        };
        let Some(raw) = stored else {
            return false;
        };
        let Some(token) = Token::new(raw.trim()) else {
            log::warn!("discarding malformed persisted `Session` token");
            self.persist().await;
            return false;
        };

        self.inner
            .current
            .store(Some(Arc::new(Session { token, user: None })));
        true
    }

    /// Ends the current [`Session`] only if it is still the one identified
    /// by the provided [`Token`].
    ///
    /// A rejection of a request issued with an outdated [`Token`] never ends
    /// a newer [`Session`]. Returns whether the [`Session`] has been ended.
    pub async fn invalidate(&self, token: &Token) -> bool {
        let _write = self.inner.write.lock().await;
        let current = self.inner.current.load_full();
        if !current.as_ref().is_some_and(|s| s.token == *token) {
            return false;
        }

        self.inner.current.store(None);
        log::info!("`Session` invalidated by the backend");
        self.persist().await;
        true
    }

    /// Writes the [`Token`] of the current [`Session`] into the durable
    /// storage, or removes it if there is no [`Session`].
    ///
    /// Must be called with the `write` lock held.
    async fn persist(&self) {
        let result = match self.token() {
            Some(token) => {
                self.inner
                    .storage
                    .execute(Insert(Entry::new(Key::Token, token.as_str())))
                    .await
            }
            None => self.inner.storage.execute(Delete(Key::Token)).await,
        };
        if let Err(e) = result {
            log::warn!("failed to persist `Session` token: {e}");
        }
    }
}

impl<S> Clone for Credentials<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Credentials<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("session", &self.session())
            .field("storage", &self.inner.storage)
            .finish()
    }
}

#[cfg(test)]
mod spec {
    use std::io;

    use common::operations::{By, Delete, Insert, Select};
    use futures::join;
    use tracerr::Traced;

    use crate::{
        domain::{
            user::{session::Token, Permission, Role},
            User,
        },
        infra::{
            storage::{Entry, Error, Key},
            Fs, Memory, Storage,
        },
    };

    use super::Credentials;

    fn user(id: u64, role: Role) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "username": format!("user{id}"),
            "role": role.as_str(),
        }))
        .unwrap()
    }

    fn token(raw: &str) -> Token {
        Token::new(raw).unwrap()
    }

    /// Storage whose medium is unavailable.
    #[derive(Debug)]
    struct Broken;

    impl Storage<Select<By<Option<String>, Key>>> for Broken {
        type Ok = Option<String>;
        type Err = Traced<Error>;

        async fn execute(
            &self,
            _: Select<By<Option<String>, Key>>,
        ) -> Result<Self::Ok, Self::Err> {
            Err(tracerr::new!(Error::Io(io::ErrorKind::Other.into())))
        }
    }

    impl Storage<Insert<Entry>> for Broken {
        type Ok = ();
        type Err = Traced<Error>;

        async fn execute(&self, _: Insert<Entry>) -> Result<(), Self::Err> {
            Err(tracerr::new!(Error::Io(io::ErrorKind::Other.into())))
        }
    }

    impl Storage<Delete<Key>> for Broken {
        type Ok = ();
        type Err = Traced<Error>;

        async fn execute(&self, _: Delete<Key>) -> Result<(), Self::Err> {
            Err(tracerr::new!(Error::Io(io::ErrorKind::Other.into())))
        }
    }

    #[tokio::test]
    async fn mirrors_session_into_storage() {
        let storage = Memory::new();
        let creds = Credentials::new(storage.clone());
        assert!(!creds.is_authenticated());

        creds.set_session(token("abc"), user(1, Role::User)).await;
        assert!(creds.is_authenticated());
        assert_eq!(creds.token().unwrap().as_str(), "abc");
        assert_eq!(storage.get(Key::Token).as_deref(), Some("abc"));

        creds.set_session(token("def"), user(1, Role::User)).await;
        assert_eq!(storage.get(Key::Token).as_deref(), Some("def"));

        assert!(creds.clear_session().await);
        assert!(!creds.is_authenticated());
        assert!(creds.token().is_none());
        assert!(creds.user().is_none());
        assert_eq!(storage.get(Key::Token), None);

        assert!(!creds.clear_session().await);
    }

    #[tokio::test]
    async fn never_observes_mismatched_session() {
        let creds = Credentials::new(Memory::new());

        for n in 0..10 {
            if n % 3 == 0 {
                _ = creds.clear_session().await;
            } else {
                creds.set_session(token(&format!("t{n}")), user(n, Role::User))
                    .await;
            }
            let session = creds.session();
            assert_eq!(creds.is_authenticated(), n % 3 != 0);
            if let Some(s) = session {
                assert_eq!(s.token.as_str(), format!("t{n}"));
                assert_eq!(s.user.as_ref().map(|u| u64::from(u.id)), Some(n));
            }
        }
    }

    #[tokio::test]
    async fn restores_persisted_token_optimistically() {
        let storage = Memory::new();
        Credentials::new(storage.clone())
            .set_session(token("abc"), user(1, Role::User))
            .await;

        let creds = Credentials::new(storage);
        assert!(!creds.is_authenticated());
        assert!(creds.restore_from_storage().await);
        assert!(creds.is_authenticated());
        assert_eq!(creds.token().unwrap().as_str(), "abc");
        assert!(creds.user().is_none());
        assert_eq!(creds.permissions(), Permission::BASELINE.to_vec());
    }

    #[tokio::test]
    async fn discards_malformed_persisted_token() {
        let storage = Memory::new();
        storage
            .execute(Insert(Entry::new(Key::Token, "   ")))
            .await
            .unwrap();

        let creds = Credentials::new(storage.clone());
        assert!(!creds.restore_from_storage().await);
        assert_eq!(storage.get(Key::Token), None);
    }

    #[tokio::test]
    async fn keeps_memory_session_when_storage_fails() {
        let creds = Credentials::new(Broken);

        creds.set_session(token("abc"), user(1, Role::User)).await;
        assert!(creds.is_authenticated());
        assert_eq!(creds.token().unwrap().as_str(), "abc");

        assert!(creds.clear_session().await);
        assert!(!creds.is_authenticated());
        assert!(!creds.restore_from_storage().await);
    }

    #[tokio::test]
    async fn invalidates_only_matching_session() {
        let storage = Memory::new();
        let creds = Credentials::new(storage.clone());
        creds.set_session(token("new"), user(1, Role::User)).await;

        assert!(!creds.invalidate(&token("old")).await);
        assert!(creds.is_authenticated());
        assert_eq!(storage.get(Key::Token).as_deref(), Some("new"));

        assert!(creds.invalidate(&token("new")).await);
        assert!(!creds.is_authenticated());
        assert_eq!(storage.get(Key::Token), None);

        assert!(!creds.invalidate(&token("new")).await);
    }

    #[tokio::test]
    async fn replaces_user_keeping_token() {
        let creds = Credentials::new(Memory::new());
        assert!(!creds.replace_user(user(1, Role::User)));
        assert!(!creds.is_authenticated());

        creds.set_session(token("abc"), user(1, Role::User)).await;
        assert!(!creds.has_permission(Permission::Distributor));

        assert!(creds.replace_user(user(1, Role::Distributor)));
        assert_eq!(creds.token().unwrap().as_str(), "abc");
        assert!(creds.has_permission(Permission::Distributor));
        assert!(creds.has_permission(Permission::PlaceOrder));
        assert!(!creds.has_permission(Permission::Admin));
    }

    #[tokio::test]
    async fn keeps_storage_in_sync_under_concurrent_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let creds = Credentials::new(Fs::new(dir.path()));

        for n in 0..50 {
            _ = join!(
                creds.set_session(token(&format!("a{n}")), user(1, Role::User)),
                creds.clear_session(),
            );
            let restored = Credentials::new(Fs::new(dir.path()));
            assert_eq!(
                restored.restore_from_storage().await,
                creds.is_authenticated(),
            );

            _ = join!(
                creds.set_session(token(&format!("b{n}")), user(1, Role::User)),
                creds.set_session(token(&format!("c{n}")), user(2, Role::User)),
            );
            let restored = Credentials::new(Fs::new(dir.path()));
            assert!(restored.restore_from_storage().await);
            assert_eq!(
                restored.token().map(|t| t.as_str().to_owned()),
                creds.token().map(|t| t.as_str().to_owned()),
            );

            _ = creds.clear_session().await;
        }
    }
}
