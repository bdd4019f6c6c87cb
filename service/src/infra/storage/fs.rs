//! File system [`Storage`] implementation.

use std::{
    io,
    path::{Path, PathBuf},
};

use common::operations::{By, Delete, Insert, Select};
use tokio::fs;
use tracerr::Traced;
use uuid::Uuid;

use super::{Entry, Error, Key, Storage};

/// [`Storage`] keeping every [`Key`] in its own file under a directory.
#[derive(Clone, Debug)]
pub struct Fs {
    /// Directory containing the stored files.
    dir: PathBuf,
}

impl Fs {
    /// Creates a new [`Fs`] storage rooted at the provided `dir`.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory of this [`Fs`] storage.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the file storing the provided [`Key`].
    fn path_of(&self, key: Key) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

impl Storage<Select<By<Option<String>, Key>>> for Fs {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::read_to_string(self.path_of(by.into_inner())).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

impl Storage<Insert<Entry>> for Fs {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        // Readers never observe a partially written value, and concurrent
        // writers never share a temporary file.
        let path = self.path_of(entry.key);
        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", entry.key.as_str(), Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp, entry.value.as_bytes()).await {
            _ = fs::remove_file(&tmp).await;
            return Err(tracerr::new!(Error::Io(e)));
        }
        if let Err(e) = fs::rename(&tmp, &path).await {
            _ = fs::remove_file(&tmp).await;
            return Err(tracerr::new!(Error::Io(e)));
        }
        Ok(())
    }
}

impl Storage<Delete<Key>> for Fs {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::remove_file(self.path_of(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Delete, Insert, Select};

    use super::{Entry, Fs, Key, Storage as _};

    #[tokio::test]
    async fn persists_values_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("session");

        Fs::new(&nested)
            .execute(Insert(Entry::new(Key::Token, "abc")))
            .await
            .unwrap();

        let restored = Fs::new(&nested)
            .execute(Select(By::<Option<String>, _>::new(Key::Token)))
            .await
            .unwrap();
        assert_eq!(restored.as_deref(), Some("abc"));

        let files = std::fs::read_dir(&nested)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(files, ["token"]);
    }

    #[tokio::test]
    async fn writes_concurrently_without_sharing_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = &Fs::new(dir.path());

        let results = futures::future::join_all((0..20).map(move |n| {
            fs.execute(Insert(Entry::new(Key::Token, format!("t{n}"))))
        }))
        .await;
        assert!(results.iter().all(Result::is_ok));

        let value = fs
            .execute(Select(By::<Option<String>, _>::new(Key::Token)))
            .await
            .unwrap()
            .unwrap();
        assert!(value.starts_with('t'));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn treats_missing_files_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = Fs::new(dir.path());

        let value = fs
            .execute(Select(By::<Option<String>, _>::new(Key::OAuthState)))
            .await
            .unwrap();
        assert_eq!(value, None);

        fs.execute(Delete(Key::OAuthState)).await.unwrap();
    }

    #[tokio::test]
    async fn removes_values() {
        let dir = tempfile::tempdir().unwrap();
        let fs = Fs::new(dir.path());

        fs.execute(Insert(Entry::new(Key::Token, "abc"))).await.unwrap();
        fs.execute(Insert(Entry::new(Key::Token, "def"))).await.unwrap();
        assert_eq!(
            fs.execute(Select(By::<Option<String>, _>::new(Key::Token)))
                .await
                .unwrap()
                .as_deref(),
            Some("def"),
        );

        fs.execute(Delete(Key::Token)).await.unwrap();
        assert_eq!(
            fs.execute(Select(By::<Option<String>, _>::new(Key::Token)))
                .await
                .unwrap(),
            None,
        );
    }
}
