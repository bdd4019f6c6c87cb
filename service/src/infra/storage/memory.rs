//! In-memory [`Storage`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::operations::{By, Delete, Insert, Select};
use parking_lot::Mutex;
use tracerr::Traced;

use super::{Entry, Error, Key, Storage};

/// [`Storage`] living only as long as the process does.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<Mutex<HashMap<Key, String>>>);

impl Memory {
    /// Creates a new empty [`Memory`] storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the value stored under the provided [`Key`].
    #[must_use]
    pub fn get(&self, key: Key) -> Option<String> {
        self.0.lock().get(&key).cloned()
    }
}

impl Storage<Select<By<Option<String>, Key>>> for Memory {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.get(by.into_inner()))
    }
}

impl Storage<Insert<Entry>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.lock().insert(entry.key, entry.value));
        Ok(())
    }
}

impl Storage<Delete<Key>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.lock().remove(&key));
        Ok(())
    }
}
