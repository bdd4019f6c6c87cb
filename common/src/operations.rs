//! Operations a [`Handler`] may be executed with.
//!
//! [`Handler`]: crate::Handler

use std::marker::PhantomData;

/// Stores the wrapped value, replacing any previous one.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Removes the value identified by the wrapped key.
///
/// Removing an absent value is not an error.
#[derive(Clone, Copy, Debug)]
pub struct Delete<T>(pub T);

/// Reads the value described by the wrapped selector.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Selector of a `W` value by a `B` key.
///
/// `W` only tells apart operations reading different values by the same key.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the selected value.
    _what: PhantomData<W>,

    /// Key to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] selector with the provided key.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] selector and returns its key.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
