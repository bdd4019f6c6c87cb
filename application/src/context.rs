//! [`Context`]-related definitions.

use std::{fmt, future::Future};

use tracing as log;

use crate::{notifier::Console, AsError, Error, Notifier, Service};

/// Application context.
#[derive(Debug)]
pub struct Context<N = Console> {
    /// [`Service`] instance.
    service: Service,

    /// [`Notifier`] of failed operations.
    notifier: N,
}

impl<N> Context<N> {
    /// Creates a new [`Context`] out of the provided [`Service`] and
    /// [`Notifier`].
    #[must_use]
    pub fn new(service: Service, notifier: N) -> Self {
        Self { service, notifier }
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns [`Notifier`] of this [`Context`].
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<N: Notifier> Context<N> {
    /// Awaits the provided operation, surfacing its failure through the
    /// [`Notifier`].
    ///
    /// Every failed operation is notified exactly once, and the original
    /// failure is still returned to the caller as an [`Error`].
    ///
    /// # Errors
    ///
    /// If the operation fails.
    pub async fn run<T, E>(
        &self,
        op: impl Future<Output = Result<T, E>>,
    ) -> Result<T, Error>
    where
        E: AsError + fmt::Display,
    {
        op.await.map_err(|e| self.fail(e))
    }

    /// Surfaces the provided failure through the [`Notifier`].
    pub fn fail(&self, err: impl AsError + fmt::Display) -> Error {
        let err = err.into_error();
        if err.is_internal() {
            log::error!("{err}");
        } else {
            log::debug!("{err}");
        }
        self.notifier.notify(err.level, &err.message);
        err
    }
}
