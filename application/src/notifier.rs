//! [`Notifier`] definitions.

use std::io::{self, Write as _};

use crate::error::Level;

/// Adapter surfacing transient notifications to the user.
pub trait Notifier {
    /// Surfaces the provided `message` with the provided [`Level`].
    fn notify(&self, level: Level, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, level: Level, message: &str) {
        (**self).notify(level, message);
    }
}

/// [`Notifier`] rendering notifications to the standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl Notifier for Console {
    fn notify(&self, level: Level, message: &str) {
        // Nowhere to report a broken stderr.
        _ = writeln!(io::stderr().lock(), "{level}: {message}");
    }
}
