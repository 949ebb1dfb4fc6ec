//! Error types for the lazy value accessors.

use core::fmt;

/// Returned by [`get_value_without_loading`] when no value has been loaded yet.
///
/// [`get_value_without_loading`]: super::ReadonlyLazy::get_value_without_loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotLoadedError;

impl fmt::Display for NotLoadedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempted to get value without loading, but value was not yet loaded")
    }
}

impl std::error::Error for NotLoadedError {}

/// A producer failure captured by [`try_get_value`].
///
/// Only the textual description of the original error survives; the error
/// value itself is dropped.
///
/// [`try_get_value`]: super::Lazy::try_get_value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: String,
}

impl LoadError {
    /// Creates a `LoadError` carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Captures the `Display` output of a producer error.
    pub fn from_display<E: fmt::Display + ?Sized>(err: &E) -> Self {
        Self::new(err.to_string())
    }

    /// The description of the producer failure.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the description.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load lazy value: {}", self.message)
    }
}

impl std::error::Error for LoadError {}
