//! Capability traits for lazy value holders.
//!
//! The split mirrors read vs. load authority: a collaborator handed a
//! [`ReadonlyLazy`] can observe a cached value but can never trigger the
//! producer, while a [`Lazy`] additionally owns the right to load.

use core::fmt::Display;

use super::error::{LoadError, NotLoadedError};

/// Read-only access to a lazy value holder.
///
/// Implementations never invoke the producer.
pub trait ReadonlyLazy<T> {
    /// Returns `true` once a value has been successfully loaded.
    fn is_value_loaded(&self) -> bool;

    /// Returns the cached value, or [`NotLoadedError`] if nothing is loaded yet.
    fn get_value_without_loading(&self) -> Result<&T, NotLoadedError>;
}

/// Full access to a lazy value holder, including the right to load.
pub trait Lazy<T>: ReadonlyLazy<T> {
    /// The error reported by a failing producer.
    type Error: Display;

    /// Returns the cached value, invoking the producer if nothing is loaded.
    ///
    /// A producer failure is returned unchanged and leaves the holder unloaded,
    /// so a later call retries.
    fn get_value(&mut self) -> Result<&T, Self::Error>;

    /// Like [`get_value`](Lazy::get_value), but flattens the producer error
    /// into a [`LoadError`] holding its description.
    fn try_get_value(&mut self) -> Result<&T, LoadError> {
        self.get_value().map_err(|err| LoadError::from_display(&err))
    }
}
