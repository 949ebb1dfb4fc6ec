//! `LazyValue` — single-owner lazy holder with a fallible, retryable producer.
//!
//! The producer runs at most once *successfully*. Failures are not cached:
//! the holder stays unloaded and the next loading call invokes the producer
//! again. Loading accessors take `&mut self`, so the borrow checker already
//! rules out two loads racing each other.

mod producer;
mod view;

use core::{convert::Infallible, fmt};

use super::error::{LoadError, NotLoadedError};
use super::traits::{Lazy, ReadonlyLazy};

pub use producer::{Always, Producer};
pub use view::ReadonlyView;

/// A lazily computed, cached value.
///
/// `value` is `Some` exactly when the producer has returned `Ok` once; it is
/// never cleared afterwards.
pub struct LazyValue<T, P> {
    producer: P,
    value: Option<T>,
}

impl<T, P> LazyValue<T, P>
where
    P: Producer<T>,
{
    /// Creates an unloaded holder. The producer is not invoked.
    #[inline]
    pub const fn new(producer: P) -> Self {
        Self {
            producer,
            value: None,
        }
    }

    /// Returns the cached value, invoking the producer if nothing is loaded.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged. The holder stays unloaded and
    /// a later call will invoke the producer again.
    pub fn get_value(&mut self) -> Result<&T, P::Error> {
        let value = match self.value {
            Some(ref value) => value,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("invoking lazy value producer");

                let produced = match self.producer.produce() {
                    Ok(produced) => produced,
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("lazy value producer failed; holder stays unloaded");
                        return Err(err);
                    }
                };

                #[cfg(feature = "tracing")]
                tracing::trace!("lazy value loaded");

                &*self.value.insert(produced)
            }
        };
        Ok(value)
    }

    /// Non-propagating variant of [`get_value`](Self::get_value).
    ///
    /// Caching and retry behave exactly like `get_value`; only the error
    /// representation differs.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] holding the `Display` output of the producer's error.
    pub fn try_get_value(&mut self) -> Result<&T, LoadError>
    where
        P::Error: fmt::Display,
    {
        self.get_value().map_err(|err| {
            let err = LoadError::from_display(&err);
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %err.message(), "failed to load lazy value");
            err
        })
    }
}

impl<T, F> LazyValue<T, Always<F>>
where
    F: FnMut() -> T,
{
    /// Creates an unloaded holder around an infallible producer.
    #[inline]
    pub const fn from_fn(producer: F) -> Self {
        Self::new(Always(producer))
    }
}

impl<T, P> LazyValue<T, P>
where
    P: Producer<T, Error = Infallible>,
{
    /// Returns the cached value, producing it first if needed.
    pub fn get(&mut self) -> &T {
        match self.get_value() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<T, P> LazyValue<T, P> {
    /// Returns `true` once the producer has succeeded. No side effects.
    #[inline]
    pub fn is_value_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the cached value without ever invoking the producer.
    ///
    /// # Errors
    ///
    /// Returns [`NotLoadedError`] if no value has been loaded yet.
    #[inline]
    pub fn get_value_without_loading(&self) -> Result<&T, NotLoadedError> {
        self.value.as_ref().ok_or(NotLoadedError)
    }

    /// Narrows this holder to a view that can read but never load.
    #[inline]
    pub fn as_readonly(&self) -> ReadonlyView<'_, T> {
        ReadonlyView::new(&self.value)
    }

    /// Consumes the holder, returning the cached value if one was loaded.
    ///
    /// The producer is dropped without being invoked.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T: Default> Default for LazyValue<T, Always<fn() -> T>> {
    fn default() -> Self {
        Self::from_fn(T::default)
    }
}

impl<T: fmt::Debug, P> fmt::Debug for LazyValue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        view::debug_slot("LazyValue", self.value.as_ref(), f)
    }
}

impl<T, P> ReadonlyLazy<T> for LazyValue<T, P> {
    #[inline]
    fn is_value_loaded(&self) -> bool {
        LazyValue::is_value_loaded(self)
    }

    #[inline]
    fn get_value_without_loading(&self) -> Result<&T, NotLoadedError> {
        LazyValue::get_value_without_loading(self)
    }
}

impl<T, P> Lazy<T> for LazyValue<T, P>
where
    P: Producer<T>,
    P::Error: fmt::Display,
{
    type Error = P::Error;

    #[inline]
    fn get_value(&mut self) -> Result<&T, P::Error> {
        LazyValue::get_value(self)
    }

    #[inline]
    fn try_get_value(&mut self) -> Result<&T, LoadError> {
        LazyValue::try_get_value(self)
    }
}
