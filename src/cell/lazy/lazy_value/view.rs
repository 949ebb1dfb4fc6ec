//! `ReadonlyView` — a borrowed, load-free window onto a [`LazyValue`](super::LazyValue).

use core::fmt;

use super::super::error::NotLoadedError;
use super::super::traits::ReadonlyLazy;

/// Read-only capability over a lazy value.
///
/// Obtained from [`LazyValue::as_readonly`](super::LazyValue::as_readonly).
/// It holds no reference to the producer, so it cannot trigger a load.
pub struct ReadonlyView<'a, T> {
    slot: &'a Option<T>,
}

impl<'a, T> ReadonlyView<'a, T> {
    #[inline]
    pub(super) fn new(slot: &'a Option<T>) -> Self {
        Self { slot }
    }

    /// Returns `true` if the underlying holder has loaded its value.
    #[inline]
    pub fn is_value_loaded(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`NotLoadedError`] if the underlying holder is still unloaded.
    #[inline]
    pub fn get_value_without_loading(&self) -> Result<&'a T, NotLoadedError> {
        self.slot.as_ref().ok_or(NotLoadedError)
    }
}

impl<T> Clone for ReadonlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadonlyView<'_, T> {}

impl<T> ReadonlyLazy<T> for ReadonlyView<'_, T> {
    #[inline]
    fn is_value_loaded(&self) -> bool {
        ReadonlyView::is_value_loaded(self)
    }

    #[inline]
    fn get_value_without_loading(&self) -> Result<&T, NotLoadedError> {
        ReadonlyView::get_value_without_loading(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadonlyView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_slot("ReadonlyView", self.slot.as_ref(), f)
    }
}

pub(super) fn debug_slot<T: fmt::Debug>(
    name: &str,
    slot: Option<&T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut dbg = f.debug_struct(name);
    match slot {
        Some(value) => dbg.field("value", value),
        None => dbg.field("value", &format_args!("<unloaded>")),
    };
    dbg.finish_non_exhaustive()
}
