//! Producers: the zero-argument functions a [`LazyValue`](super::LazyValue) defers.

use core::convert::Infallible;

/// Something that can compute a value of type `T`, possibly failing.
///
/// Implemented for every `FnMut() -> Result<T, E>`; wrap a plain
/// `FnMut() -> T` in [`Always`] to use it as an infallible producer.
pub trait Producer<T> {
    /// The failure reported when production does not succeed.
    type Error;

    /// Attempts to produce a value.
    fn produce(&mut self) -> Result<T, Self::Error>;
}

impl<T, E, F> Producer<T> for F
where
    F: FnMut() -> Result<T, E>,
{
    type Error = E;

    #[inline]
    fn produce(&mut self) -> Result<T, E> {
        (*self)()
    }
}

/// Adapts an infallible `FnMut() -> T` into a [`Producer`].
#[derive(Clone, Copy, Debug)]
pub struct Always<F>(pub F);

impl<T, F> Producer<T> for Always<F>
where
    F: FnMut() -> T,
{
    type Error = Infallible;

    #[inline]
    fn produce(&mut self) -> Result<T, Infallible> {
        Ok((self.0)())
    }
}
