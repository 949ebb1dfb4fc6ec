//! Lazy initialization primitives.
//!
//! - [`LazyValue`] defers a fallible producer until first requested and
//!   caches the first success.
//! - [`ReadonlyLazy`] and [`Lazy`] split read access from load authority.

pub mod error;
pub mod lazy_value;
pub mod traits;

pub use error::{LoadError, NotLoadedError};
pub use lazy_value::{Always, LazyValue, Producer, ReadonlyView};
pub use traits::{Lazy, ReadonlyLazy};
