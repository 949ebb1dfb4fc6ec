//! Cell family - interior caching primitives.
//!
//! - `lazy::*` are initialization and memoization-style building blocks.

pub mod lazy;

pub use lazy::{
    Always, Lazy, LazyValue, LoadError, NotLoadedError, Producer, ReadonlyLazy, ReadonlyView,
};
