//! # `lazyval` - Deferred, Cached Values
//!
//! A small toolkit for holding a value that is expensive (or side-effecting)
//! to compute: the producer is deferred until the value is first requested,
//! the first successful result is cached, and failures are handed back to
//! the caller without poisoning the holder.
//!
//! ## Semantics
//!
//! - **At most one success**: once the producer returns `Ok`, it is never
//!   invoked again and the holder is permanently loaded.
//! - **Failures retry**: a failing producer leaves the holder unloaded; the
//!   next loading call simply tries again.
//! - **Two capabilities**: [`ReadonlyLazy`] can inspect a cached value but
//!   never loads; [`Lazy`] adds the right to trigger the producer.
//! - **Single owner**: loading takes `&mut self`, so concurrent double loads
//!   are ruled out at compile time rather than by locking.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events for load attempts and failures.
//!
//! ## Example
//!
//! ```rust
//! use lazyval::{LazyValue, NotLoadedError};
//!
//! let mut config = LazyValue::new(|| "8080".parse::<u16>());
//!
//! // Nothing has run yet; readers cannot force a load.
//! assert_eq!(config.as_readonly().get_value_without_loading(), Err(NotLoadedError));
//!
//! assert_eq!(config.get_value(), Ok(&8080));
//! assert!(config.is_value_loaded());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;

pub use cell::{
    Always, Lazy, LazyValue, LoadError, NotLoadedError, Producer, ReadonlyLazy, ReadonlyView,
};
