//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and small adapters for
//! handling the lifecycle events a supervisor emits.
//!
//! ## Subscriber model
//! Exactly one listener is active per supervisor at a time; `subscribe`
//! replaces it and `unsubscribe` restores the built-in no-op. Delivery is
//! synchronous at the emission site, with the supervisor's lock released.
//!
//! ## Contents
//! - [`Subscribe`] - the listener trait
//! - [`SubscriberFn`] - closure adapter
//! - `LogWriter` - stdout subscriber (feature `logging`)

mod subscriber;
mod subscriber_fn;

#[cfg(feature = "logging")]
mod log;

pub(crate) use subscriber::Noop;

pub use subscriber::Subscribe;
pub use subscriber_fn::SubscriberFn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
