//! # Lifecycle events: kinds and payloads.
//!
//! This module groups the event **data model** delivered to the single
//! subscriber registered on a supervisor.
//!
//! ## Contents
//! - [`EventKind`], [`Event`], [`EventData`] - event classification and
//!   borrowed payload metadata
//!
//! ## Quick reference
//! - **Publisher**: `Supervisor` (from `run` and the `set_*` mutators).
//! - **Consumer**: the one active [`Subscribe`](crate::Subscribe)
//!   implementation, invoked synchronously at the emission site.

mod event;

pub use event::{Event, EventData, EventKind};
