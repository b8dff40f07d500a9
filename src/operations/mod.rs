//! # Operation abstractions.
//!
//! This module provides the core operation-related types:
//! - [`Operation`] - trait for the async unit of work under supervision
//! - [`OperationFn`] - function-backed operation implementation
//! - [`Settled`] - alias for an operation's eventual outcome

mod operation;
mod operation_fn;

pub use operation::{Operation, Settled};
pub use operation_fn::OperationFn;
