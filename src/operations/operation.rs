//! # Operation abstraction.
//!
//! This module defines the [`Operation`] trait, the asynchronous unit of
//! work a `Supervisor` oversees, and the [`Settled`] alias for its eventual
//! outcome.

use async_trait::async_trait;

/// The eventual outcome of an operation: a success value or a failure value.
pub type Settled<Op> =
    Result<<Op as Operation>::Output, <Op as Operation>::Error>;

/// # Asynchronous unit of work under supervision.
///
/// An `Operation` is a callable that, given an argument bundle, eventually
/// settles with either a success value or a failure value. The supervisor
/// holds a handle to it and invokes it once per `run`; it does not manage
/// the operation's lifetime beyond that.
///
/// `Output` and `Error` are `Clone` because the supervisor records every
/// settled value in its `result` slot while handing the original back to
/// the caller unchanged.
///
/// Operations taking several arguments bundle them as a tuple in `Args`.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use opvisor::Operation;
///
/// struct Double;
///
/// #[async_trait]
/// impl Operation for Double {
///     type Args = u32;
///     type Output = u32;
///     type Error = String;
///
///     fn name(&self) -> &str { "double" }
///
///     async fn call(&self, args: u32) -> Result<u32, String> {
///         args.checked_mul(2).ok_or_else(|| "overflow".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    /// Argument bundle the operation is invoked with.
    type Args: Send + 'static;
    /// Value the operation resolves with on success.
    type Output: Clone + Send + 'static;
    /// Value the operation fails with.
    type Error: Clone + Send + 'static;

    /// Returns a stable, human-readable operation name.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose —
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Invokes the operation and awaits its settlement.
    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error>;
}
