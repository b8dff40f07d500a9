//! # Function-backed operation (`OperationFn`).
//!
//! [`OperationFn`] wraps a closure `F: Fn(Args) -> Fut`, producing a fresh
//! future per invocation. Because the closure is `Fn` (not `FnMut`), no
//! hidden state is shared between runs; operations that do need shared
//! state capture an `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use opvisor::{Operation, OperationFn};
//!
//! let op = OperationFn::new("parse", |input: String| async move {
//!     input.trim().parse::<u32>().map_err(|e| e.to_string())
//! });
//!
//! assert_eq!(op.name(), "parse");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::operations::operation::Operation;

/// Function-backed operation implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
pub struct OperationFn<A, F> {
    name: Cow<'static, str>,
    f: F,
    _args: PhantomData<fn(A) -> A>,
}

impl<A, F> OperationFn<A, F> {
    /// Creates a new function-backed operation.
    ///
    /// Prefer [`OperationFn::arc`] when you immediately need a shared handle.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _args: PhantomData,
        }
    }

    /// Creates the operation and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<A, F, Fut, T, E> Operation for OperationFn<A, F>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    type Args = A;
    type Output = T;
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: A) -> Result<T, E> {
        (self.f)(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_call_passes_args_through() {
        let op = OperationFn::new("echo", |n: u64| async move { Ok::<_, String>(n + 1) });
        assert_eq!(op.call(41).await, Ok(42));
    }

    #[tokio::test]
    async fn test_failure_is_returned_unchanged() {
        let op = OperationFn::new("always-fails", |(): ()| async move {
            Err::<u32, _>("boom".to_string())
        });
        assert_eq!(op.call(()).await, Err("boom".to_string()));
    }

    #[test]
    fn test_name() {
        let op = OperationFn::new("fetch-user", |(): ()| async move { Ok::<_, String>(()) });
        assert_eq!(op.name(), "fetch-user");
    }

    #[test]
    fn test_tuple_args_bundle() {
        let op = OperationFn::new("add", |(a, b): (u32, u32)| async move {
            Ok::<_, String>(a + b)
        });
        assert_eq!(op.name(), "add");
    }
}
