//! # Function-backed subscriber (`SubscriberFn`).
//!
//! [`SubscriberFn`] adapts a plain closure into a [`Subscribe`]
//! implementation, for listeners too small to deserve a named type.
//!
//! The first type parameter pins the operation type the listener observes.
//! `Supervisor::subscribe_fn` builds one of these with that parameter
//! already inferred; construct `SubscriberFn` directly when you want to
//! name or share the listener.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use opvisor::{Event, Operation, SubscriberFn, Subscribe};
//!
//! struct Ping;
//!
//! #[async_trait]
//! impl Operation for Ping {
//!     type Args = ();
//!     type Output = &'static str;
//!     type Error = String;
//!
//!     async fn call(&self, _args: ()) -> Result<&'static str, String> {
//!         Ok("pong")
//!     }
//! }
//!
//! let listener = SubscriberFn::new("printer", |event: &Event<'_, Ping>| {
//!     println!("[{}]", event.kind);
//! });
//! assert_eq!(Subscribe::name(&listener), "printer");
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::events::Event;
use crate::operations::Operation;
use crate::subscribers::subscriber::Subscribe;

/// Function-backed subscriber implementation.
pub struct SubscriberFn<Op, F> {
    name: Cow<'static, str>,
    f: F,
    _op: PhantomData<fn(Op)>,
}

impl<Op, F> SubscriberFn<Op, F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need the shared
    /// handle `subscribe` takes.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _op: PhantomData,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<Op, F> Subscribe<Op> for SubscriberFn<Op, F>
where
    Op: Operation,
    F: Fn(&Event<'_, Op>) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_, Op>) {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::events::{EventData, EventKind};
    use crate::states::State;

    struct NoopOp;

    #[async_trait]
    impl Operation for NoopOp {
        type Args = ();
        type Output = ();
        type Error = String;

        async fn call(&self, _args: ()) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_closure_is_invoked_with_event() {
        let seen: Arc<Mutex<Vec<EventKind>>> = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let sub = SubscriberFn::new("recorder", move |event: &Event<'_, NoopOp>| {
            log.lock().unwrap().push(event.kind);
        });

        let event = Event::new(EventKind::StateChanged, EventData::State(State::Ready));
        sub.on_event(&event);

        assert_eq!(*seen.lock().unwrap(), vec![EventKind::StateChanged]);
    }

    #[test]
    fn test_name() {
        let sub = SubscriberFn::new("recorder", |_event: &Event<'_, NoopOp>| {});
        assert_eq!(Subscribe::name(&sub), "recorder");
    }
}
