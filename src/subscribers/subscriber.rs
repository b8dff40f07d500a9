//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for observing a supervisor's
//! lifecycle events (logging, UI bindings, metrics, test recorders).
//!
//! ## Rules
//! - One listener is active per supervisor at a time; subscribing again
//!   replaces it, it does not append.
//! - Delivery is **synchronous**: `on_event` runs in the emitting call's
//!   stack frame, with the supervisor's internal lock released, so a
//!   listener may read the supervisor it observes.
//! - Listeners are trusted not to panic; a panic propagates out of the
//!   emitting call unhandled.

use crate::events::Event;
use crate::operations::Operation;

/// Event subscriber for lifecycle observability.
///
/// ### Implementation requirements
/// - Return promptly; the emitting call blocks until `on_event` does.
/// - Handle errors internally; do not panic.
///
/// # Example
/// ```
/// use opvisor::{Event, EventKind, Operation, Subscribe};
///
/// struct FailureCounter;
///
/// impl<Op: Operation> Subscribe<Op> for FailureCounter {
///     fn on_event(&self, event: &Event<'_, Op>) {
///         if event.kind == EventKind::CompletedUnsuccessfully {
///             // bump a counter, etc.
///         }
///     }
///
///     fn name(&self) -> &str { "failure-counter" }
/// }
/// ```
pub trait Subscribe<Op: Operation>: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called synchronously at the emission site; events arrive in the
    /// order they were emitted.
    fn on_event(&self, event: &Event<'_, Op>);

    /// Returns the subscriber name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "form-binding").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<Op, S> Subscribe<Op> for std::sync::Arc<S>
where
    Op: Operation,
    S: Subscribe<Op> + ?Sized,
{
    fn on_event(&self, event: &Event<'_, Op>) {
        (**self).on_event(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Listener installed when nothing is subscribed.
///
/// Keeps the listener slot always occupied so emission sites never check
/// for absence.
pub(crate) struct Noop;

impl<Op: Operation> Subscribe<Op> for Noop {
    fn on_event(&self, _event: &Event<'_, Op>) {}

    fn name(&self) -> &str {
        "noop"
    }
}
