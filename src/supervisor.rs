//! # Lifecycle supervisor for a single async operation.
//!
//! [`Supervisor`] wraps one [`Operation`] and tracks every run of it
//! through observable `state` / `message` / `result` fields, notifying the
//! single active subscriber as the lifecycle advances.
//!
//! ## Architecture
//! ```text
//!  caller ──► run(args) ────────────► Operation::call(args)
//!               │                            │
//!               │ reset fields               │ settlement
//!               │ publish BeginExecuting     ▼
//!               │                     Ok(value) / Err(failure)
//!               │                            │
//!               ▼                            ▼
//!        ┌─────────────────────────────────────────┐
//!        │ state / message / result   (shared cell)│
//!        └───────────────┬─────────────────────────┘
//!                        ▼
//!              Subscribe::on_event(Event)
//! ```
//!
//! ## Rules
//! - `run` propagates the settlement unchanged: the caller receives the
//!   original success or failure value, the supervisor keeps a recorded
//!   copy. The wrapper is observational bookkeeping, never a filter.
//! - The supervisor itself never fails: every method is infallible, and
//!   only the operation's failure path produces the `Error` state.
//! - Internal writes (from `run` and the `reset_to_*` helpers) are silent;
//!   only the explicit `set_state` / `set_message` / `set_result` mutators
//!   emit `*_CHANGED` events.
//! - The listener and the error parser run with the internal lock
//!   released, so they may read the supervisor they serve.
//!
//! ## Concurrency
//! Overlapping `run` calls on the same supervisor are not serialized:
//! there is no queueing, no in-flight guard, and no request identifier, so
//! concurrent runs race on the shared fields and the last settlement wins.
//! Callers needing per-invocation isolation serialize their calls or use
//! separate supervisors. The internal lock only keeps individual field
//! reads and writes tear-free; it is never held across the operation's
//! await or while user code runs.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::events::{Event, EventData, EventKind};
use crate::operations::{Operation, Settled};
use crate::parser::{default_error_parser, ErrorParser};
use crate::states::State;
use crate::subscribers::{Noop, Subscribe, SubscriberFn};

/// The fixed message recorded when a run settles successfully.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Mutable fields shared by every handle to the same supervisor.
struct Fields<Op: Operation> {
    state: State,
    message: String,
    result: Option<Settled<Op>>,
    parser: ErrorParser<Op::Error>,
    listener: Arc<dyn Subscribe<Op>>,
}

/// # Stateful wrapper tracking one operation's lifecycle.
///
/// A `Supervisor` is created once around an operation and reused across
/// any number of runs. Handles are cheap to clone and share one field
/// cell, so a run spawned through one handle is observable from another.
///
/// # Example
/// ```
/// use opvisor::{OperationFn, State, Supervisor};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sup = Supervisor::new(OperationFn::new("double", |n: u32| async move {
///     if n == 0 {
///         Err("nothing to double".to_string())
///     } else {
///         Ok(n * 2)
///     }
/// }));
///
/// assert!(sup.is_ready());
/// assert_eq!(sup.run(21).await, Ok(42));
/// assert_eq!(sup.state(), State::Success);
/// assert_eq!(sup.message(), "Success");
///
/// assert!(sup.run(0).await.is_err());
/// assert_eq!(sup.state(), State::Error);
/// assert_eq!(sup.message(), "nothing to double");
/// # }
/// ```
pub struct Supervisor<Op: Operation> {
    op: Arc<Op>,
    cell: Arc<Mutex<Fields<Op>>>,
}

impl<Op: Operation> Clone for Supervisor<Op> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<Op> Supervisor<Op>
where
    Op: Operation,
    Op::Error: fmt::Display,
{
    /// Creates a supervisor around the given operation.
    ///
    /// Fields start at `Ready` / `""` / absent, with the default error
    /// parser and a no-op listener installed.
    pub fn new(op: Op) -> Self {
        Self::wrap(Arc::new(op))
    }

    /// Creates a supervisor around an already shared operation handle.
    pub fn wrap(op: Arc<Op>) -> Self {
        Self {
            op,
            cell: Arc::new(Mutex::new(Fields {
                state: State::Ready,
                message: String::new(),
                result: None,
                parser: Arc::new(|err: &Op::Error| default_error_parser(err)),
                listener: Arc::new(Noop),
            })),
        }
    }
}

impl<Op: Operation> Supervisor<Op> {
    /// Critical sections only assign fields, so a poisoned lock still
    /// holds consistent data and the API stays infallible.
    fn fields(&self) -> MutexGuard<'_, Fields<Op>> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the supervised operation with the given argument bundle.
    ///
    /// Synchronously, before the operation is invoked: fields are reset
    /// exactly as [`reset_to_executing`](Self::reset_to_executing) does,
    /// and `BeginExecuting` is published with the args. On settlement the
    /// fields move to `Success` / `Error` accordingly, the matching
    /// completion event fires, and the original settlement is returned to
    /// the caller unchanged.
    pub async fn run(&self, args: Op::Args) -> Settled<Op> {
        let listener = {
            let mut f = self.fields();
            f.state = State::Executing;
            f.message.clear();
            f.result = None;
            Arc::clone(&f.listener)
        };
        listener.on_event(&Event::new(
            EventKind::BeginExecuting,
            EventData::Args(&args),
        ));

        match self.op.call(args).await {
            Ok(value) => {
                let listener = {
                    let mut f = self.fields();
                    f.state = State::Success;
                    f.message = SUCCESS_MESSAGE.to_string();
                    f.result = Some(Ok(value.clone()));
                    Arc::clone(&f.listener)
                };
                listener.on_event(&Event::new(
                    EventKind::CompletedSuccessfully,
                    EventData::Output(&value),
                ));
                Ok(value)
            }
            Err(err) => {
                let parser = Arc::clone(&self.fields().parser);
                let message = parser(&err);
                let listener = {
                    let mut f = self.fields();
                    f.state = State::Error;
                    f.message = message;
                    f.result = Some(Err(err.clone()));
                    Arc::clone(&f.listener)
                };
                listener.on_event(&Event::new(
                    EventKind::CompletedUnsuccessfully,
                    EventData::Failure(&err),
                ));
                Err(err)
            }
        }
    }

    /// Resets to `Ready` / `""` / absent. Emits nothing. Idempotent.
    pub fn reset_to_ready(&self) -> &Self {
        let mut f = self.fields();
        f.state = State::Ready;
        f.message.clear();
        f.result = None;
        drop(f);
        self
    }

    /// Resets to `Executing` / `""` / absent. Emits nothing.
    pub fn reset_to_executing(&self) -> &Self {
        let mut f = self.fields();
        f.state = State::Executing;
        f.message.clear();
        f.result = None;
        drop(f);
        self
    }

    /// Replaces the active listener.
    ///
    /// Only one listener is active at a time; subsequent calls overwrite,
    /// not append. Shared handles (`Arc<impl Subscribe>`) are accepted
    /// directly.
    pub fn subscribe(&self, listener: impl Subscribe<Op>) -> &Self {
        self.fields().listener = Arc::new(listener);
        self
    }

    /// Replaces the active listener with a plain closure.
    pub fn subscribe_fn<F>(&self, f: F) -> &Self
    where
        F: Fn(&Event<'_, Op>) + Send + Sync + 'static,
    {
        self.subscribe(SubscriberFn::new("subscriber", f))
    }

    /// Restores the no-op listener.
    pub fn unsubscribe(&self) -> &Self {
        self.fields().listener = Arc::new(Noop);
        self
    }

    /// Replaces the failure-to-message parser used on failed settlements.
    ///
    /// The replacement must honor the parser contract: total over the
    /// error type, never panicking. A panicking parser is a caller bug
    /// that propagates out of `run` unhandled.
    pub fn set_error_parser(
        &self,
        parser: impl Fn(&Op::Error) -> String + Send + Sync + 'static,
    ) -> &Self {
        self.fields().parser = Arc::new(parser);
        self
    }

    /// Assigns `state` and emits `StateChanged` with the new value.
    ///
    /// Unchecked escape hatch: any state is assignable from any other,
    /// outside the normal run lifecycle.
    pub fn set_state(&self, state: State) -> &Self {
        let listener = {
            let mut f = self.fields();
            f.state = state;
            Arc::clone(&f.listener)
        };
        listener.on_event(&Event::new(EventKind::StateChanged, EventData::State(state)));
        self
    }

    /// Assigns `message` and emits `MessageChanged` with the new value.
    pub fn set_message(&self, message: impl Into<String>) -> &Self {
        let message = message.into();
        let listener = {
            let mut f = self.fields();
            f.message = message.clone();
            Arc::clone(&f.listener)
        };
        listener.on_event(&Event::new(
            EventKind::MessageChanged,
            EventData::Message(&message),
        ));
        self
    }

    /// Assigns `result` and emits `ResultChanged` with the new slot
    /// content (possibly cleared).
    pub fn set_result(&self, result: Option<Settled<Op>>) -> &Self {
        let listener = {
            let mut f = self.fields();
            f.result = result.clone();
            Arc::clone(&f.listener)
        };
        listener.on_event(&Event::new(
            EventKind::ResultChanged,
            EventData::Result(result.as_ref()),
        ));
        self
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.fields().state
    }

    /// Current message (empty until a settlement or an explicit set).
    pub fn message(&self) -> String {
        self.fields().message.clone()
    }

    /// Snapshot of the last settled outcome, success or failure
    /// indiscriminately; absent until the first settlement.
    pub fn result(&self) -> Option<Settled<Op>> {
        self.fields().result.clone()
    }

    /// Handle to the wrapped operation.
    pub fn operation(&self) -> Arc<Op> {
        Arc::clone(&self.op)
    }

    /// True while the operation has not been run (or was reset).
    pub fn is_ready(&self) -> bool {
        self.state() == State::Ready
    }

    /// Exact negation of [`is_ready`](Self::is_ready).
    pub fn is_not_ready(&self) -> bool {
        !self.is_ready()
    }

    /// True while a run is in flight.
    pub fn is_executing(&self) -> bool {
        self.state() == State::Executing
    }

    /// Exact negation of [`is_executing`](Self::is_executing).
    pub fn is_not_executing(&self) -> bool {
        !self.is_executing()
    }

    /// True after the last run settled successfully.
    pub fn is_successful(&self) -> bool {
        self.state() == State::Success
    }

    /// Exact negation of [`is_successful`](Self::is_successful).
    pub fn is_not_successful(&self) -> bool {
        !self.is_successful()
    }

    /// True after the last run settled with a failure.
    pub fn has_error(&self) -> bool {
        self.state() == State::Error
    }

    /// Exact negation of [`has_error`](Self::has_error).
    pub fn has_no_error(&self) -> bool {
        !self.has_error()
    }

    /// True iff `message` is non-empty.
    pub fn has_message(&self) -> bool {
        !self.fields().message.is_empty()
    }

    /// Exact negation of [`has_message`](Self::has_message).
    pub fn has_no_message(&self) -> bool {
        !self.has_message()
    }

    /// True iff the result slot is occupied.
    pub fn has_result(&self) -> bool {
        self.fields().result.is_some()
    }
}
