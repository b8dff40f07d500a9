//! # opvisor
//!
//! **Opvisor** is a lightweight lifecycle supervisor for a single
//! asynchronous operation.
//!
//! It wraps one async unit of work and exposes observable `state` /
//! `message` / `result` fields, a pluggable failure-to-message parser, and
//! a single-subscriber event mechanism. The crate is designed as a small
//! building block for UIs, agents, and services that need to answer "what
//! is this call doing right now, and how did it last end?" without
//! touching the call itself.
//!
//! ## Architecture
//! ```text
//!     caller ──► Supervisor::run(args) ──► Operation::call(args)
//!                   │                              │
//!                   │ reset fields                 │
//!                   │ publish BeginExecuting       │ settlement
//!                   ▼                              ▼
//!     ┌───────────────────────────┐      Ok(value) / Err(failure)
//!     │ state   (ready/executing/ │               │
//!     │          success/error)   │ ◄─────────────┤ record copy,
//!     │ message (display string)  │               │ parse failure text,
//!     │ result  (last settlement) │               │ return original
//!     └─────────────┬─────────────┘               ▼
//!                   │                    caller sees the unchanged
//!                   ▼                    success / failure value
//!         Subscribe::on_event(Event)
//!            (single listener, synchronous)
//! ```
//!
//! ### Lifecycle
//! ```text
//! run(args)
//!   ├─► reset: state=executing, message="", result=absent
//!   ├─► publish BeginExecuting{ args }
//!   ├─► await Operation::call(args)
//!   │       │
//!   │       ├─ Ok(v)  ──► state=success, message="Success", result=Ok(v)
//!   │       │             publish CompletedSuccessfully{ v } ──► return Ok(v)
//!   │       │
//!   │       └─ Err(e) ──► state=error, message=parser(e), result=Err(e)
//!   │                     publish CompletedUnsuccessfully{ e } ──► return Err(e)
//!   │
//!   └─ the settlement is never swallowed or altered
//! ```
//!
//! ## Features
//! | Area            | Description                                                   | Key types / traits                  |
//! |-----------------|---------------------------------------------------------------|-------------------------------------|
//! | **Supervision** | Track one operation's lifecycle across any number of runs.    | [`Supervisor`]                      |
//! | **Operations**  | Define the supervised unit as a trait impl or a closure.      | [`Operation`], [`OperationFn`]      |
//! | **Events**      | Observe runs and field mutations through one listener.        | [`Subscribe`], [`Event`], [`EventKind`] |
//! | **States**      | Stable lowercase lifecycle labels.                            | [`State`]                           |
//! | **Messages**    | Pluggable failure-to-message extraction.                      | [`default_error_parser`], [`ErrorParser`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Concurrency model
//! The supervisor spawns nothing and blocks never: `run` suspends only on
//! the operation's own await, and every other method is a plain
//! synchronous call. Overlapping runs on one supervisor are not mutually
//! excluded; they race on the shared fields and the last settlement wins.
//! Use separate supervisors (or serialize calls) for per-invocation
//! isolation.
//!
//! ## Example
//! ```rust
//! use opvisor::{EventKind, OperationFn, State, Supervisor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sup = Supervisor::new(OperationFn::new("fetch-greeting", |name: String| async move {
//!         if name.is_empty() {
//!             Err("no name given".to_string())
//!         } else {
//!             Ok(format!("hello, {name}"))
//!         }
//!     }));
//!
//!     sup.subscribe_fn(|event| {
//!         if event.kind == EventKind::CompletedUnsuccessfully {
//!             eprintln!("fetch failed");
//!         }
//!     });
//!
//!     let greeting = sup.run("world".to_string()).await;
//!     assert_eq!(greeting, Ok("hello, world".to_string()));
//!     assert_eq!(sup.state(), State::Success);
//!     assert_eq!(sup.message(), "Success");
//! }
//! ```

mod events;
mod operations;
mod parser;
mod states;
mod subscribers;
mod supervisor;

// ---- Public re-exports ----

pub use events::{Event, EventData, EventKind};
pub use operations::{Operation, OperationFn, Settled};
pub use parser::{default_error_parser, ErrorParser, UNKNOWN_ERROR};
pub use states::State;
pub use subscribers::{Subscribe, SubscriberFn};
pub use supervisor::{Supervisor, SUCCESS_MESSAGE};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
