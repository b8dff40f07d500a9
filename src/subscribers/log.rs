//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [begin-executing] args=(3, 4)
//! [completed-successfully] output=7
//! [completed-unsuccessfully] failure="connection refused"
//! [state-changed] state=ready
//! [message-changed] message="retrying later"
//! [result-changed] result=Some(Ok(7))
//! ```

use std::fmt::Debug;

use crate::events::{Event, EventData};
use crate::operations::Operation;
use crate::subscribers::subscriber::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature, and available for operations whose
/// `Args`/`Output`/`Error` are `Debug`. Not intended for production use -
/// implement a custom [`Subscribe`] for structured logging or metrics
/// collection.
pub struct LogWriter;

impl<Op> Subscribe<Op> for LogWriter
where
    Op: Operation,
    Op::Args: Debug,
    Op::Output: Debug,
    Op::Error: Debug,
{
    fn on_event(&self, event: &Event<'_, Op>) {
        match &event.data {
            EventData::Args(args) => {
                println!("[begin-executing] args={args:?}");
            }
            EventData::Output(value) => {
                println!("[completed-successfully] output={value:?}");
            }
            EventData::Failure(err) => {
                println!("[completed-unsuccessfully] failure={err:?}");
            }
            EventData::State(state) => {
                println!("[state-changed] state={state}");
            }
            EventData::Message(message) => {
                println!("[message-changed] message={message:?}");
            }
            EventData::Result(result) => {
                println!("[result-changed] result={result:?}");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
