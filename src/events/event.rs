//! # Lifecycle events published to the subscriber.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Run events**: emitted by `run` as the operation starts and settles
//!   (begin, completed successfully, completed unsuccessfully)
//! - **Mutation events**: emitted when a field is assigned through its
//!   explicit mutator (`state`, `message`, `result` changed)
//!
//! The [`Event`] struct carries the kind, a wall-clock timestamp, and the
//! metadata the event is about, borrowed from the supervisor's call frame.
//!
//! ## Ordering guarantees
//! Events for a single non-overlapping `run` arrive in a fixed order:
//! `BeginExecuting`, then exactly one of `CompletedSuccessfully` /
//! `CompletedUnsuccessfully`, with no other run events interleaved.
//! Delivery is synchronous, in the emitting call's stack frame.

use std::fmt;
use std::time::SystemTime;

use crate::operations::{Operation, Settled};
use crate::states::State;

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A run has reset the fields and is about to invoke the operation.
    ///
    /// Carries the argument bundle the run was started with.
    BeginExecuting,

    /// The operation settled with a success value.
    ///
    /// Carries the success value; `state` is already `Success`, `message`
    /// is already the fixed success string, and `result` holds the value.
    CompletedSuccessfully,

    /// The operation settled with a failure value.
    ///
    /// Carries the failure value; `state` is already `Error`, `message` is
    /// already the parser's output, and `result` holds the failure.
    CompletedUnsuccessfully,

    /// `message` was assigned through its mutator.
    ///
    /// Carries the new message.
    MessageChanged,

    /// `state` was assigned through its mutator.
    ///
    /// Carries the new state.
    StateChanged,

    /// `result` was assigned through its mutator.
    ///
    /// Carries the new result slot content (possibly cleared).
    ResultChanged,
}

impl EventKind {
    /// All six kinds, the read-only enumeration subscribers match on.
    pub const ALL: [EventKind; 6] = [
        EventKind::BeginExecuting,
        EventKind::CompletedSuccessfully,
        EventKind::CompletedUnsuccessfully,
        EventKind::MessageChanged,
        EventKind::StateChanged,
        EventKind::ResultChanged,
    ];

    /// Returns the stable lowercase label for this kind.
    ///
    /// # Example
    /// ```
    /// use opvisor::EventKind;
    ///
    /// assert_eq!(EventKind::BeginExecuting.as_str(), "begin_executing");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::BeginExecuting => "begin_executing",
            EventKind::CompletedSuccessfully => "completed_successfully",
            EventKind::CompletedUnsuccessfully => "completed_unsuccessfully",
            EventKind::MessageChanged => "message_changed",
            EventKind::StateChanged => "state_changed",
            EventKind::ResultChanged => "result_changed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata attached to an event, borrowed for the duration of delivery.
pub enum EventData<'a, Op: Operation> {
    /// Argument bundle a run was started with (`BeginExecuting`).
    Args(&'a Op::Args),
    /// Value the operation resolved with (`CompletedSuccessfully`).
    Output(&'a Op::Output),
    /// Value the operation failed with (`CompletedUnsuccessfully`).
    Failure(&'a Op::Error),
    /// Newly assigned state (`StateChanged`).
    State(State),
    /// Newly assigned message (`MessageChanged`).
    Message(&'a str),
    /// Newly assigned result slot (`ResultChanged`).
    Result(Option<&'a Settled<Op>>),
}

/// Lifecycle event with its metadata.
pub struct Event<'a, Op: Operation> {
    /// Event classification.
    pub kind: EventKind,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Metadata the event is about.
    pub data: EventData<'a, Op>,
}

impl<'a, Op: Operation> Event<'a, Op> {
    /// Creates a new event of the given kind, stamped with the current time.
    pub fn new(kind: EventKind, data: EventData<'a, Op>) -> Self {
        Self {
            kind,
            at: SystemTime::now(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_kinds() {
        assert_eq!(EventKind::ALL.len(), 6);
    }

    #[test]
    fn test_values_are_lowercase() {
        for kind in EventKind::ALL {
            let value = kind.as_str();
            assert_eq!(value, value.to_lowercase(), "{kind:?} is not lowercase");
        }
    }

    #[test]
    fn test_values_have_no_whitespace() {
        for kind in EventKind::ALL {
            assert!(
                !kind.as_str().contains(char::is_whitespace),
                "{kind:?} contains whitespace"
            );
        }
    }

    #[test]
    fn test_exact_values() {
        let expected = [
            (EventKind::BeginExecuting, "begin_executing"),
            (EventKind::CompletedSuccessfully, "completed_successfully"),
            (EventKind::CompletedUnsuccessfully, "completed_unsuccessfully"),
            (EventKind::MessageChanged, "message_changed"),
            (EventKind::StateChanged, "state_changed"),
            (EventKind::ResultChanged, "result_changed"),
        ];
        for (kind, value) in expected {
            assert_eq!(kind.as_str(), value);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in EventKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
