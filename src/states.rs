//! # Lifecycle states of a supervised operation.
//!
//! [`State`] classifies where the overseen operation currently is in its
//! lifecycle. The string form of every state is lowercase with no internal
//! whitespace; these values are part of the public contract and safe to use
//! as stable labels in logs and UIs.
//!
//! ## Transitions
//! ```text
//!            run() / reset_to_executing()
//!   ready ───────────────────────────────► executing
//!     ▲                                       │
//!     │ reset_to_ready()          settlement  │
//!     └───────────── success ◄── Ok ──────────┤
//!     └───────────── error   ◄── Err ─────────┘
//! ```
//!
//! `set_state` is an unchecked escape hatch: any state is assignable from
//! any other (e.g. to cancel by hand or to seed a prior outcome).

use std::fmt;

/// The stage the supervised operation is in at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The operation has not been run yet (or has been reset).
    Ready,
    /// The operation is currently executing (even if it previously failed).
    Executing,
    /// The last run settled with a success value.
    Success,
    /// Something has gone wrong, and the operation is not currently executing.
    Error,
}

impl State {
    /// All states, in lifecycle order.
    pub const ALL: [State; 4] = [
        State::Ready,
        State::Executing,
        State::Success,
        State::Error,
    ];

    /// Returns the stable lowercase label for this state.
    ///
    /// # Example
    /// ```
    /// use opvisor::State;
    ///
    /// assert_eq!(State::Executing.as_str(), "executing");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Ready => "ready",
            State::Executing => "executing",
            State::Success => "success",
            State::Error => "error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_states() {
        assert_eq!(State::ALL.len(), 4);
    }

    #[test]
    fn test_values_are_lowercase() {
        for state in State::ALL {
            let value = state.as_str();
            assert_eq!(value, value.to_lowercase(), "{state:?} is not lowercase");
        }
    }

    #[test]
    fn test_values_have_no_whitespace() {
        for state in State::ALL {
            assert!(
                !state.as_str().contains(char::is_whitespace),
                "{state:?} contains whitespace"
            );
        }
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(State::Ready.as_str(), "ready");
        assert_eq!(State::Executing.as_str(), "executing");
        assert_eq!(State::Success.as_str(), "success");
        assert_eq!(State::Error.as_str(), "error");
    }

    #[test]
    fn test_display_matches_as_str() {
        for state in State::ALL {
            assert_eq!(state.to_string(), state.as_str());
        }
    }
}
