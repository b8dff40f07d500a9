//! # Failure-to-message extraction.
//!
//! When a supervised operation fails, the supervisor derives a user-facing
//! `message` from the failure value through a pluggable parser. The built-in
//! [`default_error_parser`] is total and never panics; substitutes installed
//! via `Supervisor::set_error_parser` must honor the same shape
//! (`&E → String`, non-panicking).

use std::fmt;
use std::sync::Arc;

/// Shared handle to a failure-to-message function.
///
/// Held behind an `Arc` so the supervisor can invoke it with its own lock
/// released.
pub type ErrorParser<E> = Arc<dyn Fn(&E) -> String + Send + Sync>;

/// Fallback message for failures that carry nothing displayable.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Derives a user-friendly message from an arbitrary failure value.
///
/// The failure is rendered through its [`Display`](fmt::Display)
/// implementation, which covers the common cases in one pass:
///
/// - plain strings pass through unchanged;
/// - error types (`std::error::Error`, `thiserror` deriveds) yield their
///   message, since `Display` is the message channel for errors;
/// - any other displayable value yields its canonical string form.
///
/// A rendering that comes back empty means the value has nothing to show,
/// and the fixed [`UNKNOWN_ERROR`] message is returned instead.
///
/// # Example
/// ```
/// use opvisor::default_error_parser;
///
/// assert_eq!(default_error_parser(&"connection refused"), "connection refused");
/// assert_eq!(default_error_parser(&""), "An unknown error occurred");
/// assert_eq!(default_error_parser(&404), "404");
/// ```
pub fn default_error_parser<E: fmt::Display>(err: &E) -> String {
    let text = err.to_string();
    if text.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("disk quota exceeded")]
    struct QuotaError;

    #[derive(Error, Debug)]
    #[error("{0}")]
    struct WrappedMessage(String);

    #[test]
    fn test_string_passes_through_unchanged() {
        let input = "SOME_STRING 0.8133 ~~~~~";
        assert_eq!(default_error_parser(&input), input);
        assert_eq!(default_error_parser(&input.to_string()), input);
    }

    #[test]
    fn test_empty_input_yields_generic_message() {
        assert_eq!(default_error_parser(&""), UNKNOWN_ERROR);
        assert_eq!(default_error_parser(&String::new()), UNKNOWN_ERROR);
    }

    #[test]
    fn test_error_types_yield_their_message() {
        assert_eq!(default_error_parser(&QuotaError), "disk quota exceeded");
        assert_eq!(
            default_error_parser(&WrappedMessage("boom".into())),
            "boom"
        );
    }

    #[test]
    fn test_other_values_yield_canonical_form() {
        assert_eq!(default_error_parser(&123_456_789), "123456789");
        assert_eq!(default_error_parser(&f64::INFINITY), "inf");
        assert_eq!(default_error_parser(&'x'), "x");
    }
}
