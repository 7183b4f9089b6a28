//! Error types and the fatal-invariant reporting path.
//!
//! Two distinct failure channels exist in this crate, and they are
//! never allowed to collapse into one:
//!
//! - [`SchedulerError`] — recoverable, caller-facing construction
//!   errors (e.g. a hand-built [`crate::ResourceVector`] with the
//!   wrong predefined length), checked *before* a `Schedule` call.
//! - [`fatal`] — internal invariant breaches discovered *during* a
//!   `Schedule` call (negative availability, a manager that grants an
//!   acquire it then refuses to release, an unreachable policy tag).
//!   These indicate corruption or a programming error, not a bad
//!   input, and the process must not continue past them.

use thiserror::Error;

/// Result alias for caller-facing, recoverable construction errors.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Errors raised while constructing or validating inputs to `Schedule`.
///
/// Never returned by `Schedule` itself — its three-way outcome lives
/// entirely in `SchedulingResult::status`. This type exists for
/// callers that assemble `ResourceVector`s from untyped input (e.g.
/// deserialized from a placement-group spec) and want to validate
/// shape before ever invoking the scheduler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("predefined resource slice has {actual} entries, expected {expected}")]
    WrongPredefinedLength { actual: usize, expected: usize },
}

/// Report a fatal internal invariant violation and abort the process.
///
/// Logs at `error!` so the last line in the trace explains the panic
/// that immediately follows, then panics. Never returns.
#[track_caller]
pub fn fatal(message: &str) -> ! {
    tracing::error!(invariant_violation = message, "fatal scheduler invariant violated");
    panic!("fatal scheduler invariant violated: {message}");
}
