use std::collections::HashSet;

use crate::error::{removal_warning, SanitizationError};
use crate::logging::LogSink;

/// Strategy invoked when a sanitization pass removed attributes.
///
/// The sanitizer calls [`react`](RemovalReactor::react) exactly once per
/// pass, with the full ordered list of removed names, and only when that
/// list is non-empty. The strategy decides whether removal is silent,
/// logged, or fatal; it is injected into
/// [`AttributeSanitizer`](crate::AttributeSanitizer) at construction, so
/// the choice is made once by the integrator rather than per call.
///
/// Each invocation is a single atomic decision: no retries, no state
/// carried between calls.
///
/// # Examples
///
/// A custom reactor that fails on any removal at all:
///
/// ```
/// use assign_guard::{RemovalReactor, SanitizationError};
///
/// struct Unforgiving;
///
/// impl RemovalReactor for Unforgiving {
///     fn react(&self, removed: &[String]) -> Result<(), SanitizationError> {
///         Err(SanitizationError::new(removed.to_vec()))
///     }
/// }
/// ```
pub trait RemovalReactor {
    /// Reacts to the non-empty ordered list of removed attribute names.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` when the strategy treats the removal as
    /// fatal; the sanitizer propagates it to the caller unchanged.
    fn react(&self, removed: &[String]) -> Result<(), SanitizationError>;
}

/// Reactor that accepts every removal silently.
///
/// Denied attributes are simply dropped, with no observable reaction. This
/// is the baseline filtering behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReactor;

impl RemovalReactor for NoopReactor {
    fn react(&self, _removed: &[String]) -> Result<(), SanitizationError> {
        Ok(())
    }
}

/// Reactor that reports removals through an optional log sink.
///
/// With a sink present, each reaction emits exactly one warning naming all
/// removed attributes, comma-joined in input order:
///
/// ```text
/// Can't mass-assign protected attributes: id, admin
/// ```
///
/// With no sink, removals pass silently. This reactor never fails.
///
/// # Examples
///
/// ```
/// use assign_guard::{LoggingReactor, TracingSink};
///
/// // Report removals through tracing
/// let reactor = LoggingReactor::new(Some(TracingSink));
///
/// // Or stay silent
/// let quiet = LoggingReactor::<TracingSink>::new(None);
/// # let _ = (reactor, quiet);
/// ```
#[derive(Debug, Clone)]
pub struct LoggingReactor<L> {
    sink: Option<L>,
}

impl<L: LogSink> LoggingReactor<L> {
    /// Creates a logging reactor with an optional warning sink.
    pub fn new(sink: Option<L>) -> Self {
        Self { sink }
    }
}

impl<L: LogSink> RemovalReactor for LoggingReactor<L> {
    fn react(&self, removed: &[String]) -> Result<(), SanitizationError> {
        if let Some(sink) = &self.sink {
            sink.warn(&removal_warning(removed));
        }
        Ok(())
    }
}

/// Reactor that fails when non-exempt attributes are removed.
///
/// Carries a set of exempt attribute names whose removal is expected and
/// non-fatal; by default only `id`, since authorizers routinely deny the
/// identifier attribute even though callers routinely submit it. The
/// decision to fail considers `removed` minus the exempt set, but the
/// resulting [`SanitizationError`] names the *full* removed list so the
/// diagnostic is complete.
///
/// # Examples
///
/// ```
/// use assign_guard::{RemovalReactor, StrictReactor};
///
/// let reactor = StrictReactor::new();
///
/// // Removing only the exempt identifier succeeds silently
/// assert!(reactor.react(&["id".to_string()]).is_ok());
///
/// // Any other removal is fatal, and the error names everything removed
/// let error = reactor
///     .react(&["id".to_string(), "admin".to_string()])
///     .unwrap_err();
/// assert_eq!(error.removed(), ["id", "admin"]);
/// ```
#[derive(Debug, Clone)]
pub struct StrictReactor {
    exempt_names: HashSet<String>,
}

impl StrictReactor {
    /// Creates a strict reactor with the conventional `id` exemption.
    pub fn new() -> Self {
        Self::with_exemptions(["id"])
    }

    /// Creates a strict reactor with an explicit exemption set.
    ///
    /// An empty set makes every removal fatal.
    pub fn with_exemptions(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            exempt_names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StrictReactor {
    fn default() -> Self {
        Self::new()
    }
}

impl RemovalReactor for StrictReactor {
    fn react(&self, removed: &[String]) -> Result<(), SanitizationError> {
        // Decide on the exemption-filtered set, report the full set.
        if removed.iter().all(|name| self.exempt_names.contains(name)) {
            return Ok(());
        }
        Err(SanitizationError::new(removed.to_vec()))
    }
}
