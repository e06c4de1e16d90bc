use std::fmt;

/// Renders the fixed removal message shared by the logging reactor and
/// [`SanitizationError`].
pub(crate) fn removal_warning(names: &[String]) -> String {
    format!(
        "Can't mass-assign protected attributes: {}",
        names.join(", ")
    )
}

/// Error returned when a strict reactor rejects a sanitization pass.
///
/// Carries the ordered list of every attribute name that was removed,
/// exempt names included: the pass/fail decision ignores exemptions, but
/// the diagnostic names everything that was actually stripped so the
/// caller sees the complete diff.
///
/// The error is immutable once constructed. Its constructor is public so
/// custom [`RemovalReactor`](crate::RemovalReactor) implementations can
/// produce it.
///
/// # Examples
///
/// ```
/// use assign_guard::SanitizationError;
///
/// let error = SanitizationError::new(["id", "admin"]);
///
/// assert_eq!(error.removed(), ["id", "admin"]);
/// assert_eq!(
///     error.to_string(),
///     "Can't mass-assign protected attributes: id, admin"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    removed: Vec<String>,
}

impl SanitizationError {
    /// Creates a new sanitization error from the removed attribute names,
    /// in the order they appeared in the input.
    pub fn new(removed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            removed: removed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the removed attribute names in input order.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&removal_warning(&self.removed))
    }
}

impl std::error::Error for SanitizationError {}
