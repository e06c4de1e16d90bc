use crate::attributes::AttributeSet;
use crate::authorizer::Authorizer;
use crate::error::SanitizationError;
use crate::reactor::RemovalReactor;

/// Filters proposed attribute assignments against an authorizer's decisions.
///
/// `AttributeSanitizer<R>` partitions a batch of proposed attributes into
/// allowed and denied subsets, returns the allowed subset, and hands the
/// denied names to the injected [`RemovalReactor`]. It never decides *which*
/// attributes are forbidden; it only enforces the consequence uniformly.
///
/// # Invariants
///
/// For every call:
/// - The result's keys are a subset of the input's keys
/// - Surviving entries keep their input order and their exact values
/// - The input set is never mutated; a fresh filtered copy is returned
/// - The reactor runs at most once, with the full ordered removed list,
///   and only when that list is non-empty
///
/// # Examples
///
/// ```
/// use assign_guard::{AttributeSanitizer, AttributeSet, DenyListAuthorizer, NoopReactor};
///
/// let proposed: AttributeSet<&str> =
///     [("name", "Alice"), ("admin", "true")].into_iter().collect();
/// let authorizer = DenyListAuthorizer::new(["admin"]);
///
/// let sanitizer = AttributeSanitizer::new(NoopReactor);
/// let sanitized = sanitizer
///     .sanitize(&proposed, &authorizer)
///     .expect("no-op reactor never fails");
///
/// assert_eq!(sanitized.get("name"), Some(&"Alice"));
/// assert!(!sanitized.contains_key("admin"));
/// ```
#[derive(Debug, Clone)]
pub struct AttributeSanitizer<R> {
    reactor: R,
}

impl<R: RemovalReactor> AttributeSanitizer<R> {
    /// Creates a sanitizer with the given removal reactor.
    pub fn new(reactor: R) -> Self {
        Self { reactor }
    }

    /// Returns a fresh copy of `attributes` containing only the entries the
    /// authorizer allows.
    ///
    /// Each key is checked with [`Authorizer::deny`] exactly once, in input
    /// order; values are cloned through untouched. When one or more entries
    /// were removed, the reactor is invoked once with the full removed list
    /// before the result is returned.
    ///
    /// The filter itself never fails — an empty input yields an empty
    /// result with no reaction, and an authorizer that denies nothing
    /// yields an equal copy of the input.
    ///
    /// # Errors
    ///
    /// Propagates `SanitizationError` from the reactor when it treats the
    /// removal as fatal (see [`StrictReactor`](crate::StrictReactor)).
    pub fn sanitize<V, A>(
        &self,
        attributes: &AttributeSet<V>,
        authorizer: &A,
    ) -> Result<AttributeSet<V>, SanitizationError>
    where
        V: Clone,
        A: Authorizer,
    {
        let mut sanitized = AttributeSet::new();
        let mut removed: Vec<String> = Vec::new();

        for (name, value) in attributes.iter() {
            if authorizer.deny(name) {
                removed.push(name.to_string());
            } else {
                sanitized.insert(name, value.clone());
            }
        }

        if !removed.is_empty() {
            self.reactor.react(&removed)?;
        }

        Ok(sanitized)
    }
}
