use std::collections::HashSet;

/// Capability answering whether a single attribute name may be assigned.
///
/// The sanitizer consumes an `Authorizer` through this one operation and
/// nothing else: how the decision is made (deny-lists, allow-lists,
/// role-based rules) stays entirely on the implementor's side.
///
/// # Invariants
///
/// Implementations MUST:
/// - Return an answer for every name they are asked about; a name with no
///   explicit rule is the implementor's own default-allow/default-deny
///   choice
/// - Be free of side effects observable by the sanitizer; the same call may
///   be issued for the same name across repeated sanitization passes
///
/// # Examples
///
/// ```
/// use assign_guard::Authorizer;
///
/// struct ProtectRole;
///
/// impl Authorizer for ProtectRole {
///     fn deny(&self, name: &str) -> bool {
///         name == "role"
///     }
/// }
///
/// assert!(ProtectRole.deny("role"));
/// assert!(!ProtectRole.deny("email"));
/// ```
pub trait Authorizer {
    /// Returns `true` if assignment of the named attribute is denied.
    fn deny(&self, name: &str) -> bool;
}

/// A trivial authorizer that denies nothing (for testing only).
///
/// **WARNING:** This authorizer performs NO protection and should only be
/// used in tests or as a placeholder. Every proposed attribute survives
/// sanitization unchanged.
#[derive(Debug, Clone, Copy)]
pub struct AllowAllAuthorizer;

impl Authorizer for AllowAllAuthorizer {
    fn deny(&self, _name: &str) -> bool {
        false
    }
}

/// A trivial authorizer that denies everything (for testing only).
///
/// Useful for exercising removal paths: every proposed attribute is
/// stripped, so the removal reaction always fires on non-empty input.
#[derive(Debug, Clone, Copy)]
pub struct DenyAllAuthorizer;

impl Authorizer for DenyAllAuthorizer {
    fn deny(&self, _name: &str) -> bool {
        true
    }
}

/// An authorizer denying exactly a configured set of attribute names.
///
/// This is the simplest real rule set: names on the list are denied, every
/// other name is allowed by default.
///
/// # Examples
///
/// ```
/// use assign_guard::{Authorizer, DenyListAuthorizer};
///
/// let authorizer = DenyListAuthorizer::new(["admin", "role"]);
///
/// assert!(authorizer.deny("admin"));
/// assert!(!authorizer.deny("email"));
/// ```
#[derive(Debug, Clone)]
pub struct DenyListAuthorizer {
    denied: HashSet<String>,
}

impl DenyListAuthorizer {
    /// Creates an authorizer denying the given attribute names.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            denied: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Authorizer for DenyListAuthorizer {
    fn deny(&self, name: &str) -> bool {
        self.denied.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_denies_nothing() {
        let authorizer = AllowAllAuthorizer;

        assert!(!authorizer.deny("id"));
        assert!(!authorizer.deny("admin"));
        assert!(!authorizer.deny(""));
    }

    #[test]
    fn deny_all_denies_everything() {
        let authorizer = DenyAllAuthorizer;

        assert!(authorizer.deny("id"));
        assert!(authorizer.deny("name"));
        assert!(authorizer.deny(""));
    }

    #[test]
    fn deny_list_denies_only_listed_names() {
        let authorizer = DenyListAuthorizer::new(["admin", "role"]);

        assert!(authorizer.deny("admin"));
        assert!(authorizer.deny("role"));
        assert!(!authorizer.deny("name"));
        assert!(!authorizer.deny("Admin")); // names are matched exactly
    }

    #[test]
    fn empty_deny_list_allows_everything() {
        let authorizer = DenyListAuthorizer::new(Vec::<String>::new());

        assert!(!authorizer.deny("anything"));
    }
}
