//! Mass-assignment filtering with pluggable reactions to removed attributes.
//!
//! This crate mediates between the attributes a caller wants to set on an
//! object and the attributes an authorizer actually allows:
//!
//! - **Filtering**: [`AttributeSanitizer`] partitions a proposed
//!   [`AttributeSet`] by asking an [`Authorizer`] about each name, and
//!   returns a fresh copy holding only the allowed entries
//! - **Pluggable reaction**: an injected [`RemovalReactor`] decides what
//!   happens to the removed names — nothing ([`NoopReactor`]), one warning
//!   through an optional sink ([`LoggingReactor`]), or a hard failure with
//!   an exemption set ([`StrictReactor`])
//!
//! The crate never decides *which* attributes are forbidden — that stays
//! with the authorizer — and it never inspects or transforms values; only
//! key membership changes.
//!
//! # Core Types
//!
//! - [`AttributeSet<V>`]: insertion-ordered name/value batch, opaque values
//! - [`Authorizer`]: capability answering "is this attribute name denied?"
//! - [`AttributeSanitizer<R>`]: the filter, generic over its reactor
//! - [`RemovalReactor`]: strategy invoked once per pass with the removed names
//! - [`SanitizationError`]: strict failure carrying the ordered removed list
//!
//! # Examples
//!
//! ```
//! use assign_guard::{
//!     AttributeSanitizer, AttributeSet, DenyListAuthorizer, StrictReactor,
//! };
//!
//! let proposed: AttributeSet<&str> =
//!     [("id", "1"), ("name", "Alice"), ("admin", "true")]
//!         .into_iter()
//!         .collect();
//!
//! // The authorizer denies the identifier and the privilege flag
//! let authorizer = DenyListAuthorizer::new(["id", "admin"]);
//!
//! // Strict enforcement: removals beyond the exempt `id` are fatal
//! let sanitizer = AttributeSanitizer::new(StrictReactor::new());
//! let error = sanitizer.sanitize(&proposed, &authorizer).unwrap_err();
//!
//! assert_eq!(error.removed(), ["id", "admin"]);
//! assert_eq!(
//!     error.to_string(),
//!     "Can't mass-assign protected attributes: id, admin"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attributes;
mod authorizer;
mod error;
mod logging;
mod reactor;
mod sanitizer;

pub use attributes::AttributeSet;
pub use authorizer::{AllowAllAuthorizer, Authorizer, DenyAllAuthorizer, DenyListAuthorizer};
pub use error::SanitizationError;
pub use logging::{LogSink, TracingSink};
pub use reactor::{LoggingReactor, NoopReactor, RemovalReactor, StrictReactor};
pub use sanitizer::AttributeSanitizer;
