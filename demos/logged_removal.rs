//! Logged removal demonstration.
//!
//! This example shows the logging reactor in action: denied attributes are
//! stripped from a proposed update, and a single warning naming them is
//! emitted through tracing.
//!
//! Run with: `cargo run --example logged_removal`

use assign_guard::{
    AttributeSanitizer, AttributeSet, DenyListAuthorizer, LoggingReactor, TracingSink,
};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Logged Removal Example ===\n");

    // A profile update as a caller might submit it, privilege flag included
    let proposed: AttributeSet<String> = [
        ("name", "Alice".to_string()),
        ("email", "alice@example.com".to_string()),
        ("admin", "true".to_string()),
    ]
    .into_iter()
    .collect();
    println!("Proposed update: {:?}", proposed);

    // The authorizer protects the privilege flag
    let authorizer = DenyListAuthorizer::new(["admin"]);

    let sanitizer = AttributeSanitizer::new(LoggingReactor::new(Some(TracingSink)));
    let sanitized = sanitizer
        .sanitize(&proposed, &authorizer)
        .expect("logging reactor never fails");

    println!("\nSanitized update: {:?}", sanitized);
    println!("\nNotice: the warning above names the removed attribute,");
    println!("and the proposed set itself is untouched: {:?}", proposed);
}
