//! Strict assignment demonstration.
//!
//! This example shows the strict reactor: removal of the exempt `id`
//! attribute passes silently, while any other removal aborts the update
//! with an error naming everything that was stripped.
//!
//! Run with: `cargo run --example strict_assignment`

use assign_guard::{AttributeSanitizer, AttributeSet, DenyListAuthorizer, StrictReactor};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Strict Assignment Example ===\n");

    let authorizer = DenyListAuthorizer::new(["id", "admin"]);
    let sanitizer = AttributeSanitizer::new(StrictReactor::new());

    println!("--- Scenario 1: Only the exempt identifier is removed ---");
    let proposed: AttributeSet<String> =
        [("id", "7".to_string()), ("name", "Alice".to_string())]
            .into_iter()
            .collect();
    println!("Proposed update: {:?}", proposed);

    match sanitizer.sanitize(&proposed, &authorizer) {
        Ok(sanitized) => println!("Accepted: {:?}", sanitized),
        Err(error) => println!("Rejected: {}", error),
    }

    println!("\n--- Scenario 2: A protected attribute is removed ---");
    let proposed: AttributeSet<String> =
        [("id", "7".to_string()), ("admin", "true".to_string())]
            .into_iter()
            .collect();
    println!("Proposed update: {:?}", proposed);

    match sanitizer.sanitize(&proposed, &authorizer) {
        Ok(sanitized) => println!("Accepted: {:?}", sanitized),
        Err(error) => {
            println!("Rejected: {}", error);
            println!("Removed attributes, in input order: {:?}", error.removed());
        }
    }

    println!("\nNote: the rejection message names the exempt `id` too;");
    println!("only the decision to fail ignores exemptions.");
}
