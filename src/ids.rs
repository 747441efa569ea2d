//! Entry id generation.
//!
//! The store contract requires callers to pre-assign unique ids to every
//! sequence entry. The forms use this generator: a millisecond timestamp
//! plus random bytes, prefixed per entity family.
//!
//! Format: `{prefix}_{timestamp_ms}_{random_hex}`

use chrono::Utc;

/// Id prefix for services.
pub const SERVICE_PREFIX: &str = "svc";
/// Id prefix for projects.
pub const PROJECT_PREFIX: &str = "prj";
/// Id prefix for testimonials.
pub const TESTIMONIAL_PREFIX: &str = "tst";

/// Generate a fresh entry id with the given prefix.
pub fn new_entry_id(prefix: &str) -> String {
    let mut random = [0u8; 4];
    getrandom::getrandom(&mut random).expect("Failed to generate random bytes");

    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        hex::encode(random)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_carries_the_prefix() {
        let id = new_entry_id(SERVICE_PREFIX);
        assert!(id.starts_with("svc_"));
    }

    #[test]
    fn ids_are_unique_across_calls() {
        let a = new_entry_id(PROJECT_PREFIX);
        let b = new_entry_id(PROJECT_PREFIX);
        assert_ne!(a, b);
    }

    #[test]
    fn id_has_three_sections() {
        let id = new_entry_id(TESTIMONIAL_PREFIX);
        assert_eq!(id.split('_').count(), 3);
    }
}
