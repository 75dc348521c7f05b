// src/ids.rs
//! Analysis identifiers: random 128-bit, hyphenated hex (UUID v4).

use uuid::Uuid;

/// Generate a fresh, effectively-unique analysis id.
pub fn make_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_hyphenated() {
        let a = make_id();
        let b = make_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.matches('-').count(), 4);
        assert!(a.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }
}
