//! # Shared Utility Functions
//!
//! Common helpers used by the client and its logs.
//!
//! ## Card Formatting
//!
//! - [`last_four`] - Hide a card number behind its last 4 digits
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::last_four;
//!
//! assert_eq!(last_four("1111222233334444"), "**** 4444");
//! ```

/// Card number reduced to "**** 4444" for greetings and log fields.
///
/// Numbers shorter than 4 digits keep whatever they have.
pub fn last_four(card: &str) -> String {
    let len = card.chars().count();
    let tail: String = card.chars().skip(len.saturating_sub(4)).collect();
    format!("**** {}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("5555666677778888"), "**** 8888");
        assert_eq!(last_four("12"), "**** 12");
        assert_eq!(last_four(""), "**** ");
    }
}
