//! # Shared Utility Functions
//!
//! Display formatting used by the dashboard cards and navbar.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters with an ellipsis between
//! - [`truncate_address`] - [`format_address`] with 4/4
//!
//! ## Token Display
//!
//! - [`format_event_date`] - `2024-03-15` as `Mar 15, 2024`
//! - [`collector_stars`] - How many of the collector badge stars are lit
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "7ZUECA7HFLZTXENRV24SHLU4AVPUTMTTDUFUBNBD64C73F3UHRTHAIOF6Q";
//! assert_eq!(format_address(address, 4, 4), "7ZUE...OF6Q");
//! ```

use chrono::NaiveDate;

/// Number of stars on the collector badge.
pub const COLLECTOR_STAR_SLOTS: usize = 5;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to shorten are returned unchanged.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "7ZUECA7HFLZTXENRV24SHLU4AVPUTMTTDUFUBNBD64C73F3UHRTHAIOF6Q";
/// assert_eq!(format_address(addr, 6, 6), "7ZUECA...AIOF6Q");
/// assert_eq!(format_address("ALGO", 4, 4), "ALGO");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format an event date for a card, e.g. `Mar 15, 2024`.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Lit stars on the collector badge: one per token, capped at the slot count.
pub fn collector_stars(collected: usize) -> usize {
    collected.min(COLLECTOR_STAR_SLOTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "7ZUECA7HFLZTXENRV24SHLU4AVPUTMTTDUFUBNBD64C73F3UHRTHAIOF6Q";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "7ZUE...OF6Q");
        assert_eq!(format_address(ADDR, 2, 3), "7Z...F6Q");
        assert_eq!(format_address(ADDR, 0, 4), "...OF6Q");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("ABCDEFGH", 4, 4), "ABCDEFGH");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "7ZUE...OF6Q");
    }

    #[test]
    fn test_format_event_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_event_date(date), "Mar 15, 2024");
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_event_date(date), "Jan 5, 2024");
    }

    #[test]
    fn test_collector_stars_caps_at_slots() {
        assert_eq!(collector_stars(0), 0);
        assert_eq!(collector_stars(3), 3);
        assert_eq!(collector_stars(12), COLLECTOR_STAR_SLOTS);
    }
}
