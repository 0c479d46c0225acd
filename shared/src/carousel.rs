//! # Collection Carousel Controller
//!
//! Cyclic single-item viewer over a [`Collection`]. The controller owns the
//! collection and a current index; navigation wraps around in both
//! directions.
//!
//! ## Invariant
//!
//! After every call, `index() < len()` when the collection is non-empty, and
//! `index() == 0` when it is empty. Navigating an empty carousel is a no-op.
//!
//! ```rust
//! use shared::{Carousel, Collection};
//!
//! let mut carousel = Carousel::new(Collection::empty());
//! carousel.next();
//! carousel.previous();
//! assert_eq!(carousel.index(), 0);
//! assert!(carousel.current().is_none());
//! ```

use log::debug;

use crate::dto::poap::{Collection, PoapToken};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    items: Collection,
    current_index: usize,
}

impl Carousel {
    pub fn new(items: Collection) -> Self {
        Self {
            items,
            current_index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &Collection {
        &self.items
    }

    /// Token under the cursor, `None` for an empty collection.
    pub fn current(&self) -> Option<&PoapToken> {
        self.items.get(self.current_index)
    }

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current_index
    }

    /// Advance one position, wrapping from the last token to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        debug!("[CAROUSEL] next -> {}/{}", self.current_index, len);
    }

    /// Step back one position, wrapping from the first token to the last.
    pub fn previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
        debug!("[CAROUSEL] previous -> {}/{}", self.current_index, len);
    }

    /// Jump straight to `index`. Out-of-range requests are ignored and
    /// `false` is returned.
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.len() {
            debug!("[CAROUSEL] seek to {} rejected (len {})", index, self.len());
            return false;
        }
        self.current_index = index;
        debug!("[CAROUSEL] seek -> {}", index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::poap::Rarity;
    use chrono::NaiveDate;

    fn carousel_of(len: u32) -> Carousel {
        let tokens = (0..len)
            .map(|id| PoapToken {
                id,
                event_name: format!("Event {}", id),
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                organizer: "Org".to_string(),
                hash: format!("Qm{}", id),
                rarity: Rarity::Common,
            })
            .collect();
        Carousel::new(Collection::new(tokens).unwrap())
    }

    #[test]
    fn test_next_len_times_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut carousel = carousel_of(len as u32);
                assert!(carousel.seek(start));
                for _ in 0..len {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_previous_then_next_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let mut carousel = carousel_of(len as u32);
                carousel.seek(start);
                carousel.previous();
                carousel.next();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = carousel_of(4);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.current().map(|t| t.id), Some(3));
    }

    #[test]
    fn test_seek_out_of_range_is_ignored() {
        let mut carousel = carousel_of(3);
        carousel.seek(1);
        assert!(!carousel.seek(3));
        assert!(!carousel.seek(usize::MAX));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel_navigation_is_noop() {
        let mut carousel = carousel_of(0);
        carousel.next();
        carousel.previous();
        assert!(!carousel.seek(0));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = carousel_of(1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_current(0));
    }
}
