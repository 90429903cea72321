//! Recency tracking
//!
//! Each category keeps a bounded FIFO of the identifiers it served most
//! recently. The window is a log of picks, not a set: when selection falls
//! back to the full category the same identifier can appear more than once.

use crate::category::EmotionCategory;
use crate::verse::VerseId;
use std::collections::{HashMap, VecDeque};

/// Default number of picks remembered per category
pub const DEFAULT_WINDOW: usize = 3;

/// Per-category bounded history of served verse identifiers
#[derive(Debug, Clone)]
pub struct RecencyTracker {
    windows: HashMap<EmotionCategory, VecDeque<VerseId>>,
    capacity: usize,
}

impl RecencyTracker {
    /// Create a tracker remembering `capacity` picks per category.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            windows: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recently served identifiers, oldest first. Empty if never recorded.
    pub fn recent(&self, category: EmotionCategory) -> Vec<VerseId> {
        self.windows
            .get(&category)
            .map(|w| w.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Check whether `id` is inside the category's window
    pub fn contains(&self, category: EmotionCategory, id: VerseId) -> bool {
        self.windows
            .get(&category)
            .is_some_and(|w| w.contains(&id))
    }

    /// Append a pick, evicting the oldest entries past capacity
    pub fn record(&mut self, category: EmotionCategory, id: VerseId) {
        let window = self.windows.entry(category).or_default();
        window.push_back(id);

        while window.len() > self.capacity {
            if let Some(evicted) = window.pop_front() {
                tracing::trace!(%category, %evicted, "recency window evicted");
            }
        }
    }
}

impl Default for RecencyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_category_is_empty() {
        let tracker = RecencyTracker::default();
        assert!(tracker.recent(EmotionCategory::Happy).is_empty());
        assert!(!tracker.contains(EmotionCategory::Happy, VerseId(1)));
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut tracker = RecencyTracker::new(3);
        for id in 1..=5 {
            tracker.record(EmotionCategory::Sad, VerseId(id));
        }
        assert_eq!(
            tracker.recent(EmotionCategory::Sad),
            vec![VerseId(3), VerseId(4), VerseId(5)]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut tracker = RecencyTracker::new(3);
        tracker.record(EmotionCategory::Anything, VerseId(9));
        tracker.record(EmotionCategory::Anything, VerseId(9));
        assert_eq!(
            tracker.recent(EmotionCategory::Anything),
            vec![VerseId(9), VerseId(9)]
        );
    }

    #[test]
    fn test_categories_are_independent() {
        let mut tracker = RecencyTracker::new(2);
        tracker.record(EmotionCategory::Angry, VerseId(1));
        tracker.record(EmotionCategory::Lonely, VerseId(2));
        assert_eq!(tracker.recent(EmotionCategory::Angry), vec![VerseId(1)]);
        assert_eq!(tracker.recent(EmotionCategory::Lonely), vec![VerseId(2)]);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut tracker = RecencyTracker::new(0);
        assert_eq!(tracker.capacity(), 1);
        tracker.record(EmotionCategory::Happy, VerseId(1));
        tracker.record(EmotionCategory::Happy, VerseId(2));
        assert_eq!(tracker.recent(EmotionCategory::Happy), vec![VerseId(2)]);
    }
}
