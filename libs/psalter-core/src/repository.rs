//! Verse repository
//!
//! Owns the corpus grouped by category and serves random verses with an
//! anti-repetition policy: a verse served within the last `k` picks of its
//! category is skipped, unless every verse in the category was, in which
//! case the whole category is eligible again.
//!
//! Mutating operations take `&mut self`, so the read, the pick and the
//! recency update of [`VerseRepository::random_by_category`] always run as
//! one unit. Shared owners wrap the repository in a lock.

use crate::category::EmotionCategory;
use crate::error::{Result, VerseError};
use crate::recency::{RecencyTracker, DEFAULT_WINDOW};
use crate::verse::{NewVerse, Verse, VerseId};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// In-memory verse store with anti-repetition selection
#[derive(Debug)]
pub struct VerseRepository<R = StdRng> {
    verses: HashMap<EmotionCategory, Vec<Verse>>,
    next_id: u64,
    recency: RecencyTracker,
    rng: R,
}

impl VerseRepository<StdRng> {
    /// Empty repository drawing from an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty repository with reproducible selection
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for VerseRepository<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> VerseRepository<R> {
    /// Empty repository drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            verses: HashMap::new(),
            next_id: 1,
            recency: RecencyTracker::new(DEFAULT_WINDOW),
            rng,
        }
    }

    /// Replace the recency window size. Existing windows are discarded.
    pub fn with_window(mut self, capacity: usize) -> Self {
        self.recency = RecencyTracker::new(capacity);
        self
    }

    /// Number of picks remembered per category
    pub fn window(&self) -> usize {
        self.recency.capacity()
    }

    /// All verses in `category`, in insertion order
    pub fn list_by_category(&self, category: EmotionCategory) -> Vec<Verse> {
        self.verses.get(&category).cloned().unwrap_or_default()
    }

    /// Look up a verse by identifier
    pub fn get(&self, id: VerseId) -> Option<&Verse> {
        self.verses.values().flatten().find(|v| v.id == id)
    }

    pub fn count(&self, category: EmotionCategory) -> usize {
        self.verses.get(&category).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.verses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers recently served for `category`, oldest first
    pub fn recent(&self, category: EmotionCategory) -> Vec<VerseId> {
        self.recency.recent(category)
    }

    /// Store a new verse and return it.
    ///
    /// Fails with [`VerseError::InvalidInput`] when `text` or `reference` is
    /// blank; nothing is stored and no identifier is consumed.
    pub fn add(
        &mut self,
        category: EmotionCategory,
        text: impl Into<String>,
        reference: impl Into<String>,
        personal_message: impl Into<String>,
    ) -> Result<Verse> {
        self.insert(NewVerse::new(category, text, reference, personal_message))
    }

    /// Store a [`NewVerse`] after checking its required fields
    pub fn insert(&mut self, new: NewVerse) -> Result<Verse> {
        new.validate()?;

        let verse = Verse {
            id: VerseId(self.next_id),
            emotion: new.emotion,
            text: new.text,
            reference: new.reference,
            personal_message: new.personal_message,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        debug!(id = %verse.id, emotion = %verse.emotion, reference = %verse.reference, "verse added");
        self.verses.entry(verse.emotion).or_default().push(verse.clone());
        Ok(verse)
    }

    /// Insert many verses, stopping at the first invalid one
    pub fn load(&mut self, verses: impl IntoIterator<Item = NewVerse>) -> Result<usize> {
        let mut loaded = 0;
        for verse in verses {
            self.insert(verse)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Draw a verse from `category`, avoiding recently served ones.
    ///
    /// Fails with [`VerseError::NotFound`] only when the category is empty.
    pub fn random_by_category(&mut self, category: EmotionCategory) -> Result<Verse> {
        let all = match self.verses.get(&category) {
            Some(verses) if !verses.is_empty() => verses,
            _ => return Err(VerseError::NotFound(category)),
        };

        let eligible: Vec<&Verse> = all
            .iter()
            .filter(|v| !self.recency.contains(category, v.id))
            .collect();

        let pool: Vec<&Verse> = if eligible.is_empty() {
            debug!(%category, total = all.len(), "recency window saturated, using full category");
            all.iter().collect()
        } else {
            eligible
        };

        let picked = pool[self.rng.gen_range(0..pool.len())].clone();
        self.recency.record(category, picked.id);

        debug!(%category, id = %picked.id, eligible = pool.len(), "verse selected");
        Ok(picked)
    }

    /// Corpus statistics
    pub fn stats(&self) -> RepositoryStats {
        RepositoryStats {
            total: self.len(),
            by_category: EmotionCategory::ALL
                .iter()
                .map(|c| (*c, self.count(*c)))
                .collect(),
            next_id: VerseId(self.next_id),
        }
    }
}

/// Snapshot of corpus size
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryStats {
    pub total: usize,
    pub by_category: Vec<(EmotionCategory, usize)>,
    pub next_id: VerseId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> VerseRepository {
        VerseRepository::from_seed(7)
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut repo = repo();
        let a = repo.add(EmotionCategory::Happy, "a", "A 1:1", "").unwrap();
        let b = repo.add(EmotionCategory::Sad, "b", "B 1:1", "").unwrap();
        let c = repo.add(EmotionCategory::Happy, "c", "C 1:1", "").unwrap();
        assert_eq!(a.id, VerseId(1));
        assert_eq!(b.id, VerseId(2));
        assert_eq!(c.id, VerseId(3));
    }

    #[test]
    fn test_invalid_add_does_not_consume_id() {
        let mut repo = repo();
        let err = repo.add(EmotionCategory::Happy, "", "Ref 1:1", "msg").unwrap_err();
        assert!(matches!(err, VerseError::InvalidInput(_)));
        assert!(repo.is_empty());

        let verse = repo.add(EmotionCategory::Happy, "text", "Ref 1:1", "msg").unwrap();
        assert_eq!(verse.id, VerseId(1));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut repo = repo();
        for i in 0..4 {
            repo.add(EmotionCategory::Guidance, format!("v{i}"), format!("Ref {i}"), "").unwrap();
        }
        let texts: Vec<_> = repo
            .list_by_category(EmotionCategory::Guidance)
            .into_iter()
            .map(|v| v.text)
            .collect();
        assert_eq!(texts, vec!["v0", "v1", "v2", "v3"]);
        assert!(repo.list_by_category(EmotionCategory::Angry).is_empty());
    }

    #[test]
    fn test_random_on_empty_category() {
        let mut repo = repo();
        let err = repo.random_by_category(EmotionCategory::Lonely).unwrap_err();
        assert_eq!(err, VerseError::NotFound(EmotionCategory::Lonely));
        assert!(repo.recent(EmotionCategory::Lonely).is_empty());
    }

    #[test]
    fn test_random_records_pick() {
        let mut repo = repo();
        repo.add(EmotionCategory::Strength, "s", "S 1:1", "").unwrap();
        let picked = repo.random_by_category(EmotionCategory::Strength).unwrap();
        assert_eq!(repo.recent(EmotionCategory::Strength), vec![picked.id]);
    }

    #[test]
    fn test_get_and_stats() {
        let mut repo = repo();
        let verse = repo.add(EmotionCategory::Angry, "a", "A 1:1", "").unwrap();
        repo.add(EmotionCategory::Angry, "b", "B 1:1", "").unwrap();
        repo.add(EmotionCategory::Sad, "c", "C 1:1", "").unwrap();

        assert_eq!(repo.get(verse.id), Some(&verse));
        assert!(repo.get(VerseId(99)).is_none());

        let stats = repo.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.next_id, VerseId(4));
        assert_eq!(stats.by_category.len(), EmotionCategory::ALL.len());
        assert!(stats.by_category.contains(&(EmotionCategory::Angry, 2)));
        assert!(stats.by_category.contains(&(EmotionCategory::Happy, 0)));
    }

    #[test]
    fn test_load_stops_at_invalid() {
        let mut repo = repo();
        let batch = vec![
            NewVerse::new(EmotionCategory::Happy, "ok", "Ref 1:1", ""),
            NewVerse::new(EmotionCategory::Happy, "", "Ref 1:2", ""),
            NewVerse::new(EmotionCategory::Happy, "never", "Ref 1:3", ""),
        ];
        assert!(repo.load(batch).is_err());
        assert_eq!(repo.count(EmotionCategory::Happy), 1);
    }

    #[test]
    fn test_with_window() {
        let repo = repo().with_window(5);
        assert_eq!(repo.window(), 5);
    }
}
