//! Client-side offline cache
//!
//! Verses the CLI has received are kept on disk so a later request can still
//! show something when the daemon is unreachable.

use anyhow::Result;
use psalter_core::{EmotionCategory, Verse};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Per-category cache of previously served verses
pub struct VerseCache {
    entries: BTreeMap<EmotionCategory, Vec<Verse>>,
    max_per_category: usize,
    file_path: PathBuf,
}

impl VerseCache {
    pub fn new(max_per_category: usize, file_path: PathBuf) -> Self {
        Self {
            entries: BTreeMap::new(),
            max_per_category: max_per_category.max(1),
            file_path,
        }
    }

    /// Load cache from file. A missing file leaves the cache empty.
    pub async fn load(&mut self) -> Result<()> {
        if self.file_path.exists() {
            let content = tokio::fs::read_to_string(&self.file_path).await?;
            self.entries = serde_json::from_str(&content)?;
        }
        Ok(())
    }

    /// Save cache to file
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        tokio::fs::write(&self.file_path, content).await?;
        Ok(())
    }

    /// Remember a verse. Returns false if it was already cached.
    pub fn add(&mut self, verse: Verse) -> bool {
        let verses = self.entries.entry(verse.emotion).or_default();
        if verses.iter().any(|v| v.id == verse.id) {
            return false;
        }

        verses.push(verse);

        // Trim to max size
        while verses.len() > self.max_per_category {
            verses.remove(0);
        }
        true
    }

    /// Pick a cached verse for `category`
    pub fn random<R: Rng + ?Sized>(&self, category: EmotionCategory, rng: &mut R) -> Option<&Verse> {
        self.entries.get(&category)?.choose(rng)
    }

    pub fn count(&self, category: EmotionCategory) -> usize {
        self.entries.get(&category).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use psalter_core::VerseId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn verse(id: u64, emotion: EmotionCategory) -> Verse {
        Verse {
            id: VerseId(id),
            emotion,
            text: format!("text {id}"),
            reference: format!("Ref {id}"),
            personal_message: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_deduplicates() {
        let mut cache = VerseCache::new(10, PathBuf::from("/tmp/unused.json"));
        assert!(cache.add(verse(1, EmotionCategory::Happy)));
        assert!(!cache.add(verse(1, EmotionCategory::Happy)));
        assert_eq!(cache.count(EmotionCategory::Happy), 1);
    }

    #[test]
    fn test_add_trims_oldest() {
        let mut cache = VerseCache::new(2, PathBuf::from("/tmp/unused.json"));
        for id in 1..=3 {
            cache.add(verse(id, EmotionCategory::Sad));
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let picked = cache.random(EmotionCategory::Sad, &mut rng).unwrap();
            assert_ne!(picked.id, VerseId(1));
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_random_on_missing_category() {
        let cache = VerseCache::new(5, PathBuf::from("/tmp/unused.json"));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(cache.random(EmotionCategory::Angry, &mut rng).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("verses.json");

        let mut cache = VerseCache::new(5, path.clone());
        cache.add(verse(4, EmotionCategory::Lonely));
        cache.add(verse(7, EmotionCategory::Guidance));
        cache.save().await.unwrap();

        let mut reloaded = VerseCache::new(5, path);
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.count(EmotionCategory::Lonely), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let mut cache = VerseCache::new(5, dir.path().join("none.json"));
        cache.load().await.unwrap();
        assert!(cache.is_empty());
    }
}
