//! Verse service
//!
//! Binds the shared repository to the string-typed operations transports
//! expose, and falls back to the upstream source when a category is empty.

use crate::config::{load_corpus_file, PsalterConfig};
use crate::upstream::{BibleApiClient, VerseSource};
use anyhow::Result as AnyResult;
use psalter_core::{
    seed_corpus, AddVerseRequest, EmotionCategory, RepositoryStats, Result, Verse, VerseError,
    VerseRepository,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Category description for listings
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: EmotionCategory,
    pub title: &'static str,
    pub fixed: bool,
    pub count: usize,
}

#[derive(Clone)]
pub struct VerseService {
    repository: Arc<RwLock<VerseRepository>>,
    upstream: Option<Arc<dyn VerseSource>>,
}

impl VerseService {
    pub fn new(repository: VerseRepository, upstream: Option<Arc<dyn VerseSource>>) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
            upstream,
        }
    }

    /// Build the repository, corpus and upstream client described by `config`
    pub fn from_config(config: &PsalterConfig) -> AnyResult<Self> {
        let mut window = config.selection.recency_window;
        if window == 0 {
            warn!("selection.recency_window must be at least 1, using 1");
            window = 1;
        }

        let repository = match config.selection.rng_seed {
            Some(seed) => {
                info!("Using fixed selection seed {}", seed);
                VerseRepository::from_seed(seed)
            }
            None => VerseRepository::new(),
        };
        let mut repository = repository.with_window(window);

        let seeded = repository.load(seed_corpus(config.corpus.seed))?;
        info!("Loaded {} seed verses ({:?})", seeded, config.corpus.seed);

        for path in &config.corpus.extra_files {
            let verses = load_corpus_file(path)?;
            let loaded = repository.load(verses)?;
            info!("Loaded {} verses from {:?}", loaded, path);
        }

        let upstream: Option<Arc<dyn VerseSource>> = if config.upstream.enabled {
            Some(Arc::new(BibleApiClient::new(&config.upstream)?) as Arc<dyn VerseSource>)
        } else {
            info!("Upstream verse source disabled");
            None
        };

        Ok(Self::new(repository, upstream))
    }

    /// Random verse for `emotion`, fetching upstream when the category is empty
    pub async fn random(&self, emotion: &str) -> Result<Verse> {
        let category: EmotionCategory = emotion.parse()?;

        match self.repository.write().await.random_by_category(category) {
            Err(VerseError::NotFound(_)) => {}
            other => return other,
        }

        let Some(source) = &self.upstream else {
            return Err(VerseError::NotFound(category));
        };

        // Fetch without holding the lock.
        let fetched = match source.fetch(category).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!("Upstream fetch for {} failed: {}", category, e);
                return Err(VerseError::NotFound(category));
            }
        };

        let mut repository = self.repository.write().await;
        let stored = repository.add(
            category,
            fetched.text,
            fetched.reference,
            category.default_message(),
        )?;
        info!("Stored upstream verse {} for {}", stored.id, category);

        repository.random_by_category(category)
    }

    pub async fn add(&self, request: AddVerseRequest) -> Result<Verse> {
        let verse = request.validate()?;
        self.repository.write().await.insert(verse)
    }

    pub async fn list(&self, emotion: &str) -> Result<Vec<Verse>> {
        let category: EmotionCategory = emotion.parse()?;
        Ok(self.repository.read().await.list_by_category(category))
    }

    pub async fn stats(&self) -> RepositoryStats {
        self.repository.read().await.stats()
    }

    pub async fn categories(&self) -> Vec<CategoryInfo> {
        let repository = self.repository.read().await;
        EmotionCategory::ALL
            .iter()
            .map(|c| CategoryInfo {
                name: *c,
                title: c.title(),
                fixed: c.is_fixed(),
                count: repository.count(*c),
            })
            .collect()
    }
}
