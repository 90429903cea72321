//! Psalter configuration

use anyhow::{Context, Result};
use psalter_core::{AddVerseRequest, NewVerse, SeedVariant, DEFAULT_WINDOW};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PsalterConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Picks remembered per category
    #[serde(default = "default_window")]
    pub recency_window: usize,
    /// Fixed generator seed for reproducible selection
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            recency_window: default_window(),
            rng_seed: None,
        }
    }
}

fn default_window() -> usize { DEFAULT_WINDOW }

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusConfig {
    #[serde(default)]
    pub seed: SeedVariant,
    /// YAML files holding lists of verses to load after the seed
    #[serde(default)]
    pub extra_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
        }
    }
}

fn default_base_url() -> String { "https://bible-api.com".to_string() }
fn default_timeout() -> u64 { 10_000 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
    #[serde(default = "default_max_per_category")]
    pub max_per_category: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
            max_per_category: default_max_per_category(),
        }
    }
}

fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("psalter")
        .join("verses.json")
}

fn default_max_per_category() -> usize { 50 }

fn default_true() -> bool { true }

pub fn load_config(path: &Path) -> Result<PsalterConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(PsalterConfig::default())
    }
}

/// Read a YAML list of verses, validating every entry
pub fn load_corpus_file(path: &Path) -> Result<Vec<NewVerse>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus file {}", path.display()))?;
    let requests: Vec<AddVerseRequest> = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing corpus file {}", path.display()))?;

    requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            request
                .validate()
                .with_context(|| format!("{} entry {}", path.display(), i))
        })
        .collect()
}
