//! Upstream verse source
//!
//! Consulted only when a category has no stored verses. The fetch happens
//! outside the repository lock; the result is stored through the normal
//! `add` path.

use crate::config::UpstreamConfig;
use async_trait::async_trait;
use psalter_core::EmotionCategory;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const FALLBACK_TEXT: &str = "The Lord your God is with you, the Mighty Warrior who saves.";
const FALLBACK_REFERENCE: &str = "Zephaniah 3:17";

/// Upstream fetch errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),
}

/// Verse contents returned by an upstream source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedVerse {
    pub text: String,
    pub reference: String,
}

/// Source of verses for categories the repository cannot serve
#[async_trait]
pub trait VerseSource: Send + Sync {
    async fn fetch(&self, category: EmotionCategory) -> Result<FetchedVerse, UpstreamError>;
}

/// Search phrase sent upstream for each category
pub fn search_query(category: EmotionCategory) -> &'static str {
    match category {
        EmotionCategory::Anxious => "anxiety worry peace",
        EmotionCategory::Happy => "joy rejoice glad",
        EmotionCategory::Sad => "comfort sorrow weep",
        EmotionCategory::Grateful => "thanks thanksgiving praise",
        EmotionCategory::Strength => "strength power mighty",
        EmotionCategory::Lonely => "alone presence with",
        EmotionCategory::Guidance => "guide path way",
        EmotionCategory::Angry => "anger patience slow",
        EmotionCategory::Anything => "love care comfort",
    }
}

#[derive(Debug, Deserialize)]
struct BibleApiResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    reference: Option<String>,
}

impl From<BibleApiResponse> for FetchedVerse {
    fn from(response: BibleApiResponse) -> Self {
        let non_blank = |s: Option<String>| {
            s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        Self {
            text: non_blank(response.text).unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            reference: non_blank(response.reference)
                .unwrap_or_else(|| FALLBACK_REFERENCE.to_string()),
        }
    }
}

/// bible-api.com client
pub struct BibleApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BibleApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, category: EmotionCategory) -> String {
        format!("{}/{}", self.base_url, search_query(category))
    }
}

#[async_trait]
impl VerseSource for BibleApiClient {
    async fn fetch(&self, category: EmotionCategory) -> Result<FetchedVerse, UpstreamError> {
        let url = self.url_for(category);
        debug!(%category, %url, "fetching upstream verse");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        let body: BibleApiResponse = response.json().await?;
        Ok(body.into())
    }
}
