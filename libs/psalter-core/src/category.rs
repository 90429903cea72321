//! Emotion categories
//!
//! The category set is closed. Strings arriving from a transport are parsed
//! once through [`FromStr`]; everything past that boundary works with the
//! typed enum.

use crate::error::VerseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotion category used to partition the verse corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Anxious,
    Happy,
    Sad,
    Grateful,
    Strength,
    Lonely,
    Guidance,
    Angry,
    /// Catch-all/crisis category with fixed content
    Anything,
}

impl EmotionCategory {
    /// Every category, in display order
    pub const ALL: [EmotionCategory; 9] = [
        Self::Anxious,
        Self::Happy,
        Self::Sad,
        Self::Grateful,
        Self::Strength,
        Self::Lonely,
        Self::Guidance,
        Self::Angry,
        Self::Anything,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Grateful => "grateful",
            Self::Strength => "strength",
            Self::Lonely => "lonely",
            Self::Guidance => "guidance",
            Self::Angry => "angry",
            Self::Anything => "anything",
        }
    }

    /// Human-facing title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Anxious => "When you're anxious",
            Self::Happy => "When you're happy",
            Self::Sad => "When you're sad",
            Self::Grateful => "When you're grateful",
            Self::Strength => "When you need strength",
            Self::Lonely => "When you're lonely",
            Self::Guidance => "When you need guidance",
            Self::Angry => "When you're angry",
            Self::Anything => "Anything else",
        }
    }

    /// Personal message attached to verses that arrive without one
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Anxious => "Your anxious thoughts don't define your future. God holds tomorrow in His hands, and He invites you to rest in His peace today.",
            Self::Happy => "Your joy is a gift from God. Let it shine brightly and be a blessing to others around you today.",
            Self::Sad => "Your tears are precious to God. He sees every sorrow and collects every tear. You are not alone in your pain.",
            Self::Grateful => "Gratitude transforms our perspective and opens our hearts to see God's goodness in every circumstance.",
            Self::Strength => "Your strength doesn't come from within alone - it flows from the infinite power of God who loves you.",
            Self::Lonely => "Even when you feel completely alone, you are held in the arms of a God who will never abandon you.",
            Self::Guidance => "When the path ahead seems unclear, remember that God sees the entire journey. Trust His guidance.",
            Self::Angry => "Your anger is valid, but it doesn't have to control you. God offers you peace and wisdom.",
            Self::Anything => "Every emotion you feel is valid. God sees your struggles and walks with you through every season of life.",
        }
    }

    /// Whether callers may skip randomization for this category.
    ///
    /// `anything` always serves the same verse.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Anything)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| VerseError::InvalidCategory(s.to_string()))
    }
}
