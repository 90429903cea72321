//! Error types for verse operations

use crate::category::EmotionCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verse repository error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerseError {
    /// Category string outside the closed enumeration
    #[error("Invalid emotion category: {0}")]
    InvalidCategory(String),

    /// Missing or empty required field on insertion
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Category has no verses yet
    #[error("No verse found for emotion: {0}")]
    NotFound(EmotionCategory),
}

/// Result type for verse operations
pub type Result<T> = std::result::Result<T, VerseError>;

/// Wire-level error code shared by every transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidCategory,
    InvalidInput,
    NotFound,
    UpstreamUnavailable,
    Internal,
}

impl ErrorCode {
    /// Whether a transport should report this as a client-side error
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidCategory | Self::InvalidInput)
    }
}

impl VerseError {
    /// Check if the caller can recover (e.g. by trying another content source)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error was caused by bad caller input
    pub fn is_client_error(&self) -> bool {
        self.error_code().is_client_error()
    }

    /// Convert to a wire error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidCategory(_) => ErrorCode::InvalidCategory,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }
}
