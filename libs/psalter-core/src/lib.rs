//! # Psalter Core
//!
//! Verse repository with an anti-repetition selection policy.
//!
//! ```text
//! caller ──► VerseRepository::random_by_category(C)
//!                 │  all      = verses in C
//!                 │  recent   = RecencyTracker window for C (last k picks)
//!                 │  eligible = all - recent, or all when that is empty
//!                 │  pick     = uniform draw from eligible
//!                 └► RecencyTracker::record(C, pick)
//! ```
//!
//! The crate does no I/O. Transports parse category strings with
//! [`EmotionCategory::from_str`](std::str::FromStr) and pass the typed value
//! in; content fetched from elsewhere goes through [`VerseRepository::add`].
//!
//! ## Usage
//!
//! ```rust
//! use psalter_core::prelude::*;
//!
//! let mut repo = VerseRepository::from_seed(42);
//! repo.load(seed_corpus(SeedVariant::Full))?;
//!
//! let category: EmotionCategory = "grateful".parse()?;
//! let verse = repo.random_by_category(category)?;
//! println!("{}", verse.quote());
//! # Ok::<(), psalter_core::VerseError>(())
//! ```

mod category;
mod error;
mod recency;
mod repository;
mod seed;
mod verse;

pub use category::*;
pub use error::*;
pub use recency::*;
pub use repository::*;
pub use seed::*;
pub use verse::*;

/// Re-export common types
pub mod prelude {
    pub use crate::category::EmotionCategory;
    pub use crate::error::{ErrorCode, VerseError};
    pub use crate::recency::RecencyTracker;
    pub use crate::repository::{RepositoryStats, VerseRepository};
    pub use crate::seed::{seed_corpus, SeedVariant};
    pub use crate::verse::{AddVerseRequest, NewVerse, Verse, VerseId};
}
