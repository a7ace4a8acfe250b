//! # kuliner
//!
//! Two small HTTP services over Palembang culinary items.
//!
//! - **Recommendation API**: given a dish name, returns the most similar dishes
//!   from a precomputed cosine similarity matrix.
//! - **Menu resolver API**: resolves a free-text menu name against a fixed
//!   menu, by exact match after normalization or by fuzzy suggestion.
//!
//! ## Quick Start
//!
//! ```bash
//! kuliner --models-dir ./models --recommend-port 7860 --menu-port 7861
//! ```
//!
//! The models directory holds `tfidf_vectorizer.json`, `tfidf_matrix.bin`,
//! `cosine_sim.bin`, `data.json` and `indices.json`. When any of them is
//! missing the recommendation API still starts and answers `503`.
//!
//! ## As a Library
//!
//! ```rust
//! use kuliner::prelude::*;
//!
//! let menu = MenuCatalog::default();
//! match menu.resolve("pempek kapl selam") {
//!     MenuMatch::Suggested { menu, score } => {
//!         assert_eq!(menu, "Pempek Kapal Selam");
//!         assert!(score >= MATCH_THRESHOLD);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `kuliner-core` - similarity matrix, item index, normalizer, fuzzy scorer, menu catalog
//! - `kuliner-storage` - artifact loading and the availability state
//! - `kuliner-api` - actix-web REST endpoints

// Re-export core types
pub use kuliner_core::{
    normalize, Catalog, Error, ItemIndex, KulinerRecord, MenuCatalog, MenuMatch,
    Recommendation, Result, SimilarityMatrix, TfidfMatrix, TfidfVectorizer,
    DEFAULT_RECOMMENDATIONS, MATCH_THRESHOLD,
};

// Re-export storage
pub use kuliner_storage::{ArtifactLoader, ArtifactSet, Availability, LoadError};

// Re-export API
pub use kuliner_api::{MenuApi, RecommendApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        normalize, ArtifactLoader, ArtifactSet, Availability, Catalog, Error, LoadError,
        MenuApi, MenuCatalog, MenuMatch, Recommendation, RecommendApi, Result,
        DEFAULT_RECOMMENDATIONS, MATCH_THRESHOLD,
    };
}

/// Fuzzy string scorers
pub mod fuzzy {
    pub use kuliner_core::fuzzy::{partial_ratio, ratio, token_set_ratio, token_sort_ratio, weighted_ratio};
}
