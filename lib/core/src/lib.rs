//! # kuliner Core
//!
//! Core library for the kuliner services.
//!
//! This crate provides the in-memory data and lookups both services serve from:
//!
//! - [`Catalog`] - Precomputed artifacts with top-N similarity recommendations
//! - [`SimilarityMatrix`] - Square item-by-item cosine similarity scores
//! - [`ItemIndex`] - Display name to matrix position
//! - [`MenuCatalog`] - Exact and fuzzy menu-name resolution
//! - [`normalize`] - Case- and punctuation-insensitive text canonicalization
//!
//! ## Example
//!
//! ```rust
//! use kuliner_core::{MenuCatalog, MenuMatch};
//!
//! let menu = MenuCatalog::default();
//! assert_eq!(
//!     menu.resolve("pempek adaan"),
//!     MenuMatch::Found { menu: "Pempek Adaan".to_string() }
//! );
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod matrix;
pub mod menu;
pub mod normalize;
pub mod record;
pub mod tfidf;

/// Weighted-ratio fuzzy string scoring on a 0..=100 scale
pub mod fuzzy;

pub use catalog::{rank_row, Catalog, Recommendation, DEFAULT_RECOMMENDATIONS};
pub use error::{Error, Result};
pub use index::ItemIndex;
pub use matrix::SimilarityMatrix;
pub use menu::{MenuCatalog, MenuMatch, DEFAULT_MENU, MATCH_THRESHOLD};
pub use normalize::normalize;
pub use record::{KulinerRecord, NAME_COLUMN};
pub use tfidf::{TfidfMatrix, TfidfVectorizer};
