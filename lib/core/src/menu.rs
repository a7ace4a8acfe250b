//! Menu-name resolution against a small fixed catalog.
//!
//! A query is normalized and looked up exactly first; only when that misses
//! is every catalog name scored with [`weighted_ratio`] and the best one
//! offered as a suggestion, provided it clears [`MATCH_THRESHOLD`].

use crate::fuzzy::weighted_ratio;
use crate::normalize::normalize;
use ahash::AHashMap;

/// Minimum fuzzy score for a suggestion.
pub const MATCH_THRESHOLD: u8 = 60;

/// Menu names served when no other catalog is configured.
pub const DEFAULT_MENU: [&str; 5] = [
    "Pempek Adaan",
    "Pempek Lenjer",
    "Pempek Kapal Selam",
    "Pempek Keriting",
    "Pempek Kulit",
];

/// Outcome of resolving a free-text menu name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMatch {
    /// The normalized query names a catalog entry.
    Found { menu: String },
    /// No exact hit, but `menu` scored at least the threshold.
    Suggested { menu: String, score: u8 },
    /// Nothing close enough.
    NotFound,
}

#[derive(Debug, Clone)]
struct MenuEntry {
    normalized: String,
    original: String,
}

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
    by_normalized: AHashMap<String, usize>,
    threshold: u8,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MENU)
    }
}

impl MenuCatalog {
    /// Build the normalized lookup once. Names that normalize to the same key
    /// collapse into one entry that resolves to the last of them.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<MenuEntry> = Vec::new();
        let mut by_normalized: AHashMap<String, usize> = AHashMap::new();

        for name in names {
            let original = name.into();
            let normalized = normalize(&original);
            match by_normalized.get(&normalized) {
                Some(&pos) => entries[pos].original = original,
                None => {
                    by_normalized.insert(normalized.clone(), entries.len());
                    entries.push(MenuEntry { normalized, original });
                }
            }
        }

        Self {
            entries,
            by_normalized,
            threshold: MATCH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.original.as_str())
    }

    pub fn resolve(&self, query: &str) -> MenuMatch {
        let normalized = normalize(query);

        if let Some(&pos) = self.by_normalized.get(&normalized) {
            return MenuMatch::Found {
                menu: self.entries[pos].original.clone(),
            };
        }

        match self.best_match(&normalized) {
            Some((entry, score)) if score >= self.threshold => MenuMatch::Suggested {
                menu: entry.original.clone(),
                score,
            },
            _ => MenuMatch::NotFound,
        }
    }

    /// Highest-scoring entry; the earliest one wins a tie.
    fn best_match(&self, normalized_query: &str) -> Option<(&MenuEntry, u8)> {
        let mut best: Option<(&MenuEntry, u8)> = None;
        for entry in &self.entries {
            let score = weighted_ratio(normalized_query, &entry.normalized);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((entry, score));
            }
        }
        best
    }
}
