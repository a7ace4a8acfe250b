use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Lookup from an item's display name to its row in the similarity matrix.
///
/// Names are matched exactly: case, spacing and punctuation all count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIndex {
    positions: AHashMap<String, usize>,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index names by their position in `names`. A repeated name keeps its
    /// last position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.into(), i))
            .collect();
        Self { positions }
    }

    pub fn insert(&mut self, name: impl Into<String>, position: usize) {
        self.positions.insert(name.into(), position);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions.iter().map(|(name, &pos)| (name.as_str(), pos))
    }
}
