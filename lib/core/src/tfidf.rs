//! Term-weight artifacts produced offline alongside the similarity matrix.
//!
//! The service never refits or transforms with these; they are loaded so the
//! artifact set can be checked for consistency as a whole.

use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Fitted vocabulary and inverse document frequencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to column position in [`TfidfMatrix`].
    pub vocabulary: AHashMap<String, usize>,
    /// IDF weight per column.
    pub idf: Vec<f32>,
}

impl TfidfVectorizer {
    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            return Err(Error::InconsistentArtifacts(format!(
                "vectorizer has {} terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, &col)) = self.vocabulary.iter().find(|&(_, &col)| col >= self.idf.len()) {
            return Err(Error::InconsistentArtifacts(format!(
                "vectorizer term '{}' maps to column {} of {}",
                term,
                col,
                self.idf.len()
            )));
        }
        Ok(())
    }
}

/// Sparse item-by-term weight matrix in compressed sparse row layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TfidfMatrix {
    pub rows: usize,
    pub cols: usize,
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f32>,
}

impl TfidfMatrix {
    /// Build from per-row `(column, weight)` entries.
    pub fn from_rows(cols: usize, rows: &[Vec<(usize, f32)>]) -> Self {
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);
        for row in rows {
            for &(col, weight) in row {
                indices.push(col);
                data.push(weight);
            }
            indptr.push(indices.len());
        }
        Self {
            rows: rows.len(),
            cols,
            indptr,
            indices,
            data,
        }
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Column ids and weights stored for one row.
    pub fn row(&self, index: usize) -> Option<(&[usize], &[f32])> {
        let start = *self.indptr.get(index)?;
        let end = *self.indptr.get(index + 1)?;
        Some((self.indices.get(start..end)?, self.data.get(start..end)?))
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| -> Result<()> { Err(Error::InconsistentArtifacts(msg)) };

        if self.indptr.len() != self.rows + 1 {
            return fail(format!(
                "tfidf matrix indptr has {} entries for {} rows",
                self.indptr.len(),
                self.rows
            ));
        }
        if self.indices.len() != self.data.len() {
            return fail(format!(
                "tfidf matrix has {} column ids but {} weights",
                self.indices.len(),
                self.data.len()
            ));
        }
        if self.indptr.first() != Some(&0) || self.indptr.last() != Some(&self.data.len()) {
            return fail("tfidf matrix indptr does not span the stored weights".to_string());
        }
        if self.indptr.windows(2).any(|w| w[0] > w[1]) {
            return fail("tfidf matrix indptr is not monotone".to_string());
        }
        if let Some(&col) = self.indices.iter().find(|&&col| col >= self.cols) {
            return fail(format!(
                "tfidf matrix references column {} of {}",
                col, self.cols
            ));
        }
        Ok(())
    }
}
