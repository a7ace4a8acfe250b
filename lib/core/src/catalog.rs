use crate::{Error, ItemIndex, KulinerRecord, Result, SimilarityMatrix, TfidfMatrix, TfidfVectorizer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Recommendations returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// A recommended item and its similarity to the query item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub nama_kuliner: String,
    pub similarity_score: f32,
}

/// The full set of precomputed artifacts, checked for consistency.
///
/// Built once at startup and shared read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    vectorizer: TfidfVectorizer,
    tfidf: TfidfMatrix,
    similarity: SimilarityMatrix,
    records: Vec<KulinerRecord>,
    index: ItemIndex,
}

impl Catalog {
    /// Assemble a catalog, rejecting artifact sets whose cardinalities
    /// disagree.
    pub fn new(
        vectorizer: TfidfVectorizer,
        tfidf: TfidfMatrix,
        similarity: SimilarityMatrix,
        records: Vec<KulinerRecord>,
        index: ItemIndex,
    ) -> Result<Self> {
        vectorizer.validate()?;
        tfidf.validate()?;
        similarity.validate()?;

        let size = similarity.size();
        if records.len() != size {
            return Err(Error::InconsistentArtifacts(format!(
                "{} records for a similarity matrix of size {}",
                records.len(),
                size
            )));
        }
        if tfidf.rows != size {
            return Err(Error::InconsistentArtifacts(format!(
                "tfidf matrix has {} rows for {} items",
                tfidf.rows, size
            )));
        }
        if tfidf.cols != vectorizer.vocabulary_len() {
            return Err(Error::InconsistentArtifacts(format!(
                "tfidf matrix has {} columns for a vocabulary of {}",
                tfidf.cols,
                vectorizer.vocabulary_len()
            )));
        }
        if index.len() != size {
            return Err(Error::InconsistentArtifacts(format!(
                "index has {} names for a similarity matrix of size {}",
                index.len(),
                size
            )));
        }
        if let Some((name, pos)) = index.iter().find(|&(_, pos)| pos >= size) {
            return Err(Error::InconsistentArtifacts(format!(
                "index maps '{}' to row {} of {}",
                name, pos, size
            )));
        }

        Ok(Self {
            vectorizer,
            tfidf,
            similarity,
            records,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.similarity.size()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.similarity.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn records(&self) -> &[KulinerRecord] {
        &self.records
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn index(&self) -> &ItemIndex {
        &self.index
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn tfidf(&self) -> &TfidfMatrix {
        &self.tfidf
    }

    /// Items most similar to `name`, best first.
    ///
    /// The query item itself is never part of the result. Equal scores keep
    /// ascending matrix order and NaN scores rank last. At most `count`
    /// items are returned, fewer when the catalog is smaller.
    pub fn recommend(&self, name: &str, count: usize) -> Result<Vec<Recommendation>> {
        if count == 0 {
            return Err(Error::InvalidCount(count));
        }

        let position = self
            .index
            .get(name)
            .ok_or_else(|| Error::ItemNotFound(name.to_string()))?;

        let row = self.similarity.row(position).ok_or_else(|| {
            Error::InconsistentArtifacts(format!("no similarity row for '{}'", name))
        })?;

        let ranked = rank_row(row, position, count);

        Ok(ranked
            .into_iter()
            .map(|(i, score)| Recommendation {
                nama_kuliner: self.records[i].name.clone(),
                similarity_score: score,
            })
            .collect())
    }
}

/// Rank the columns of `row` by descending score, skipping `exclude`, and
/// keep the first `limit`.
pub fn rank_row(row: &[f32], exclude: usize, limit: usize) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| i != exclude)
        .collect();

    scored.sort_by(|a, b| compare_scores(b.1, a.1).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(limit);
    scored
}

#[inline]
fn compare_scores(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.total_cmp(&b),
    }
}
