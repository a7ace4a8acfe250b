use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Square, row-major matrix of pairwise item similarities.
///
/// Entry `(i, j)` is the cosine similarity between items `i` and `j`, in
/// `[0.0, 1.0]`. The diagonal holds self-similarity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn new(size: usize, scores: Vec<f32>) -> Result<Self> {
        let matrix = Self { size, scores };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Build from explicit rows; every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InconsistentArtifacts(format!(
                    "similarity row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            scores.extend(row);
        }
        Ok(Self { size, scores })
    }

    /// Check that the backing buffer holds exactly `size * size` scores.
    ///
    /// Deserialized matrices skip [`SimilarityMatrix::new`], so loaders call
    /// this explicitly.
    pub fn validate(&self) -> Result<()> {
        let expected = self.size.checked_mul(self.size).ok_or_else(|| {
            Error::InconsistentArtifacts(format!("similarity matrix size {} overflows", self.size))
        })?;
        if self.scores.len() != expected {
            return Err(Error::InconsistentArtifacts(format!(
                "similarity matrix of size {} holds {} scores, expected {}",
                self.size,
                self.scores.len(),
                expected
            )));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        self.scores.get(start..start + self.size)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.row(row).and_then(|r| r.get(col).copied())
    }
}
