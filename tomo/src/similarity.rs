//! Precomputed pairwise book similarity.
//!
//! The matrix is produced offline by the dataset pipeline and supplied as an
//! opaque numeric lookup; this crate never computes similarity scores itself.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::catalog::BookIdx;
use crate::error::{Result, TomoError};

/// Square read-only matrix where entry `(i, j)` scores how similar book `i`
/// is to book `j`. Row and column order is the catalog order at build time.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Build from raw rows, rejecting non-square input.
    pub fn from_rows(scores: Vec<Vec<f32>>) -> Result<Self> {
        let n = scores.len();
        if let Some(row) = scores.iter().position(|r| r.len() != n) {
            return Err(TomoError::Validation(format!(
                "similarity matrix is not square: row {} has {} entries, expected {}",
                row,
                scores[row].len(),
                n
            )));
        }
        Ok(Self { scores })
    }

    /// Number of books the matrix covers.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Similarity of book `a` to book `b`. Panics on out-of-range indices;
    /// the recommender validates matrix size against the catalog up front,
    /// so any `BookIdx` drawn from that catalog is in range.
    pub fn score(&self, a: BookIdx, b: BookIdx) -> f32 {
        self.scores[a.0][b.0]
    }
}

/// Load a similarity matrix from a JSON file holding a nested array of
/// numbers (`[[1.0, 0.4], [0.4, 1.0]]`).
pub fn load_matrix(path: impl AsRef<Path>) -> Result<SimilarityMatrix> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
    let matrix = SimilarityMatrix::from_rows(rows)?;
    info!(books = matrix.len(), path = %path.display(), "Similarity matrix loaded");
    Ok(matrix)
}
