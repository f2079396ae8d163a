use std::sync::Arc;

use tracing::debug;

use crate::catalog::{loader, BookIdx, Catalog};
use crate::config::Config;
use crate::error::{RecommendError, Result, TomoError};
use crate::models::Recommendation;
use crate::similarity::{self, SimilarityMatrix};

/// Ranks books within a genre, either by similarity to a chosen base book or
/// by rating. All state is read-only and Arc-shared, so clones serve
/// concurrent sessions without locking.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    similarity: Arc<SimilarityMatrix>,
}

impl Recommender {
    /// Wire the engine from an already-loaded catalog and matrix.
    ///
    /// Fails if the matrix size does not match the catalog size: similarity
    /// rows are keyed by catalog position, so a size mismatch means the two
    /// were not built from the same ordering.
    pub fn new(catalog: Arc<Catalog>, similarity: Arc<SimilarityMatrix>) -> Result<Self> {
        if similarity.len() != catalog.len() {
            return Err(TomoError::Validation(format!(
                "similarity matrix covers {} books but catalog has {}",
                similarity.len(),
                catalog.len()
            )));
        }
        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Load catalog and matrix from the configured paths and wire the engine.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = loader::load_catalog(&config.data.catalog_path)?;
        let matrix = similarity::load_matrix(&config.data.similarity_path)?;
        Self::new(Arc::new(catalog), Arc::new(matrix))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend up to `top_n` books in `genre`.
    ///
    /// With a `base_title`, candidates are ranked by their precomputed
    /// similarity to that book and the base book itself is excluded from the
    /// output by index. Without one, candidates are ranked by rating
    /// descending. Both sorts are stable: equal scores keep catalog order.
    ///
    /// Pure: identical inputs against the same loaded data yield identical
    /// output. Both failure kinds are expected outcomes for the caller to
    /// surface, never fatal.
    pub fn recommend(
        &self,
        genre: &str,
        top_n: usize,
        base_title: Option<&str>,
    ) -> std::result::Result<Vec<Recommendation>, RecommendError> {
        let candidates = self.catalog.books_in_genre(genre);
        if candidates.is_empty() {
            return Err(RecommendError::GenreNotFound(genre.to_string()));
        }

        let ranked = match base_title {
            Some(title) => {
                let base = self
                    .catalog
                    .index_of_title(&candidates, title)
                    .ok_or_else(|| RecommendError::TitleNotInGenre {
                        title: title.to_string(),
                        genre: genre.to_string(),
                    })?;
                self.rank_by_similarity(base, candidates)
            }
            None => self.rank_by_rating(candidates),
        };

        debug!(
            genre = genre,
            base_title = base_title.unwrap_or(""),
            results = ranked.len().min(top_n),
            "Recommendation computed"
        );

        Ok(ranked
            .into_iter()
            .take(top_n)
            .filter_map(|idx| self.catalog.get(idx).map(Recommendation::from))
            .collect())
    }

    /// Rating descending; stable, so equal ratings keep catalog order.
    fn rank_by_rating(&self, mut candidates: Vec<BookIdx>) -> Vec<BookIdx> {
        candidates.sort_by(|&a, &b| {
            let ra = self.catalog.get(a).map(|book| book.rating).unwrap_or(f32::MIN);
            let rb = self.catalog.get(b).map(|book| book.rating).unwrap_or(f32::MIN);
            rb.total_cmp(&ra)
        });
        candidates
    }

    /// Similarity to `base` descending, restricted to the given genre
    /// candidates. The base book is dropped by index before sorting rather
    /// than by trimming the top of the sorted list, so the output is correct
    /// even when the matrix does not score a book as maximally similar to
    /// itself.
    fn rank_by_similarity(&self, base: BookIdx, mut candidates: Vec<BookIdx>) -> Vec<BookIdx> {
        candidates.retain(|&idx| idx != base);
        candidates.sort_by(|&a, &b| {
            self.similarity
                .score(base, b)
                .total_cmp(&self.similarity.score(base, a))
        });
        candidates
    }
}
