use serde::{Deserialize, Serialize};

/// A single catalog entry. Immutable once loaded; the title is assumed unique
/// within the catalog and is the key used for lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Average reader rating, higher is better.
    pub rating: f32,
    /// Genre tags in their original order. Order only matters for display;
    /// membership checks compare exact strings.
    pub genres: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        rating: f32,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating,
            genres,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
