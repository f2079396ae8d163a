use serde::{Deserialize, Serialize};

use super::Book;

/// What the engine hands back per ranked book: just the fields a front-end
/// renders in a results list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub rating: f32,
}

impl From<&Book> for Recommendation {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            rating: book.rating,
        }
    }
}
