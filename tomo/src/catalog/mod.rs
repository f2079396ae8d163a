pub mod loader;

use std::collections::BTreeSet;

use crate::models::Book;

/// Stable position of a book within the loaded catalog.
///
/// This is the only key ever used into the similarity matrix. Keeping it a
/// distinct type stops a position within some filtered subsequence from being
/// mistaken for a matrix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookIdx(pub usize);

impl std::fmt::Display for BookIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-memory book catalog. Loaded once, read-only afterwards.
///
/// Invariant: catalog order must match the row/column order used when the
/// similarity matrix was built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, idx: BookIdx) -> Option<&Book> {
        self.books.get(idx.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookIdx, &Book)> {
        self.books.iter().enumerate().map(|(i, b)| (BookIdx(i), b))
    }

    /// Union of every book's genre tags, sorted and deduplicated.
    pub fn all_genres(&self) -> BTreeSet<String> {
        self.books
            .iter()
            .flat_map(|book| book.genres.iter().cloned())
            .collect()
    }

    /// Global catalog indices of all books tagged with `genre`, in catalog
    /// order. Exact, case-sensitive match. An empty result is not an error;
    /// it means the genre has no books at all.
    pub fn books_in_genre(&self, genre: &str) -> Vec<BookIdx> {
        self.iter()
            .filter(|(_, book)| book.has_genre(genre))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Global catalog index of the book titled `title` among `candidates`.
    ///
    /// Always returns the catalog-wide index, never the position within
    /// `candidates`: similarity rows are keyed by catalog position.
    pub fn index_of_title(&self, candidates: &[BookIdx], title: &str) -> Option<BookIdx> {
        candidates
            .iter()
            .copied()
            .find(|&idx| self.get(idx).is_some_and(|book| book.title == title))
    }
}
