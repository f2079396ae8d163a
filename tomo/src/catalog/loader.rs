//! CSV catalog loading.
//!
//! The upstream dataset pipeline emits one row per book with headers
//! `Book_Name`, `Author`, `Rating`, `Genres`, where `Genres` holds a
//! bracketed quoted list (e.g. `['Fiction', 'Classics']`). Row order is
//! significant: it must match the similarity matrix row order.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Book;

use super::Catalog;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "Book_Name")]
    title: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Rating")]
    rating: f32,
    #[serde(rename = "Genres")]
    genres: String,
}

/// Load a catalog from a CSV file, preserving row order.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut books = Vec::new();
    let mut seen_titles = HashSet::new();

    for record in reader.deserialize() {
        let record: CatalogRecord = record?;
        if !seen_titles.insert(record.title.clone()) {
            warn!(title = record.title.as_str(), "Duplicate title in catalog; lookups resolve to the first occurrence");
        }
        books.push(Book::new(
            record.title,
            record.author,
            record.rating,
            parse_genre_list(&record.genres),
        ));
    }

    info!(books = books.len(), path = %path.display(), "Catalog loaded");
    Ok(Catalog::new(books))
}

/// Parse the `Genres` column: a bracketed list of quoted tags, with single or
/// double quotes. A bare comma-separated list is accepted too. Commas inside
/// quotes do not split.
pub(crate) fn parse_genre_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut genres = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in inner.chars() {
        match (ch, quote) {
            ('\'' | '"', None) => quote = Some(ch),
            (c, Some(q)) if c == q => quote = None,
            (',', None) => {
                push_genre(&mut genres, &mut current);
            }
            (c, _) => current.push(c),
        }
    }
    push_genre(&mut genres, &mut current);

    genres
}

fn push_genre(genres: &mut Vec<String>, current: &mut String) {
    let tag = current.trim();
    if !tag.is_empty() {
        genres.push(tag.to_string());
    }
    current.clear();
}
