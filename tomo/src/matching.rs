//! Fuzzy resolution of free-text genre queries to canonical genre names.
//!
//! The ranking core works on exact genre strings only; this seam lets a
//! front-end turn "sci fi" into "SciFi" first. The metric is pluggable so the
//! engine never depends on one particular string-similarity algorithm.

use std::collections::BTreeSet;

use tracing::debug;

/// Strategy for matching a free-text query against the set of known genres.
pub trait GenreMatcher {
    /// Close matches for `query`, best first. May be empty.
    fn close_matches(&self, query: &str, genres: &BTreeSet<String>) -> Vec<String>;
}

/// Edit-distance matcher over lowercased strings.
///
/// Keeps genres whose normalized Levenshtein similarity to the query is at
/// least `cutoff`, ranked by similarity descending; equal scores fall back to
/// alphabetical order. Defaults mirror the interactive front-end this engine
/// was built for: up to 10 suggestions, permissive 0.3 cutoff.
#[derive(Debug, Clone)]
pub struct NormalizedLevenshteinMatcher {
    pub cutoff: f64,
    pub limit: usize,
}

impl Default for NormalizedLevenshteinMatcher {
    fn default() -> Self {
        Self {
            cutoff: 0.3,
            limit: 10,
        }
    }
}

impl NormalizedLevenshteinMatcher {
    pub fn new(cutoff: f64, limit: usize) -> Self {
        Self { cutoff, limit }
    }
}

impl GenreMatcher for NormalizedLevenshteinMatcher {
    fn close_matches(&self, query: &str, genres: &BTreeSet<String>) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        // BTreeSet iteration is alphabetical, and the sort is stable, so
        // equal scores keep that order.
        let mut scored: Vec<(f64, &String)> = genres
            .iter()
            .map(|genre| {
                let score = strsim::normalized_levenshtein(&needle, &genre.to_lowercase());
                (score, genre)
            })
            .filter(|(score, _)| *score >= self.cutoff)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        debug!(
            query = query,
            candidates = scored.len(),
            "Genre query matched"
        );

        scored
            .into_iter()
            .take(self.limit)
            .map(|(_, genre)| genre.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn genres(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exact_match_ranks_first() {
        let matcher = NormalizedLevenshteinMatcher::default();
        let out = matcher.close_matches("Romance", &genres(&["Romance", "Fiction", "SciFi"]));
        assert_eq!(out.first().map(String::as_str), Some("Romance"));
    }

    #[test]
    fn typo_still_resolves() {
        let matcher = NormalizedLevenshteinMatcher::default();
        let out = matcher.close_matches("romanse", &genres(&["Romance", "SciFi"]));
        assert_eq!(out.first().map(String::as_str), Some("Romance"));
    }

    #[test]
    fn match_is_case_insensitive() {
        let matcher = NormalizedLevenshteinMatcher::default();
        let out = matcher.close_matches("SCIFI", &genres(&["SciFi", "Romance"]));
        assert_eq!(out.first().map(String::as_str), Some("SciFi"));
    }

    #[test]
    fn cutoff_drops_unrelated_genres() {
        let matcher = NormalizedLevenshteinMatcher::new(0.6, 10);
        let out = matcher.close_matches("Romance", &genres(&["Romance", "Horror", "Poetry"]));
        assert_eq!(out, vec!["Romance"]);
    }

    #[test]
    fn limit_caps_suggestions() {
        let matcher = NormalizedLevenshteinMatcher::new(0.0, 2);
        let out = matcher.close_matches("Fantasy", &genres(&["Fantasy", "Fiction", "Folk", "Noir"]));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let matcher = NormalizedLevenshteinMatcher::default();
        assert!(matcher.close_matches("  ", &genres(&["Romance"])).is_empty());
    }
}
