//! End-to-end flow: load a catalog CSV and a similarity matrix from disk,
//! resolve a fuzzy genre query, and rank recommendations.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use tomo::config::{Config, DataConfig, RecommendConfig};
use tomo::{
    Catalog, GenreMatcher, NormalizedLevenshteinMatcher, RecommendError, Recommender,
    SimilarityMatrix,
};

fn write_fixtures(dir: &TempDir) -> Config {
    let catalog_path = dir.path().join("catalog.csv");
    let similarity_path = dir.path().join("similarity.json");

    fs::write(
        &catalog_path,
        "Book_Name,Author,Rating,Genres\n\
         Dune,Herbert,4.8,\"['SciFi', 'Classics']\"\n\
         Foundation,Asimov,4.7,\"['SciFi']\"\n\
         Emma,Austen,4.5,\"['Romance', 'Classics']\"\n\
         Hyperion,Simmons,4.6,\"['SciFi']\"\n",
    )
    .expect("Failed to write catalog fixture");

    fs::write(
        &similarity_path,
        "[[1.0, 0.7, 0.1, 0.5],\n\
          [0.7, 1.0, 0.2, 0.4],\n\
          [0.1, 0.2, 1.0, 0.1],\n\
          [0.5, 0.4, 0.1, 1.0]]",
    )
    .expect("Failed to write similarity fixture");

    Config {
        data: DataConfig {
            catalog_path: catalog_path.to_string_lossy().into_owned(),
            similarity_path: similarity_path.to_string_lossy().into_owned(),
        },
        recommend: RecommendConfig {
            default_top_n: 10,
            match_cutoff: 0.3,
            match_limit: 10,
        },
    }
}

#[test]
fn load_and_recommend_by_rating() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_fixtures(&dir);

    let engine = Recommender::from_config(&config).expect("Failed to wire engine");
    let recs = engine
        .recommend("SciFi", config.recommend.default_top_n, None)
        .expect("SciFi should have books");

    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Foundation", "Hyperion"]);
}

#[test]
fn load_and_recommend_by_similarity() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_fixtures(&dir);

    let engine = Recommender::from_config(&config).expect("Failed to wire engine");
    let recs = engine
        .recommend("SciFi", 2, Some("Dune"))
        .expect("Dune is a SciFi book");

    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Foundation", "Hyperion"]);
}

#[test]
fn fuzzy_query_resolves_then_recommends() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_fixtures(&dir);

    let engine = Recommender::from_config(&config).expect("Failed to wire engine");
    let matcher =
        NormalizedLevenshteinMatcher::new(config.recommend.match_cutoff, config.recommend.match_limit);

    // A front-end resolves the free-text query to a canonical genre first.
    let suggestions = matcher.close_matches("romanc", &engine.catalog().all_genres());
    let genre = suggestions.first().expect("Query should match a genre");
    assert_eq!(genre.as_str(), "Romance");

    let recs = engine.recommend(genre, 5, None).expect("Genre came from the catalog");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Emma");
}

#[test]
fn failures_are_typed_not_fatal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_fixtures(&dir);

    let engine = Recommender::from_config(&config).expect("Failed to wire engine");

    assert_eq!(
        engine.recommend("Mystery", 5, None).unwrap_err(),
        RecommendError::GenreNotFound("Mystery".into())
    );
    assert_eq!(
        engine.recommend("SciFi", 5, Some("Emma")).unwrap_err(),
        RecommendError::TitleNotInGenre {
            title: "Emma".into(),
            genre: "SciFi".into(),
        }
    );
}

#[test]
fn mismatched_fixtures_fail_wiring() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = write_fixtures(&dir);

    let short_matrix = dir.path().join("short.json");
    fs::write(&short_matrix, "[[1.0, 0.2], [0.2, 1.0]]").expect("Failed to write matrix");
    config.data.similarity_path = short_matrix.to_string_lossy().into_owned();

    assert!(Recommender::from_config(&config).is_err());
}

#[test]
fn engine_clones_share_loaded_state() {
    let catalog = Arc::new(Catalog::new(vec![tomo::Book::new(
        "Emma",
        "Austen",
        4.5,
        vec!["Romance".into()],
    )]));
    let matrix = Arc::new(SimilarityMatrix::from_rows(vec![vec![1.0]]).expect("square"));

    let engine = Recommender::new(catalog, matrix).expect("sizes match");
    let clone = engine.clone();

    assert_eq!(
        engine.recommend("Romance", 1, None).unwrap(),
        clone.recommend("Romance", 1, None).unwrap()
    );
}
