//! Genre-based book recommendation engine.
//!
//! The catalog and the precomputed pairwise similarity matrix are loaded once,
//! wrapped in `Arc`, and injected into a [`Recommender`]. Everything consumed
//! at query time is read-only, so clones of the engine can serve concurrent
//! sessions without locking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;
pub mod similarity;

pub use catalog::{BookIdx, Catalog};
pub use config::Config;
pub use error::{RecommendError, Result, TomoError};
pub use matching::{GenreMatcher, NormalizedLevenshteinMatcher};
pub use models::{Book, Recommendation};
pub use services::Recommender;
pub use similarity::SimilarityMatrix;
