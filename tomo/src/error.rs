use thiserror::Error;

#[derive(Error, Debug)]
pub enum TomoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Expected query outcomes, reported to the caller as typed results and
/// rendered as user-facing warnings by whatever front-end sits on top.
/// Never fatal: the engine returns a well-defined outcome for any input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("no books found for genre '{0}'")]
    GenreNotFound(String),

    #[error("book '{title}' not found in genre '{genre}'")]
    TitleNotInGenre { title: String, genre: String },
}

pub type Result<T> = std::result::Result<T, TomoError>;
