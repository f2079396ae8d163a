mod recommender;

pub use recommender::Recommender;
