mod book;
mod recommendation;

pub use book::*;
pub use recommendation::*;
