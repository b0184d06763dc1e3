mod analyzer;
mod criteria;
mod lineup;
mod recommender;
mod selector;

pub use analyzer::*;
pub use criteria::*;
pub use lineup::*;
pub use recommender::*;
pub use selector::*;
