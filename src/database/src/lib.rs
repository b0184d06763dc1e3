mod history;
mod loaders;

pub use history::*;
pub use loaders::*;
