pub mod builder;
pub mod column;
pub mod player;
pub mod position;

pub use builder::*;
pub use column::*;
pub use player::*;
pub use position::*;
