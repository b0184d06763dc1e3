mod formation;
mod line;
mod slots;

pub use formation::*;
pub use line::*;
pub use slots::*;
