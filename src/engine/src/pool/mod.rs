pub mod error;
pub mod pool;
pub mod table;

pub use error::*;
pub use pool::*;
pub use table::*;
