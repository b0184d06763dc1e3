mod players;

pub use players::*;
