mod game;
mod parameters;

pub use game::*;
pub use parameters::*;
