mod payoffs;
mod player;
mod profile;

pub use payoffs::*;
pub use player::*;
pub use profile::*;
