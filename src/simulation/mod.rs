mod visits;
mod walk;

pub use visits::*;
pub use walk::*;
