mod history;
mod space;

pub use history::*;
pub use space::*;
