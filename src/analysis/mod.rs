mod analyzer;
mod density;
mod markov;
mod stable;
mod stationary;

pub use analyzer::*;
pub use density::*;
pub use markov::*;
pub use stable::*;
pub use stationary::*;
