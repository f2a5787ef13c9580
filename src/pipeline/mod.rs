mod experiment;
mod report;

pub use experiment::*;
pub use report::*;
