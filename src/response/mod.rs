mod oracle;
mod samples;
mod sampling;

pub use oracle::*;
pub use samples::*;
pub use sampling::*;
