mod cases;
mod matrix;
mod perturbed;
mod transition;
mod unperturbed;

pub use cases::*;
pub use matrix::*;
pub use perturbed::*;
pub use transition::*;
pub use unperturbed::*;
