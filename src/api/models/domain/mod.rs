mod recipe;
mod ingredient;
mod unit_of_measure;
mod difficulty;

pub use recipe::*;
pub use ingredient::*;
pub use unit_of_measure::*;
pub use difficulty::*;
