mod recipe_command;
mod ingredient_command;
mod unit_of_measure_command;

pub use recipe_command::*;
pub use ingredient_command::*;
pub use unit_of_measure_command::*;

/// Forms post empty strings for unset ids.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
