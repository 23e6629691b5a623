use serde::{ Deserialize, Serialize };
use crate::api::models::domain::UnitOfMeasure;

/// An ingredient embedded in its owning recipe. It has no lifecycle of its own
/// and does not know which recipe it belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub uom: UnitOfMeasure
}

impl Ingredient {
    pub fn new(id: impl Into<String>, description: impl Into<String>, amount: f64, uom: UnitOfMeasure) -> Self {
        Ingredient { id: id.into(), description: description.into(), amount, uom }
    }
}
