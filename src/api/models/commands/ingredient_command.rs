use serde::Serialize;
use crate::api::models::commands::{ non_blank, UnitOfMeasureCommand };

/// Ingredient as submitted by the ingredient form. The form posts an empty
/// `id` for new ingredients; `recipe_id` is taken from the request path.
#[derive(FromForm, Serialize, Clone, Debug, Default, PartialEq)]
pub struct IngredientCommand {
    pub id: Option<String>,
    pub recipe_id: Option<String>,
    pub description: String,
    pub amount: f64,
    pub uom: UnitOfMeasureCommand
}

impl IngredientCommand {
    pub fn normalized_id(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    pub fn normalized_recipe_id(&self) -> Option<&str> {
        non_blank(self.recipe_id.as_deref())
    }

    pub fn normalized_uom_id(&self) -> Option<&str> {
        non_blank(self.uom.id.as_deref())
    }
}
