use crate::api::models::commands::{ IngredientCommand, RecipeCommand, UnitOfMeasureCommand };
use crate::api::models::domain::{ Ingredient, Recipe, UnitOfMeasure };

impl From<&UnitOfMeasure> for UnitOfMeasureCommand {
    fn from(unit_of_measure: &UnitOfMeasure) -> Self {
        UnitOfMeasureCommand {
            id: Some(unit_of_measure.id.clone()),
            description: Some(unit_of_measure.description.clone())
        }
    }
}

/// The embedded ingredient does not know its recipe; callers stamp `recipe_id`.
impl From<&Ingredient> for IngredientCommand {
    fn from(ingredient: &Ingredient) -> Self {
        IngredientCommand {
            id: Some(ingredient.id.clone()),
            recipe_id: None,
            description: ingredient.description.clone(),
            amount: ingredient.amount,
            uom: UnitOfMeasureCommand::from(&ingredient.uom)
        }
    }
}

impl From<&Recipe> for RecipeCommand {
    fn from(recipe: &Recipe) -> Self {
        RecipeCommand {
            id: Some(recipe.id.clone()),
            description: recipe.description.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            source: recipe.source.clone(),
            url: recipe.url.clone(),
            directions: recipe.directions.clone(),
            difficulty: recipe.difficulty,
            notes: recipe.notes.clone(),
            image_url: recipe.has_image().then(|| recipe_image_url(&recipe.id)),
            ingredients: recipe.ingredients().iter().map(|ingredient| IngredientCommand {
                recipe_id: Some(recipe.id.clone()),
                ..IngredientCommand::from(ingredient)
            }).collect()
        }
    }
}

/// Builds a new ingredient from a command. The unit must already be resolved,
/// commands never create units.
pub fn to_ingredient(command: &IngredientCommand, id: String, uom: UnitOfMeasure) -> Ingredient {
    Ingredient::new(id, command.description.clone(), command.amount, uom)
}

/// Copies the descriptive fields of a command onto a recipe, leaving its
/// ingredients and image alone.
pub fn apply_recipe_command(recipe: &mut Recipe, command: &RecipeCommand) {
    recipe.description = command.description.trim().to_string();
    recipe.prep_time = command.prep_time;
    recipe.cook_time = command.cook_time;
    recipe.servings = command.servings;
    recipe.source = command.source.clone();
    recipe.url = command.url.trim().to_string();
    recipe.directions = command.directions.clone();
    recipe.difficulty = command.difficulty;
    recipe.notes = command.notes.clone();
}

pub fn recipe_image_url(recipe_id: &str) -> String {
    format!("/recipe/{}/recipeimage", recipe_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::domain::Difficulty;

    fn tablespoon() -> UnitOfMeasure {
        UnitOfMeasure::new("tablespoon", "Tablespoon")
    }

    #[test]
    fn ingredient_to_command_leaves_recipe_id_unset() {
        let ingredient = Ingredient::new("3", "Lime juice", 1.0, tablespoon());

        let command = IngredientCommand::from(&ingredient);

        assert_eq!(command.id.as_deref(), Some("3"));
        assert_eq!(command.recipe_id, None);
        assert_eq!(command.description, "Lime juice");
        assert_eq!(command.amount, 1.0);
        assert_eq!(command.uom, UnitOfMeasureCommand {
            id: Some("tablespoon".to_string()),
            description: Some("Tablespoon".to_string())
        });
    }

    #[test]
    fn recipe_to_command_stamps_recipe_id_on_ingredients() {
        let mut recipe = Recipe::new("2");
        recipe.description = "Guacamole".to_string();
        recipe.difficulty = Difficulty::Moderate;
        recipe.add_ingredient(Ingredient::new("3", "Salt", 0.25, tablespoon()));

        let command = RecipeCommand::from(&recipe);

        assert_eq!(command.id.as_deref(), Some("2"));
        assert_eq!(command.difficulty, Difficulty::Moderate);
        assert_eq!(command.image_url, None);
        assert_eq!(command.ingredients.len(), 1);
        assert_eq!(command.ingredients[0].recipe_id.as_deref(), Some("2"));
    }

    #[test]
    fn recipe_with_image_gets_image_url() {
        let mut recipe = Recipe::new("2");
        recipe.image_file_name = Some("2.png".to_string());

        assert_eq!(RecipeCommand::from(&recipe).image_url.as_deref(), Some("/recipe/2/recipeimage"));
    }

    #[test]
    fn applying_command_keeps_ingredients_and_image() {
        let mut recipe = Recipe::new("2");
        recipe.image_file_name = Some("2.png".to_string());
        recipe.add_ingredient(Ingredient::new("3", "Salt", 0.25, tablespoon()));
        let command = RecipeCommand {
            description: " Tacos ".to_string(),
            prep_time: 20,
            cook_time: 15,
            servings: 4,
            directions: "Grill".to_string(),
            difficulty: Difficulty::Hard,
            ..RecipeCommand::default()
        };

        apply_recipe_command(&mut recipe, &command);

        assert_eq!(recipe.description, "Tacos");
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.ingredients().len(), 1);
        assert!(recipe.has_image());
    }

    #[test]
    fn to_ingredient_uses_given_id_and_unit() {
        let command = IngredientCommand { description: "Avocado".to_string(), amount: 2.0, ..IngredientCommand::default() };

        let ingredient = to_ingredient(&command, "9".to_string(), tablespoon());

        assert_eq!(ingredient, Ingredient::new("9", "Avocado", 2.0, tablespoon()));
    }
}
