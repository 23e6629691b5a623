use std::sync::Arc;
use uuid::Uuid;
use crate::api::converters;
use crate::api::error::ServiceError;
use crate::api::models::commands::IngredientCommand;
use crate::api::models::domain::{ Ingredient, Recipe, UnitOfMeasure };
use crate::api::{ RecipeRepository, UnitOfMeasureRepository };

const RECIPE: &str = "Recipe";
const INGREDIENT: &str = "Ingredient";
const UNIT_OF_MEASURE: &str = "Unit of measure";

const MISSING_RECIPE_ID_ERROR: &str = "A recipe id is required";
const MISSING_UOM_ID_ERROR: &str = "A unit of measure is required";
const BLANK_DESCRIPTION_ERROR: &str = "An ingredient description is required";
const INVALID_AMOUNT_ERROR: &str = "The amount must be a number of at least 0";
const DUPLICATE_INGREDIENT_ERROR: &str = "The recipe already has an ingredient with that id";

/// Manages ingredients embedded in recipe aggregates. Every change is a
/// read-modify-write of the whole recipe; two concurrent edits of the same
/// recipe are last-writer-wins.
pub struct IngredientService {
    recipe_repository: Arc<dyn RecipeRepository>,
    unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository>
}

impl IngredientService {
    pub fn new(recipe_repository: Arc<dyn RecipeRepository>, unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository>) -> IngredientService {
        IngredientService { recipe_repository, unit_of_measure_repository }
    }

    pub async fn find_by_recipe_id_and_ingredient_id(&self, recipe_id: &str, ingredient_id: &str) -> Result<IngredientCommand, ServiceError> {
        let recipe = self.load_recipe(recipe_id).await?;
        let ingredient = recipe.ingredient(ingredient_id)
            .ok_or_else(|| ServiceError::not_found(INGREDIENT, ingredient_id))?;
        Ok(Self::to_command(ingredient, recipe_id))
    }

    /// Updates the ingredient whose id matches the command, or appends a new
    /// one. New ingredients take the command's id, or a fresh one when it has
    /// none. An unknown unit of measure fails both paths before anything is
    /// written.
    pub async fn save_ingredient_command(&self, command: IngredientCommand) -> Result<IngredientCommand, ServiceError> {
        let (recipe_id, uom_id) = Self::validate(&command)?;
        let mut recipe = self.load_recipe(recipe_id).await?;
        let uom = self.resolve_unit_of_measure(uom_id).await?;

        let ingredient_id = match command.normalized_id().and_then(|id| recipe.ingredient_mut(id)) {
            Some(ingredient) => {
                ingredient.description = command.description.clone();
                ingredient.amount = command.amount;
                ingredient.uom = uom;
                ingredient.id.clone()
            },
            None => {
                let id = command.normalized_id()
                    .map(str::to_string)
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                if !recipe.add_ingredient(converters::to_ingredient(&command, id.clone(), uom)) {
                    return Err(ServiceError::validation(DUPLICATE_INGREDIENT_ERROR));
                }
                id
            }
        };

        log::debug!("Saving ingredient: {}:{}", recipe_id, ingredient_id);
        let saved_recipe = self.recipe_repository.save(recipe).await?;
        let saved_ingredient = saved_recipe.ingredient(&ingredient_id)
            .ok_or_else(|| ServiceError::not_found(INGREDIENT, ingredient_id.as_str()))?;
        Ok(Self::to_command(saved_ingredient, &saved_recipe.id))
    }

    /// Removes the ingredient if both it and its recipe exist. Misses are not
    /// errors, and the recipe is only written when something was removed.
    pub async fn delete_by_id(&self, recipe_id: &str, ingredient_id: &str) -> Result<(), ServiceError> {
        log::debug!("Deleting ingredient: {}:{}", recipe_id, ingredient_id);
        let mut recipe = match self.recipe_repository.find_by_id(recipe_id).await? {
            Some(recipe) => recipe,
            None => return Ok(())
        };
        if recipe.remove_ingredient(ingredient_id).is_some() {
            self.recipe_repository.save(recipe).await?;
        }
        Ok(())
    }

    fn validate(command: &IngredientCommand) -> Result<(&str, &str), ServiceError> {
        let recipe_id = command.normalized_recipe_id()
            .ok_or_else(|| ServiceError::validation(MISSING_RECIPE_ID_ERROR))?;
        let uom_id = command.normalized_uom_id()
            .ok_or_else(|| ServiceError::validation(MISSING_UOM_ID_ERROR))?;
        if command.description.trim().is_empty() {
            return Err(ServiceError::validation(BLANK_DESCRIPTION_ERROR));
        }
        if !command.amount.is_finite() || command.amount < 0.0 {
            return Err(ServiceError::validation(INVALID_AMOUNT_ERROR));
        }
        Ok((recipe_id, uom_id))
    }

    async fn load_recipe(&self, recipe_id: &str) -> Result<Recipe, ServiceError> {
        self.recipe_repository.find_by_id(recipe_id).await?
            .ok_or_else(|| ServiceError::not_found(RECIPE, recipe_id))
    }

    async fn resolve_unit_of_measure(&self, uom_id: &str) -> Result<UnitOfMeasure, ServiceError> {
        self.unit_of_measure_repository.find_by_id(uom_id).await?
            .ok_or_else(|| ServiceError::unresolved(UNIT_OF_MEASURE, uom_id))
    }

    fn to_command(ingredient: &Ingredient, recipe_id: &str) -> IngredientCommand {
        IngredientCommand {
            recipe_id: Some(recipe_id.to_string()),
            ..IngredientCommand::from(ingredient)
        }
    }
}
