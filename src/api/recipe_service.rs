use std::sync::Arc;
use uuid::Uuid;
use crate::api::converters;
use crate::api::error::ServiceError;
use crate::api::models::commands::RecipeCommand;
use crate::api::models::domain::Recipe;
use crate::api::RecipeRepository;

const RECIPE: &str = "Recipe";

pub struct RecipeService {
    recipe_repository: Arc<dyn RecipeRepository>
}

impl RecipeService {
    pub fn new(recipe_repository: Arc<dyn RecipeRepository>) -> RecipeService {
        RecipeService { recipe_repository }
    }

    /// All recipes, ordered by description.
    pub async fn find_all(&self) -> Result<Vec<RecipeCommand>, ServiceError> {
        let mut recipes = self.recipe_repository.find_all().await?;
        recipes.sort_by(|left, right| left.description.to_lowercase().cmp(&right.description.to_lowercase()));
        Ok(recipes.iter().map(RecipeCommand::from).collect())
    }

    pub async fn find_command_by_id(&self, id: &str) -> Result<RecipeCommand, ServiceError> {
        let recipe = self.recipe_repository.find_by_id(id).await?
            .ok_or_else(|| ServiceError::not_found(RECIPE, id))?;
        Ok(RecipeCommand::from(&recipe))
    }

    /// Creates the recipe when the command's id is blank or unknown, otherwise
    /// updates its descriptive fields. Ingredients and image are never touched
    /// here.
    pub async fn save_recipe_command(&self, command: RecipeCommand) -> Result<RecipeCommand, ServiceError> {
        let errors = command.validation_errors();
        if !errors.is_empty() {
            return Err(ServiceError::validation(errors.join("; ")));
        }
        let mut recipe = match command.normalized_id() {
            Some(id) => self.recipe_repository.find_by_id(id).await?
                .unwrap_or_else(|| Recipe::new(id)),
            None => Recipe::new(Uuid::new_v4().to_string())
        };
        converters::apply_recipe_command(&mut recipe, &command);
        log::debug!("Saving recipe: {}", recipe.id);
        let saved_recipe = self.recipe_repository.save(recipe).await?;
        Ok(RecipeCommand::from(&saved_recipe))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        log::debug!("Deleting recipe: {}", id);
        self.recipe_repository.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::recipe_two;
    use crate::api::RecipeDocumentStore;

    fn service_with(recipes: Vec<Recipe>) -> RecipeService {
        RecipeService::new(Arc::new(RecipeDocumentStore::in_memory(recipes)))
    }

    fn valid_command(id: Option<&str>) -> RecipeCommand {
        RecipeCommand {
            id: id.map(str::to_string),
            description: "Fish Tacos".to_string(),
            prep_time: 15,
            cook_time: 10,
            servings: 2,
            directions: "Fry the fish".to_string(),
            ..RecipeCommand::default()
        }
    }

    #[tokio::test]
    async fn find_all_orders_by_description() {
        let mut guacamole = Recipe::new("1");
        guacamole.description = "guacamole".to_string();
        let service = service_with(vec![recipe_two(), guacamole]);

        let descriptions: Vec<String> = service.find_all().await.unwrap().into_iter().map(|recipe| recipe.description).collect();

        assert_eq!(descriptions, vec!["guacamole".to_string(), "Tacos".to_string()]);
    }

    #[tokio::test]
    async fn find_command_by_id_fails_for_unknown_recipe() {
        let service = service_with(vec![]);

        let error = service.find_command_by_id("42").await.unwrap_err();

        assert!(matches!(error, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn save_without_id_creates_recipe() {
        let service = service_with(vec![]);

        let saved = service.save_recipe_command(valid_command(None)).await.unwrap();

        let id = saved.id.clone().unwrap();
        assert_eq!(service.find_command_by_id(&id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn save_of_existing_recipe_keeps_its_ingredients() {
        let service = service_with(vec![recipe_two()]);

        let saved = service.save_recipe_command(valid_command(Some("2"))).await.unwrap();

        assert_eq!(saved.description, "Fish Tacos");
        assert_eq!(saved.ingredients.len(), 1);
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_rejects_invalid_command() {
        let service = service_with(vec![]);
        let command = RecipeCommand { servings: 0, ..valid_command(None) };

        let error = service.save_recipe_command(command).await.unwrap_err();

        assert!(matches!(error, ServiceError::Validation(_)));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = service_with(vec![recipe_two()]);

        service.delete_by_id("2").await.unwrap();
        service.delete_by_id("2").await.unwrap();

        assert!(service.find_all().await.unwrap().is_empty());
    }
}
