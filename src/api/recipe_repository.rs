use std::collections::BTreeMap;
use std::path::Path;
use async_trait::async_trait;
use rocket::tokio::fs;
use rocket::tokio::sync::RwLock;
use crate::api::error::StoreError;
use crate::api::models::domain::Recipe;

/// Persists whole recipe aggregates, embedded ingredients included.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Replaces the stored aggregate with the same id, or inserts it, and
    /// returns what was persisted.
    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Keeps recipes as documents in memory and, when a file path is configured,
/// rewrites the whole collection as JSON after every change.
pub struct RecipeDocumentStore {
    recipes: RwLock<BTreeMap<String, Recipe>>,
    documents_file_path: Option<Box<Path>>
}

impl RecipeDocumentStore {
    pub fn new(recipes: Vec<Recipe>, documents_file_path: Option<Box<Path>>) -> RecipeDocumentStore {
        let recipes = recipes.into_iter().map(|recipe| (recipe.id.clone(), recipe)).collect();
        RecipeDocumentStore { recipes: RwLock::new(recipes), documents_file_path }
    }

    pub fn in_memory(recipes: Vec<Recipe>) -> RecipeDocumentStore {
        Self::new(recipes, None)
    }

    async fn write_documents(&self, recipes: &BTreeMap<String, Recipe>) -> Result<(), StoreError> {
        let documents_file_path = match &self.documents_file_path {
            Some(documents_file_path) => documents_file_path,
            None => return Ok(())
        };
        let documents: Vec<&Recipe> = recipes.values().collect();
        let documents_json = serde_json::to_string_pretty(&documents)?;
        if let Some(parent) = documents_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(documents_file_path, documents_json).await?;
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for RecipeDocumentStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.recipes.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.read().await.values().cloned().collect())
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut recipes = self.recipes.write().await;
        let previous = recipes.insert(recipe.id.clone(), recipe.clone());
        if let Err(error) = self.write_documents(&recipes).await {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(previous) => recipes.insert(recipe.id.clone(), previous),
                None => recipes.remove(&recipe.id)
            };
            return Err(error);
        }
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self.recipes.write().await;
        if let Some(removed) = recipes.remove(id) {
            if let Err(error) = self.write_documents(&recipes).await {
                recipes.insert(removed.id.clone(), removed);
                return Err(error);
            }
        }
        Ok(())
    }
}
