use std::sync::atomic::{ AtomicUsize, Ordering };
use async_trait::async_trait;
use crate::api::error::StoreError;
use crate::api::models::domain::{ Ingredient, Recipe, UnitOfMeasure };
use crate::api::{ RecipeDocumentStore, RecipeRepository };

pub fn unit_one() -> UnitOfMeasure {
    UnitOfMeasure::new("u1", "Unit One")
}

pub fn unit_two() -> UnitOfMeasure {
    UnitOfMeasure::new("u2", "Unit Two")
}

/// Recipe "2" holding ingredient "3" ("Old", 1 x u1).
pub fn recipe_two() -> Recipe {
    let mut recipe = Recipe::new("2");
    recipe.description = "Tacos".to_string();
    recipe.prep_time = 20;
    recipe.cook_time = 9;
    recipe.servings = 4;
    recipe.directions = "Grill and fold".to_string();
    recipe.add_ingredient(Ingredient::new("3", "Old", 1.0, unit_one()));
    recipe
}

/// Delegates to an in-memory store and counts saves.
pub struct CountingRecipeRepository {
    inner: RecipeDocumentStore,
    saves: AtomicUsize
}

impl CountingRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        CountingRecipeRepository { inner: RecipeDocumentStore::in_memory(recipes), saves: AtomicUsize::new(0) }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeRepository for CountingRecipeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        self.inner.find_all().await
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(recipe).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await
    }
}

/// Fails every write.
pub struct FailingRecipeRepository {
    inner: RecipeDocumentStore
}

impl FailingRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        FailingRecipeRepository { inner: RecipeDocumentStore::in_memory(recipes) }
    }
}

#[async_trait]
impl RecipeRepository for FailingRecipeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        self.inner.find_all().await
    }

    async fn save(&self, _recipe: Recipe) -> Result<Recipe, StoreError> {
        Err(StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
    }
}
