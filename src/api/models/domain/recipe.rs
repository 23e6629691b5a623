use std::collections::HashSet;
use serde::de::Error;
use serde::{ Deserialize, Deserializer, Serialize };
use crate::api::models::domain::{ Difficulty, Ingredient };

/// Aggregate root for a recipe. Ingredients are owned exclusively and are only
/// reachable through id-keyed accessors, so ids stay unique within a recipe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub description: String,
    #[serde(rename = "prepTime")]
    pub prep_time: u32,
    #[serde(rename = "cookTime")]
    pub cook_time: u32,
    pub servings: u32,
    pub source: String,
    pub url: String,
    pub directions: String,
    pub difficulty: Difficulty,
    pub notes: String,
    #[serde(rename = "imageFileName", default)]
    pub image_file_name: Option<String>,
    #[serde(default, deserialize_with = "unique_ingredients")]
    ingredients: Vec<Ingredient>
}

/// Stored documents go through the same duplicate id rule as `add_ingredient`.
fn unique_ingredients<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Ingredient>, D::Error> {
    let ingredients = Vec::<Ingredient>::deserialize(deserializer)?;
    let mut ids = HashSet::new();
    for ingredient in &ingredients {
        if !ids.insert(ingredient.id.as_str()) {
            return Err(D::Error::custom(format!("duplicate ingredient id {}", ingredient.id)));
        }
    }
    Ok(ingredients)
}

impl Recipe {
    pub fn new(id: impl Into<String>) -> Self {
        Recipe {
            id: id.into(),
            description: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 0,
            source: String::new(),
            url: String::new(),
            directions: String::new(),
            difficulty: Difficulty::default(),
            notes: String::new(),
            image_file_name: None,
            ingredients: vec![]
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn ingredient_mut(&mut self, id: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|ingredient| ingredient.id == id)
    }

    /// Appends the ingredient unless one with the same id is already present.
    /// Returns whether it was appended.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> bool {
        if self.ingredient(&ingredient.id).is_some() {
            return false;
        }
        self.ingredients.push(ingredient);
        true
    }

    /// Removes the first ingredient with the given id.
    pub fn remove_ingredient(&mut self, id: &str) -> Option<Ingredient> {
        let index = self.ingredients.iter().position(|ingredient| ingredient.id == id)?;
        Some(self.ingredients.remove(index))
    }

    pub fn has_image(&self) -> bool {
        self.image_file_name.is_some()
    }
}
