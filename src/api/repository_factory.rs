use std::path::Path;
use crate::api::bootstrap;
use crate::api::config;
use crate::api::error::ConfigError;
use crate::api::models::domain::{ Recipe, UnitOfMeasure };
use crate::api::{ RecipeDocumentStore, UnitOfMeasureDocumentStore };

pub struct RepositoryFactory {}

impl RepositoryFactory {
    /// Units come from `UNITS_OF_MEASURE_FILE_PATH` when that file exists, from
    /// the default set otherwise.
    pub fn load_units_of_measure() -> Result<Vec<UnitOfMeasure>, ConfigError> {
        let units_of_measure_file_path = match config::optional_var("UNITS_OF_MEASURE_FILE_PATH") {
            Some(units_of_measure_file_path) => config::resolve_path(&units_of_measure_file_path)?,
            None => return Ok(bootstrap::default_units_of_measure())
        };
        match Self::read_documents(&units_of_measure_file_path)? {
            Some(units_of_measure) => Ok(units_of_measure),
            None => {
                log::info!("{} not found, using the default units of measure", units_of_measure_file_path.display());
                Ok(bootstrap::default_units_of_measure())
            }
        }
    }

    pub fn create_unit_of_measure_repository(units_of_measure: Vec<UnitOfMeasure>) -> UnitOfMeasureDocumentStore {
        UnitOfMeasureDocumentStore::new(units_of_measure)
    }

    /// Recipes are kept in `RECIPES_FILE_PATH` when set and only in memory
    /// otherwise. Sample recipes are loaded when there are no documents yet.
    pub fn create_recipe_repository(units_of_measure: &[UnitOfMeasure]) -> Result<RecipeDocumentStore, ConfigError> {
        let recipes_file_path = match config::optional_var("RECIPES_FILE_PATH") {
            Some(recipes_file_path) => config::resolve_path(&recipes_file_path)?,
            None => {
                log::info!("RECIPES_FILE_PATH is not set, recipes will only be kept in memory");
                return Ok(RecipeDocumentStore::in_memory(bootstrap::default_recipes(units_of_measure)));
            }
        };
        let recipes: Vec<Recipe> = match Self::read_documents(&recipes_file_path)? {
            Some(recipes) => recipes,
            None => {
                log::info!("{} not found, loading sample recipes", recipes_file_path.display());
                bootstrap::default_recipes(units_of_measure)
            }
        };
        Ok(RecipeDocumentStore::new(recipes, Some(recipes_file_path.into_boxed_path())))
    }

    fn read_documents<T: serde::de::DeserializeOwned>(file_path: &Path) -> Result<Option<Vec<T>>, ConfigError> {
        match config::read_optional_file(file_path)? {
            Some(documents_json) => serde_json::from_str(&documents_json)
                .map(Some)
                .map_err(|source| ConfigError::Json { path: file_path.to_path_buf(), source }),
            None => Ok(None)
        }
    }
}
