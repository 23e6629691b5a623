use std::sync::Arc;
use crate::api::config;
use crate::api::error::ConfigError;
use crate::api::{ ImageService, RecipeRepository };

const DEFAULT_IMAGES_DIR: &str = "recipe-o-matic/images";

pub struct ImageServiceFactory {}

impl ImageServiceFactory {
    pub fn create(recipe_repository: Arc<dyn RecipeRepository>) -> Result<ImageService, ConfigError> {
        let images_dir = config::optional_var("IMAGES_DIR").unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string());
        let images_dir = config::resolve_path(&images_dir)?;
        log::info!("Storing recipe images in {}", images_dir.display());
        Ok(ImageService::new(recipe_repository, images_dir.into_boxed_path()))
    }
}
