use std::path::{ Path, PathBuf };
use std::sync::Arc;
use rocket::fs::TempFile;
use rocket::http::ContentType;
use rocket::tokio::fs;
use crate::api::error::ServiceError;
use crate::api::models::domain::Recipe;
use crate::api::RecipeRepository;

const RECIPE: &str = "Recipe";
const RECIPE_IMAGE: &str = "Recipe image";
const IMAGE_SUBTYPES: [&str; 5] = ["png", "jpeg", "gif", "webp", "bmp"];

const UNSUPPORTED_IMAGE_ERROR: &str = "Only png, jpeg, gif, webp and bmp images can be uploaded";
const UNSAFE_RECIPE_ID_ERROR: &str = "The recipe id can't be used as an image file name";

/// Stores one uploaded image per recipe under the images directory.
pub struct ImageService {
    recipe_repository: Arc<dyn RecipeRepository>,
    images_dir: Box<Path>
}

impl ImageService {
    pub fn new(recipe_repository: Arc<dyn RecipeRepository>, images_dir: Box<Path>) -> ImageService {
        ImageService { recipe_repository, images_dir }
    }

    /// Stages the upload next to the images, then records it on the recipe.
    /// The staged file only takes its final name once the recipe is saved, so
    /// a failed save leaves the previous image in place.
    pub async fn save_image_file(&self, recipe_id: &str, image_file: &mut TempFile<'_>) -> Result<(), ServiceError> {
        let extension = Self::image_extension(image_file.content_type())?;
        let file_name = format!("{}.{}", Self::file_stem(recipe_id)?, extension);
        self.load_recipe(recipe_id).await?;

        fs::create_dir_all(&self.images_dir).await?;
        let staged_path = self.images_dir.join(format!(".{}.upload", file_name));
        image_file.copy_to(&staged_path).await?;

        let previous_file_name = match self.record_image(recipe_id, &file_name).await {
            Ok(previous_file_name) => previous_file_name,
            Err(error) => {
                self.remove_image_file(&staged_path).await;
                return Err(error);
            }
        };
        fs::rename(&staged_path, self.images_dir.join(&file_name)).await?;
        log::info!("Stored image {} for recipe {}", file_name, recipe_id);

        if let Some(previous_file_name) = previous_file_name.filter(|previous_file_name| *previous_file_name != file_name) {
            self.remove_image_file(&self.images_dir.join(previous_file_name)).await;
        }
        Ok(())
    }

    pub async fn image_path(&self, recipe_id: &str) -> Result<PathBuf, ServiceError> {
        let recipe = self.load_recipe(recipe_id).await?;
        recipe.image_file_name
            .map(|file_name| self.images_dir.join(file_name))
            .ok_or_else(|| ServiceError::not_found(RECIPE_IMAGE, recipe_id))
    }

    /// Path of the recipe's image, if the recipe exists and has one.
    pub async fn stored_image_path(&self, recipe_id: &str) -> Result<Option<PathBuf>, ServiceError> {
        Ok(self.recipe_repository.find_by_id(recipe_id).await?
            .and_then(|recipe| recipe.image_file_name)
            .map(|file_name| self.images_dir.join(file_name)))
    }

    /// Best effort; a file that can't be removed is only logged.
    pub async fn remove_image_file(&self, image_path: &Path) {
        if let Err(error) = fs::remove_file(image_path).await {
            log::warn!("Couldn't remove image {}: {}", image_path.display(), error);
        }
    }

    /// Points the recipe at `file_name` and returns the file it replaced.
    async fn record_image(&self, recipe_id: &str, file_name: &str) -> Result<Option<String>, ServiceError> {
        let mut recipe = self.load_recipe(recipe_id).await?;
        let previous_file_name = recipe.image_file_name.replace(file_name.to_string());
        self.recipe_repository.save(recipe).await?;
        Ok(previous_file_name)
    }

    async fn load_recipe(&self, recipe_id: &str) -> Result<Recipe, ServiceError> {
        self.recipe_repository.find_by_id(recipe_id).await?
            .ok_or_else(|| ServiceError::not_found(RECIPE, recipe_id))
    }

    fn image_extension(content_type: Option<&ContentType>) -> Result<&'static str, ServiceError> {
        content_type
            .filter(|content_type| content_type.top() == "image")
            .and_then(|content_type| IMAGE_SUBTYPES.iter().copied().find(|subtype| content_type.sub() == *subtype))
            .ok_or_else(|| ServiceError::validation(UNSUPPORTED_IMAGE_ERROR))
    }

    fn file_stem(recipe_id: &str) -> Result<&str, ServiceError> {
        let is_safe = !recipe_id.is_empty()
            && recipe_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if is_safe { Ok(recipe_id) } else { Err(ServiceError::validation(UNSAFE_RECIPE_ID_ERROR)) }
    }
}
