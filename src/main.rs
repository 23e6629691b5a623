mod api;
mod routes;

#[macro_use] extern crate rocket;
extern crate env_logger;
use std::sync::Arc;
use rocket::{ Build, Rocket };
use crate::api::{
    ConfigError, ImageService, ImageServiceFactory, IngredientService, RecipeRepository, RecipeService, RepositoryFactory,
    ResourceService, ResourceServiceFactory, UnitOfMeasureRepository, UnitOfMeasureService, ViewService
};

/// Wires the services over the given stores and mounts the routes.
pub fn assemble(
    recipe_repository: Arc<dyn RecipeRepository>,
    unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository>,
    image_service: ImageService,
    resource_service: ResourceService
) -> Result<Rocket<Build>, ConfigError> {
    let view_service = ViewService::new(resource_service)?;
    Ok(routes::mount(rocket::build())
        .manage(IngredientService::new(recipe_repository.clone(), unit_of_measure_repository.clone()))
        .manage(RecipeService::new(recipe_repository))
        .manage(UnitOfMeasureService::new(unit_of_measure_repository))
        .manage(image_service)
        .manage(view_service))
}

fn create_rocket() -> Result<Rocket<Build>, ConfigError> {
    let resource_service = ResourceServiceFactory::create()?;
    let units_of_measure = RepositoryFactory::load_units_of_measure()?;
    let recipe_repository: Arc<dyn RecipeRepository> = Arc::new(RepositoryFactory::create_recipe_repository(&units_of_measure)?);
    let unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository> = Arc::new(RepositoryFactory::create_unit_of_measure_repository(units_of_measure));
    let image_service = ImageServiceFactory::create(recipe_repository.clone())?;
    assemble(recipe_repository, unit_of_measure_repository, image_service, resource_service)
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    env_logger::init();
    match create_rocket() {
        Ok(rocket) => rocket,
        Err(error) => {
            panic!("Couldn't create recipe-o-matic: {}", error);
        }
    }
}
