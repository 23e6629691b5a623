mod bootstrap;
mod config;
mod converters;
mod error;
mod recipe_repository;
mod unit_of_measure_repository;
mod repository_factory;
mod ingredient_service;
mod recipe_service;
mod unit_of_measure_service;
mod image_service;
mod image_service_factory;
mod resource_service;
mod resource_service_factory;
mod view_service;
pub mod models;
#[cfg(test)]
pub mod test_support;

pub use error::*;
pub use recipe_repository::*;
pub use unit_of_measure_repository::*;
pub use repository_factory::*;
pub use ingredient_service::*;
pub use recipe_service::*;
pub use unit_of_measure_service::*;
pub use image_service::*;
pub use image_service_factory::*;
pub use resource_service::*;
pub use resource_service_factory::*;
pub use view_service::*;
