use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status;
use rocket::response::Redirect;
use rocket::State;
use serde_json::{ json, Value };
use crate::api::models::commands::RecipeCommand;
use crate::api::models::domain::Difficulty;
use crate::api::{ ImageService, PageResult, RecipeService, ViewService };

#[get("/")]
pub async fn index(recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult {
    let recipes = recipe_service.find_all().await.map_err(|error| view_service.error_page(&error))?;
    view_service.render("index", json!({ "title": view_service.text("index_title"), "recipes": recipes }))
}

#[get("/index")]
pub fn index_alias() -> Redirect {
    Redirect::to("/")
}

#[get("/recipe/<id>/show")]
pub async fn show_by_id(id: &str, recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult {
    let recipe = recipe_service.find_command_by_id(id).await.map_err(|error| view_service.error_page(&error))?;
    view_service.render("recipe/show", json!({
        "title": recipe.description,
        "difficulty_label": recipe.difficulty.label(),
        "recipe": recipe
    }))
}

#[get("/recipe/new")]
pub fn new_recipe(view_service: &State<ViewService>) -> PageResult {
    let title = view_service.text("new_recipe_title");
    view_service.render("recipe/recipeform", recipe_form_data(title, &RecipeCommand::default(), &[]))
}

#[get("/recipe/<id>/update")]
pub async fn update_recipe(id: &str, recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult {
    let recipe = recipe_service.find_command_by_id(id).await.map_err(|error| view_service.error_page(&error))?;
    let title = view_service.text("edit_recipe_title");
    view_service.render("recipe/recipeform", recipe_form_data(title, &recipe, &[]))
}

#[post("/recipe", data = "<command>")]
pub async fn save_or_update(command: Form<RecipeCommand>, recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult<Redirect> {
    let command = command.into_inner();
    let errors = command.validation_errors();
    if !errors.is_empty() {
        for error in &errors {
            log::debug!("{}", error);
        }
        let title = match command.normalized_id() {
            Some(_) => view_service.text("edit_recipe_title"),
            None => view_service.text("new_recipe_title")
        };
        let form = view_service.render("recipe/recipeform", recipe_form_data(title, &command, &errors))?;
        return Err(status::Custom(Status::BadRequest, form));
    }
    let saved = recipe_service.save_recipe_command(command).await.map_err(|error| view_service.error_page(&error))?;
    Ok(Redirect::to(format!("/recipe/{}/show", saved.id.unwrap_or_default())))
}

#[get("/recipe/<id>/delete")]
pub async fn delete_by_id(
    id: &str,
    recipe_service: &State<RecipeService>,
    image_service: &State<ImageService>,
    view_service: &State<ViewService>
) -> PageResult<Redirect> {
    let image_path = image_service.stored_image_path(id).await.map_err(|error| view_service.error_page(&error))?;
    recipe_service.delete_by_id(id).await.map_err(|error| view_service.error_page(&error))?;
    // The image goes only once the recipe no longer points at it.
    if let Some(image_path) = image_path {
        image_service.remove_image_file(&image_path).await;
    }
    Ok(Redirect::to("/"))
}

fn recipe_form_data(title: String, recipe: &RecipeCommand, errors: &[String]) -> Value {
    let difficulties: Vec<Value> = Difficulty::ALL.iter().map(|difficulty| json!({
        "value": difficulty.value(),
        "label": difficulty.label(),
        "selected": *difficulty == recipe.difficulty
    })).collect();
    json!({ "title": title, "recipe": recipe, "difficulties": difficulties, "errors": errors })
}
