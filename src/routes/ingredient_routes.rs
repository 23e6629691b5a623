use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;
use serde_json::{ json, Value };
use crate::api::models::commands::{ IngredientCommand, UnitOfMeasureCommand };
use crate::api::{ IngredientService, PageResult, RecipeService, UnitOfMeasureService, ViewService };

#[get("/recipe/<recipe_id>/ingredients")]
pub async fn list_ingredients(recipe_id: &str, recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult {
    log::debug!("Getting ingredient list for recipe id: {}", recipe_id);
    let recipe = recipe_service.find_command_by_id(recipe_id).await.map_err(|error| view_service.error_page(&error))?;
    let title = view_service.text_template("ingredients_title_template", &json!({ "description": recipe.description }));
    view_service.render("recipe/ingredient/list", json!({ "title": title, "recipe": recipe }))
}

#[get("/recipe/<recipe_id>/ingredient/<id>/show")]
pub async fn show_recipe_ingredient(recipe_id: &str, id: &str, ingredient_service: &State<IngredientService>, view_service: &State<ViewService>) -> PageResult {
    let ingredient = ingredient_service.find_by_recipe_id_and_ingredient_id(recipe_id, id).await
        .map_err(|error| view_service.error_page(&error))?;
    view_service.render("recipe/ingredient/show", json!({ "title": view_service.text("ingredient_title"), "ingredient": ingredient }))
}

#[get("/recipe/<recipe_id>/ingredient/new")]
pub async fn new_ingredient(
    recipe_id: &str,
    recipe_service: &State<RecipeService>,
    unit_of_measure_service: &State<UnitOfMeasureService>,
    view_service: &State<ViewService>
) -> PageResult {
    // Only offer the form for recipes that exist.
    recipe_service.find_command_by_id(recipe_id).await.map_err(|error| view_service.error_page(&error))?;
    let uoms = unit_of_measure_service.list_all_uoms().await.map_err(|error| view_service.error_page(&error))?;
    let ingredient = IngredientCommand { recipe_id: Some(recipe_id.to_string()), ..IngredientCommand::default() };
    view_service.render("recipe/ingredient/ingredientform", ingredient_form_data(view_service.text("new_ingredient_title"), &ingredient, &uoms))
}

#[get("/recipe/<recipe_id>/ingredient/<id>/update")]
pub async fn update_recipe_ingredient(
    recipe_id: &str,
    id: &str,
    ingredient_service: &State<IngredientService>,
    unit_of_measure_service: &State<UnitOfMeasureService>,
    view_service: &State<ViewService>
) -> PageResult {
    let ingredient = ingredient_service.find_by_recipe_id_and_ingredient_id(recipe_id, id).await
        .map_err(|error| view_service.error_page(&error))?;
    let uoms = unit_of_measure_service.list_all_uoms().await.map_err(|error| view_service.error_page(&error))?;
    view_service.render("recipe/ingredient/ingredientform", ingredient_form_data(view_service.text("edit_ingredient_title"), &ingredient, &uoms))
}

#[post("/recipe/<recipe_id>/ingredient", data = "<command>")]
pub async fn save_or_update(recipe_id: &str, command: Form<IngredientCommand>, ingredient_service: &State<IngredientService>, view_service: &State<ViewService>) -> PageResult<Redirect> {
    let mut command = command.into_inner();
    command.recipe_id = Some(recipe_id.to_string());
    let saved = ingredient_service.save_ingredient_command(command).await.map_err(|error| view_service.error_page(&error))?;
    log::debug!("Saved recipe id: {}", recipe_id);
    log::debug!("Saved ingredient id: {}", saved.id.as_deref().unwrap_or_default());
    Ok(Redirect::to(format!("/recipe/{}/ingredient/{}/show", recipe_id, saved.id.unwrap_or_default())))
}

#[get("/recipe/<recipe_id>/ingredient/<id>/delete")]
pub async fn delete_ingredient(recipe_id: &str, id: &str, ingredient_service: &State<IngredientService>, view_service: &State<ViewService>) -> PageResult<Redirect> {
    ingredient_service.delete_by_id(recipe_id, id).await.map_err(|error| view_service.error_page(&error))?;
    Ok(Redirect::to(format!("/recipe/{}/ingredients", recipe_id)))
}

fn ingredient_form_data(title: String, ingredient: &IngredientCommand, uoms: &[UnitOfMeasureCommand]) -> Value {
    let uoms: Vec<Value> = uoms.iter().map(|uom| json!({
        "id": uom.id,
        "description": uom.description,
        "selected": uom.id.is_some() && uom.id == ingredient.uom.id
    })).collect();
    json!({ "title": title, "ingredient": ingredient, "uoms": uoms })
}
