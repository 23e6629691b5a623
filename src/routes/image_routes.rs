use rocket::form::Form;
use rocket::fs::{ NamedFile, TempFile };
use rocket::http::Status;
use rocket::response::status;
use rocket::response::Redirect;
use rocket::State;
use serde_json::json;
use crate::api::{ ImageService, PageResult, RecipeService, ViewService };

#[derive(FromForm)]
pub struct ImageUpload<'r> {
    imagefile: TempFile<'r>
}

#[get("/recipe/<id>/image")]
pub async fn show_upload_form(id: &str, recipe_service: &State<RecipeService>, view_service: &State<ViewService>) -> PageResult {
    let recipe = recipe_service.find_command_by_id(id).await.map_err(|error| view_service.error_page(&error))?;
    let title = view_service.text_template("upload_image_title_template", &json!({ "description": recipe.description }));
    view_service.render("recipe/imageuploadform", json!({ "title": title, "recipe": recipe }))
}

#[post("/recipe/<id>/image", data = "<upload>")]
pub async fn handle_image_post(id: &str, mut upload: Form<ImageUpload<'_>>, image_service: &State<ImageService>, view_service: &State<ViewService>) -> PageResult<Redirect> {
    image_service.save_image_file(id, &mut upload.imagefile).await.map_err(|error| view_service.error_page(&error))?;
    Ok(Redirect::to(format!("/recipe/{}/show", id)))
}

#[get("/recipe/<id>/recipeimage")]
pub async fn render_image_from_store(id: &str, image_service: &State<ImageService>, view_service: &State<ViewService>) -> PageResult<NamedFile> {
    let image_path = image_service.image_path(id).await.map_err(|error| view_service.error_page(&error))?;
    NamedFile::open(&image_path).await.map_err(|error| {
        log::error!("Couldn't open image {}: {}", image_path.display(), error);
        status::Custom(Status::NotFound, view_service.catcher_page(Status::NotFound))
    })
}
