mod recipe_routes;
mod ingredient_routes;
mod image_routes;

use rocket::http::Status;
use rocket::response::status;
use rocket::response::content::RawHtml;
use rocket::{ Build, Request, Rocket };
use crate::api::ViewService;

pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![
            recipe_routes::index,
            recipe_routes::index_alias,
            recipe_routes::show_by_id,
            recipe_routes::new_recipe,
            recipe_routes::update_recipe,
            recipe_routes::save_or_update,
            recipe_routes::delete_by_id,
            ingredient_routes::list_ingredients,
            ingredient_routes::show_recipe_ingredient,
            ingredient_routes::new_ingredient,
            ingredient_routes::update_recipe_ingredient,
            ingredient_routes::save_or_update,
            ingredient_routes::delete_ingredient,
            image_routes::show_upload_form,
            image_routes::handle_image_post,
            image_routes::render_image_from_store
        ])
        .register("/", catchers![error_page])
}

#[catch(default)]
fn error_page(status: Status, request: &Request<'_>) -> status::Custom<RawHtml<String>> {
    log::warn!("Handling {} for {} {}", status.code, request.method(), request.uri());
    let page = match request.rocket().state::<ViewService>() {
        Some(view_service) => view_service.catcher_page(status),
        None => RawHtml(format!("<h1>{}</h1>", status))
    };
    status::Custom(status, page)
}
