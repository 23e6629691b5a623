use handlebars::Handlebars;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status;
use serde_json::{ json, Value };
use crate::api::error::{ ConfigError, ServiceError };
use crate::api::ResourceService;

pub type PageError = status::Custom<RawHtml<String>>;
pub type PageResult<T = RawHtml<String>> = Result<T, PageError>;

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("../../templates/partials/header.hbs")),
    ("footer", include_str!("../../templates/partials/footer.hbs"))
];

const TEMPLATES: [(&str, &str); 8] = [
    ("index", include_str!("../../templates/index.hbs")),
    ("error", include_str!("../../templates/error.hbs")),
    ("recipe/show", include_str!("../../templates/recipe/show.hbs")),
    ("recipe/recipeform", include_str!("../../templates/recipe/recipeform.hbs")),
    ("recipe/imageuploadform", include_str!("../../templates/recipe/imageuploadform.hbs")),
    ("recipe/ingredient/list", include_str!("../../templates/recipe/ingredient/list.hbs")),
    ("recipe/ingredient/show", include_str!("../../templates/recipe/ingredient/show.hbs")),
    ("recipe/ingredient/ingredientform", include_str!("../../templates/recipe/ingredient/ingredientform.hbs"))
];

const FALLBACK_ERROR_PAGE: &str = "<!DOCTYPE html><html><body><h1>500 Internal Server Error</h1></body></html>";

/// Renders the server-side pages.
pub struct ViewService {
    handlebars: Handlebars<'static>,
    resource_service: ResourceService
}

impl ViewService {
    pub fn new(resource_service: ResourceService) -> Result<ViewService, ConfigError> {
        let mut handlebars = Handlebars::new();
        for (name, partial) in PARTIALS {
            handlebars.register_partial(name, partial)
                .map_err(|source| ConfigError::Template { name: name.to_string(), source })?;
        }
        for (name, template) in TEMPLATES {
            handlebars.register_template_string(name, template)
                .map_err(|source| ConfigError::Template { name: name.to_string(), source })?;
        }
        Ok(ViewService { handlebars, resource_service })
    }

    /// A resource string, or its name when the resources don't define it.
    pub fn text(&self, name: &str) -> String {
        self.resource_service.get_resource_string_by_name(name).unwrap_or_else(|| name.to_string())
    }

    pub fn text_template(&self, name: &str, data: &Value) -> String {
        self.resource_service.render_resource_template_string_by_name(name, data).unwrap_or_else(|| name.to_string())
    }

    pub fn render(&self, template_name: &str, mut data: Value) -> PageResult {
        if let Value::Object(fields) = &mut data {
            fields.entry("application_title").or_insert_with(|| json!(self.text("application_title")));
        }
        self.handlebars.render(template_name, &data)
            .map(RawHtml)
            .map_err(|error| {
                log::error!("Couldn't render template {}: {}", template_name, error);
                status::Custom(Status::InternalServerError, RawHtml(FALLBACK_ERROR_PAGE.to_string()))
            })
    }

    pub fn error_page(&self, error: &ServiceError) -> PageError {
        let (status, title, message) = match error {
            ServiceError::NotFound { entity, id } => (
                Status::NotFound,
                self.text("not_found_title"),
                self.text_template("not_found_message_template", &json!({ "entity": entity, "id": id }))
            ),
            ServiceError::Validation(message) => (Status::BadRequest, self.text("bad_request_title"), message.clone()),
            ServiceError::DependencyUnresolved { entity, id } => (
                Status::BadRequest,
                self.text("bad_request_title"),
                self.text_template("dependency_unresolved_message_template", &json!({ "entity": entity, "id": id }))
            ),
            ServiceError::Store(_) => (Status::InternalServerError, self.text("server_error_title"), self.text("server_error_message"))
        };
        if status == Status::InternalServerError {
            log::error!("Handling {} error: {}", status.code, error);
        } else {
            log::warn!("Handling {} error: {}", status.code, error);
        }
        status::Custom(status, self.status_page(status, &title, &message))
    }

    /// Page for catchers, which only know the status.
    pub fn catcher_page(&self, status: Status) -> RawHtml<String> {
        let (title, message) = match status.code {
            400 => ("bad_request_title", "bad_request_message"),
            404 => ("not_found_title", "not_found_message"),
            422 => ("unprocessable_title", "unprocessable_message"),
            _ => ("server_error_title", "server_error_message")
        };
        self.status_page(status, &self.text(title), &self.text(message))
    }

    fn status_page(&self, status: Status, title: &str, message: &str) -> RawHtml<String> {
        let data = json!({ "title": title, "status": status.code, "message": message });
        match self.render("error", data) {
            Ok(page) => page,
            Err(fallback) => fallback.1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceServiceFactory;

    fn view_service() -> ViewService {
        ViewService::new(ResourceServiceFactory::bundled().unwrap()).unwrap()
    }

    #[test]
    fn renders_page_with_application_title() {
        let page = view_service().render("index", json!({ "title": "My Recipes", "recipes": [] })).unwrap();

        assert!(page.0.contains("<title>My Recipes | Recipe-o-matic</title>"));
        assert!(page.0.contains("No recipes yet."));
    }

    #[test]
    fn escapes_user_content() {
        let data = json!({ "title": "x", "recipes": [{ "id": "1", "description": "<script>" }] });

        let page = view_service().render("index", data).unwrap();

        assert!(!page.0.contains("<script>"));
        assert!(page.0.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_template_is_a_server_error() {
        let error = view_service().render("missing", json!({})).unwrap_err();

        assert_eq!(error.0, Status::InternalServerError);
    }

    #[test]
    fn maps_service_errors_to_statuses() {
        let view_service = view_service();

        let not_found = view_service.error_page(&ServiceError::not_found("Recipe", "42"));
        assert_eq!(not_found.0, Status::NotFound);
        assert!(not_found.1.0.contains("Recipe with id 42 was not found."));

        let unresolved = view_service.error_page(&ServiceError::unresolved("Unit of measure", "gallon"));
        assert_eq!(unresolved.0, Status::BadRequest);
        assert!(unresolved.1.0.contains("Unit of measure gallon does not exist."));

        let invalid = view_service.error_page(&ServiceError::validation("A recipe id is required"));
        assert_eq!(invalid.0, Status::BadRequest);

        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let store = view_service.error_page(&ServiceError::from(io_error));
        assert_eq!(store.0, Status::InternalServerError);
        assert!(!store.1.0.contains("disk full"));
    }
}
