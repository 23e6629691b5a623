use handlebars::Handlebars;
use serde::Serialize;
use crate::api::models::resources_xml::ResourcesElement;

/// User-facing strings loaded from the resources XML file.
#[derive(Clone)]
pub struct ResourceService {
    resource_element: ResourcesElement
}

impl ResourceService {
    pub fn new(resource_element: ResourcesElement) -> ResourceService {
        ResourceService {
            resource_element
        }
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<String> {
        self.resource_element.find(name).map(|string_element| string_element.content.clone())
    }

    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let mut handlebars = Handlebars::new();
        // Pages escape these strings when they render them.
        handlebars.register_escape_fn(handlebars::no_escape);
        let template_string = self.get_resource_string_by_name(name)?;
        match handlebars.render_template(template_string.as_str(), data) {
            Ok(rendered) => Some(rendered),
            Err(error) => {
                log::error!("Couldn't render resource string {}: {}", name, error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hard_xml::XmlRead;
    use serde_json::json;

    fn resource_service() -> ResourceService {
        let resource_element = ResourcesElement::from_str(
            r#"<resources><string name="title">Recipes</string><string name="not_found_message_template">{{entity}} {{id}} is gone</string></resources>"#
        ).unwrap();
        ResourceService::new(resource_element)
    }

    #[test]
    fn looks_up_strings_by_name() {
        assert_eq!(resource_service().get_resource_string_by_name("title"), Some("Recipes".to_string()));
        assert_eq!(resource_service().get_resource_string_by_name("missing"), None);
    }

    #[test]
    fn renders_templated_strings() {
        let rendered = resource_service().render_resource_template_string_by_name(
            "not_found_message_template",
            &json!({ "entity": "Recipe", "id": "2" })
        );

        assert_eq!(rendered, Some("Recipe 2 is gone".to_string()));
    }
}
