use hard_xml::{ XmlRead, XmlWrite };
use crate::api::models::resources_xml::StringElement;

#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "resources")]
pub struct ResourcesElement {
    #[xml(child = "string")]
    pub strings: Vec<StringElement>,
}

impl ResourcesElement {
    pub fn find(&self, name: &str) -> Option<&StringElement> {
        self.strings.iter().find(|string_element| string_element.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_strings() {
        let resources = ResourcesElement::from_str(
            r#"<resources><string name="not_found_title">Not Found</string><string name="bad_request_title">Bad Request</string></resources>"#
        ).unwrap();

        assert_eq!(resources.strings.len(), 2);
        assert_eq!(resources.find("bad_request_title").map(|element| element.content.as_str()), Some("Bad Request"));
        assert!(resources.find("missing").is_none());
    }
}
