use hard_xml::{ XmlRead, XmlWrite };

/// A named, user-facing string. Content may be a handlebars template.
#[derive(XmlWrite, XmlRead, PartialEq, Debug, Clone)]
#[xml(tag = "string")]
pub struct StringElement {
    #[xml(attr = "name")]
    pub name: String,
    #[xml(text)]
    pub content: String,
}
