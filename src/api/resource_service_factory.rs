use hard_xml::XmlRead;
use crate::api::config;
use crate::api::error::ConfigError;
use crate::api::models::resources_xml::ResourcesElement;
use crate::api::ResourceService;

const BUNDLED_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Uses `STRINGS_XML_FILE_PATH` when set, the bundled strings otherwise.
    pub fn create() -> Result<ResourceService, ConfigError> {
        match config::optional_var("STRINGS_XML_FILE_PATH") {
            Some(strings_xml_file_path) => {
                let file_path = config::resolve_path(&strings_xml_file_path)?;
                let resource_xml_content = std::fs::read_to_string(&file_path)
                    .map_err(|source| ConfigError::Io { path: file_path.clone(), source })?;
                log::info!("Loading resource strings from {}", file_path.display());
                Self::from_xml(&resource_xml_content)
            },
            None => Self::bundled()
        }
    }

    pub fn bundled() -> Result<ResourceService, ConfigError> {
        Self::from_xml(BUNDLED_STRINGS_XML)
    }

    fn from_xml(resource_xml_content: &str) -> Result<ResourceService, ConfigError> {
        let resource_element = ResourcesElement::from_str(resource_xml_content)
            .map_err(|error| ConfigError::Xml(format!("{:?}", error)))?;
        Ok(ResourceService::new(resource_element))
    }
}
