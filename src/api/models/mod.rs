pub mod domain;
pub mod commands;
pub mod resources_xml;
