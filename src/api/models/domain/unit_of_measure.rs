use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UnitOfMeasure {
    pub id: String,
    pub description: String
}

impl UnitOfMeasure {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        UnitOfMeasure { id: id.into(), description: description.into() }
    }
}
