use serde::Serialize;

#[derive(FromForm, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitOfMeasureCommand {
    pub id: Option<String>,
    pub description: Option<String>
}
