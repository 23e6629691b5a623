use std::sync::Arc;
use crate::api::error::ServiceError;
use crate::api::models::commands::UnitOfMeasureCommand;
use crate::api::UnitOfMeasureRepository;

pub struct UnitOfMeasureService {
    unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository>
}

impl UnitOfMeasureService {
    pub fn new(unit_of_measure_repository: Arc<dyn UnitOfMeasureRepository>) -> UnitOfMeasureService {
        UnitOfMeasureService { unit_of_measure_repository }
    }

    pub async fn list_all_uoms(&self) -> Result<Vec<UnitOfMeasureCommand>, ServiceError> {
        let mut units_of_measure = self.unit_of_measure_repository.find_all().await?;
        units_of_measure.sort_by(|left, right| left.description.cmp(&right.description));
        Ok(units_of_measure.iter().map(UnitOfMeasureCommand::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::bootstrap::default_units_of_measure;
    use crate::api::UnitOfMeasureDocumentStore;

    #[tokio::test]
    async fn lists_units_sorted_by_description() {
        let service = UnitOfMeasureService::new(Arc::new(UnitOfMeasureDocumentStore::new(default_units_of_measure())));

        let units_of_measure = service.list_all_uoms().await.unwrap();

        let descriptions: Vec<&str> = units_of_measure.iter().filter_map(|unit| unit.description.as_deref()).collect();
        assert_eq!(descriptions, vec!["Cup", "Dash", "Each", "Ounce", "Pinch", "Pint", "Tablespoon", "Teaspoon"]);
    }
}
