use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::api::error::StoreError;
use crate::api::models::domain::UnitOfMeasure;

/// Read-only lookup of measurement units.
#[async_trait]
pub trait UnitOfMeasureRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<UnitOfMeasure>, StoreError>;

    async fn find_all(&self) -> Result<Vec<UnitOfMeasure>, StoreError>;
}

/// Units are loaded once at startup and never change afterwards.
pub struct UnitOfMeasureDocumentStore {
    units_of_measure: BTreeMap<String, UnitOfMeasure>
}

impl UnitOfMeasureDocumentStore {
    pub fn new(units_of_measure: Vec<UnitOfMeasure>) -> UnitOfMeasureDocumentStore {
        UnitOfMeasureDocumentStore {
            units_of_measure: units_of_measure.into_iter().map(|unit| (unit.id.clone(), unit)).collect()
        }
    }
}

#[async_trait]
impl UnitOfMeasureRepository for UnitOfMeasureDocumentStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<UnitOfMeasure>, StoreError> {
        Ok(self.units_of_measure.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UnitOfMeasure>, StoreError> {
        Ok(self.units_of_measure.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_units_by_id() {
        let store = UnitOfMeasureDocumentStore::new(vec![
            UnitOfMeasure::new("cup", "Cup"),
            UnitOfMeasure::new("pinch", "Pinch")
        ]);

        assert_eq!(store.find_by_id("pinch").await.unwrap(), Some(UnitOfMeasure::new("pinch", "Pinch")));
        assert_eq!(store.find_by_id("gallon").await.unwrap(), None);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }
}
