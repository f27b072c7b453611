//! [`EntityApi`] over a [`KeyValueStore`] for screens that are not wired to
//! the backend yet. Records are kept as one JSON array per entity type,
//! under the record's collection name.

use async_trait::async_trait;
use contracts::domain::common::{new_local_id, EntityRecord, FromPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use super::{ApiError, EntityApi};
use crate::shared::storage::{load_json, save_json, KeyValueStore};

#[derive(Clone, Debug)]
pub struct LocalEntityApi<R, P, S> {
    store: S,
    _marker: PhantomData<(R, P)>,
}

impl<R, P, S> LocalEntityApi<R, P, S>
where
    R: EntityRecord + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    fn key() -> &'static str {
        R::collection_name()
    }

    fn load(&self) -> Result<Vec<R>, ApiError> {
        Ok(load_json::<Vec<R>, _>(&self.store, Self::key())?.unwrap_or_default())
    }

    fn save(&self, records: &[R]) -> Result<(), ApiError> {
        save_json(&self.store, Self::key(), records)?;
        Ok(())
    }

    /// Replaces the stored records (demo seeding)
    pub fn seed(&self, records: &[R]) -> Result<(), ApiError> {
        self.save(records)
    }
}

#[async_trait(?Send)]
impl<R, P, S> EntityApi for LocalEntityApi<R, P, S>
where
    R: EntityRecord + FromPayload<P> + Serialize + DeserializeOwned + 'static,
    P: Serialize + Clone + 'static,
    S: KeyValueStore,
{
    type Record = R;
    type Payload = P;

    async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.load()
    }

    async fn create(&self, payload: &P) -> Result<R, ApiError> {
        let mut records = self.load()?;
        let record = R::from_payload(new_local_id(), payload);
        records.push(record.clone());
        self.save(&records)?;
        log::debug!("{} \"{}\" saved locally", R::element_name(), record.title());
        Ok(record)
    }

    async fn update(&self, id: &str, payload: &P) -> Result<R, ApiError> {
        let mut records = self.load()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ApiError::not_found(R::element_name()))?;
        *slot = R::from_payload(id.to_string(), payload);
        let record = slot.clone();
        self.save(&records)?;
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(ApiError::not_found(R::element_name()));
        }
        self.save(&records)?;
        Ok(Some(format!("{} deleted", R::element_name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use contracts::domain::a006_discount::aggregate::{Discount, DiscountPayload};
    use chrono::NaiveDate;
    use futures::executor::block_on;

    type DiscountStore = LocalEntityApi<Discount, DiscountPayload, MemoryStore>;

    fn payload(name: &str) -> DiscountPayload {
        DiscountPayload {
            name: name.into(),
            percent: 15.0,
            start_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
            product_ids: vec!["p1".into()],
        }
    }

    #[test]
    fn test_create_persists_under_collection_key() {
        let store = MemoryStore::new();
        let api = DiscountStore::new(store.clone());

        let created = block_on(api.create(&payload("Black Friday"))).unwrap();
        assert!(!created.id.is_empty());
        assert!(store.get(Discount::collection_name()).is_some());

        let reloaded = DiscountStore::new(store);
        let all = block_on(reloaded.list()).unwrap();
        assert_eq!(all, vec![created]);
    }

    #[test]
    fn test_update_keeps_id_and_unknown_id_fails() {
        let api = DiscountStore::new(MemoryStore::new());
        let created = block_on(api.create(&payload("Spring"))).unwrap();

        let updated = block_on(api.update(&created.id, &payload("Spring sale"))).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Spring sale");

        let err = block_on(api.update("missing", &payload("x"))).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(block_on(api.list()).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let api = DiscountStore::new(MemoryStore::new());
        let a = block_on(api.create(&payload("A"))).unwrap();
        let b = block_on(api.create(&payload("B"))).unwrap();

        let message = block_on(api.delete(&a.id)).unwrap();
        assert_eq!(message.as_deref(), Some("Discount deleted"));
        assert_eq!(block_on(api.list()).unwrap(), vec![b]);
        assert!(block_on(api.delete(&a.id)).is_err());
    }

    #[test]
    fn test_corrupt_storage_surfaces_as_error() {
        let store = MemoryStore::new();
        store.set(Discount::collection_name(), "[{broken").unwrap();
        let api = DiscountStore::new(store);
        assert!(matches!(block_on(api.list()), Err(ApiError::Storage(_))));
    }
}
