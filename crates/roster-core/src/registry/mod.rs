//! Contractor registry: the authoritative record list and its mutators.
//!
//! The registry owns the canonical `Vec<Contractor>` in storage order and
//! persists the whole list to one named slot after every mutation. It is
//! generic over the slot backend so roster-core never depends on
//! roster-infra.

pub mod seed;
pub mod validate;

use roster_types::contractor::{Contractor, ContractorId, ContractorInput};
use roster_types::error::{ContractorError, RepositoryError};

use crate::storage::slot_store::SlotStore;

/// Service owning the contractor list and its persistence slot.
pub struct ContractorRegistry<S: SlotStore> {
    store: S,
    slot_key: String,
    records: Vec<Contractor>,
    /// Set when the last slot write failed; cleared by the next good write.
    dirty: bool,
}

impl<S: SlotStore> ContractorRegistry<S> {
    /// Open the registry on `slot_key`, loading (or seeding) the record list.
    pub async fn open(store: S, slot_key: impl Into<String>) -> Result<Self, ContractorError> {
        let mut registry = Self {
            store,
            slot_key: slot_key.into(),
            records: Vec::new(),
            dirty: false,
        };
        registry.load().await?;
        Ok(registry)
    }

    /// Re-read the slot and replace the in-memory list with its content.
    ///
    /// An absent or blank slot is seeded with the default set, which is
    /// persisted immediately. Unsaved in-memory changes are discarded.
    pub async fn load(&mut self) -> Result<&[Contractor], ContractorError> {
        let raw = self
            .store
            .read(&self.slot_key)
            .await
            .map_err(|e| ContractorError::Storage(e.to_string()))?;

        match raw {
            Some(text) if !text.trim().is_empty() => {
                self.records = serde_json::from_str(&text).map_err(|e| {
                    ContractorError::Storage(format!(
                        "slot '{}' does not hold a contractor list: {e}",
                        self.slot_key
                    ))
                })?;
                self.dirty = false;
                tracing::debug!(slot = %self.slot_key, count = self.records.len(), "contractors loaded");
            }
            _ => {
                tracing::info!(slot = %self.slot_key, "no persisted contractors, seeding defaults");
                self.records = seed::seed_contractors();
                self.persist().await;
            }
        }

        Ok(&self.records)
    }

    /// Current records in storage order.
    pub fn records(&self) -> &[Contractor] {
        &self.records
    }

    /// Name of the slot this registry persists to.
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Whether the in-memory list has changes the slot does not have.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn contains(&self, id: ContractorId) -> bool {
        self.records.iter().any(|c| c.id == id)
    }

    /// Get a contractor by id.
    pub fn get(&self, id: ContractorId) -> Result<&Contractor, ContractorError> {
        self.records
            .iter()
            .find(|c| c.id == id)
            .ok_or(ContractorError::NotFound(id))
    }

    /// Validate and append a new contractor.
    ///
    /// The new record gets `max(existing ids, 0) + 1` and the last serial.
    /// Fails with `IdsExhausted` when the largest stored id is `i64::MAX`.
    pub async fn add(&mut self, input: ContractorInput) -> Result<&[Contractor], ContractorError> {
        let input = validate::validate(&input)?;
        let id = self.next_id()?;

        self.records.push(Contractor {
            id,
            serial: 0,
            name: input.name,
            contact_number: input.contact_number,
            address: input.address,
            remarks: input.remarks,
        });
        renumber_serials(&mut self.records);

        tracing::info!(%id, count = self.records.len(), "contractor added");
        self.persist().await;
        Ok(&self.records)
    }

    /// Replace the content fields of an existing contractor.
    ///
    /// `id` and `serial` are left untouched, so no renumbering happens.
    pub async fn update(
        &mut self,
        id: ContractorId,
        input: ContractorInput,
    ) -> Result<&[Contractor], ContractorError> {
        let input = validate::validate(&input)?;
        let record = self
            .records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContractorError::NotFound(id))?;
        record.apply(input);

        tracing::info!(%id, "contractor updated");
        self.persist().await;
        Ok(&self.records)
    }

    /// Remove a contractor and renumber the rest. No-op if `id` is absent.
    pub async fn remove(&mut self, id: ContractorId) -> &[Contractor] {
        let before = self.records.len();
        self.records.retain(|c| c.id != id);

        if self.records.len() == before {
            tracing::debug!(%id, "remove: no such contractor");
            return &self.records;
        }

        renumber_serials(&mut self.records);
        tracing::info!(%id, count = self.records.len(), "contractor removed");
        self.persist().await;
        &self.records
    }

    /// Write the current list to the slot, surfacing any failure.
    pub async fn flush(&mut self) -> Result<(), ContractorError> {
        match self.write_slot().await {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(ContractorError::Storage(e.to_string()))
            }
        }
    }

    fn next_id(&self) -> Result<ContractorId, ContractorError> {
        let max = ContractorId(self.records.iter().map(|c| c.id.0).max().unwrap_or(0).max(0));
        max.next().ok_or(ContractorError::IdsExhausted(max))
    }

    /// Best-effort persist after a mutation. A failed write keeps the
    /// in-memory list and marks the registry dirty; the next mutation or
    /// `flush` rewrites the whole list.
    async fn persist(&mut self) {
        if let Err(e) = self.flush().await {
            tracing::warn!(slot = %self.slot_key, error = %e, "failed to persist contractors, keeping in-memory state");
        }
    }

    async fn write_slot(&self) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(&self.records)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        self.store.write(&self.slot_key, &payload).await?;
        tracing::debug!(slot = %self.slot_key, bytes = payload.len(), "contractors persisted");
        Ok(())
    }
}

/// Make `serial` equal `index + 1` for every record, keeping relative order.
pub fn renumber_serials(records: &mut [Contractor]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.serial = index as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use roster_types::contractor::ContractorField;

    // --- Mock slot store for testing ---

    /// In-memory slot store whose state stays inspectable after being moved
    /// into a registry.
    #[derive(Clone, Default)]
    struct MockSlots {
        slots: Arc<Mutex<HashMap<String, String>>>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MockSlots {
        fn with_slot(key: &str, value: &str) -> Self {
            let slots = Self::default();
            slots.slots.lock().unwrap().insert(key.to_string(), value.to_string());
            slots
        }

        fn raw(&self, key: &str) -> Option<String> {
            self.slots.lock().unwrap().get(key).cloned()
        }

        fn persisted(&self, key: &str) -> Vec<Contractor> {
            serde_json::from_str(&self.raw(key).unwrap()).unwrap()
        }

        fn set_failing(&self, failing: bool) {
            self.fail_writes.store(failing, Ordering::SeqCst);
        }
    }

    impl SlotStore for MockSlots {
        async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            Ok(self.raw(key))
        }

        async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(RepositoryError::Io("disk full".to_string()));
            }
            self.slots.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const KEY: &str = "contractors";

    async fn empty_registry() -> (ContractorRegistry<MockSlots>, MockSlots) {
        let slots = MockSlots::with_slot(KEY, "[]");
        let registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();
        (registry, slots)
    }

    fn input(name: &str) -> ContractorInput {
        ContractorInput::new(name, "+880 17 0000 0000", "", "")
    }

    fn serials(records: &[Contractor]) -> Vec<u32> {
        records.iter().map(|c| c.serial).collect()
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_open_seeds_and_persists_when_slot_absent() {
        let slots = MockSlots::default();
        let registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();

        assert_eq!(registry.records().len(), 24);
        assert_eq!(slots.persisted(KEY), seed::seed_contractors());
        assert!(!registry.is_dirty());
    }

    #[tokio::test]
    async fn test_open_keeps_persisted_empty_list() {
        let (registry, _) = empty_registry().await;
        assert!(registry.records().is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_slot() {
        let slots = MockSlots::with_slot(KEY, "{not json");
        let err = ContractorRegistry::open(slots, KEY).await.err().unwrap();
        assert!(matches!(err, ContractorError::Storage(_)));
    }

    #[tokio::test]
    async fn test_add_assigns_dense_serials_in_insertion_order() {
        let (mut registry, _) = empty_registry().await;
        for i in 0..5 {
            registry.add(input(&format!("Contractor {i}"))).await.unwrap();
        }

        let records = registry.records();
        assert_eq!(serials(records), vec![1, 2, 3, 4, 5]);
        assert_eq!(records[0].id, ContractorId(1));
        assert_eq!(records[4].name, "Contractor 4");
    }

    #[tokio::test]
    async fn test_add_then_load_returns_trimmed_input_with_next_id() {
        let slots = MockSlots::default();
        let mut registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();
        let prior_max = registry.records().iter().map(|c| c.id).max().unwrap();

        registry
            .add(ContractorInput::new("  Delta Works ", " +880 11 2222 3333", " Motijheel ", " Tiling "))
            .await
            .unwrap();

        let mut reopened = ContractorRegistry::open(slots, KEY).await.unwrap();
        let records = reopened.load().await.unwrap();
        let last = records.last().unwrap();
        assert_eq!(Some(last.id), prior_max.next());
        assert_eq!(last.name, "Delta Works");
        assert_eq!(last.contact_number, "+880 11 2222 3333");
        assert_eq!(last.address, "Motijheel");
        assert_eq!(last.remarks, "Tiling");
    }

    #[tokio::test]
    async fn test_add_to_empty_starts_at_one() {
        let (mut registry, _) = empty_registry().await;
        let records = registry.add(input("First")).await.unwrap();
        assert_eq!(records[0].id, ContractorId::FIRST);
        assert_eq!(records[0].serial, 1);
    }

    #[tokio::test]
    async fn test_add_invalid_creates_nothing() {
        let (mut registry, slots) = empty_registry().await;
        let err = registry
            .add(ContractorInput::new("", "abc", "", ""))
            .await
            .unwrap_err();

        let fields: Vec<_> = err.field_errors().iter().map(|f| f.field).collect();
        assert_eq!(fields, vec![ContractorField::Name, ContractorField::ContactNumber]);
        assert!(registry.records().is_empty());
        assert_eq!(slots.raw(KEY).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_add_fails_when_ids_exhausted() {
        let stored = format!(
            r#"[{{"id":{},"sNo":1,"name":"Last","contactNo":"+880 17 0000 0000","address":"","remarks":""}}]"#,
            i64::MAX
        );
        let slots = MockSlots::with_slot(KEY, &stored);
        let mut registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();

        let err = registry.add(input("Overflow")).await.unwrap_err();
        assert!(matches!(err, ContractorError::IdsExhausted(ContractorId(i64::MAX))));
        assert_eq!(registry.records().len(), 1);
        assert_eq!(slots.raw(KEY).unwrap(), stored);
    }

    #[tokio::test]
    async fn test_id_not_reused_after_deleting_middle() {
        let (mut registry, _) = empty_registry().await;
        for name in ["A", "B", "C"] {
            registry.add(input(name)).await.unwrap();
        }
        registry.remove(ContractorId(2)).await;
        let records = registry.add(input("D")).await.unwrap();
        assert_eq!(records.last().unwrap().id, ContractorId(4));
    }

    #[tokio::test]
    async fn test_remove_renumbers_preserving_order() {
        let slots = MockSlots::default();
        let mut registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();

        let records = registry.remove(ContractorId(3)).await;
        assert_eq!(records.len(), 23);
        assert_eq!(serials(records), (1..=23).collect::<Vec<_>>());
        assert_eq!(records[1].id, ContractorId(2));
        assert_eq!(records[2].id, ContractorId(4));
        assert_eq!(slots.persisted(KEY).len(), 23);
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let slots = MockSlots::default();
        let mut registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();
        let before = slots.raw(KEY);

        let records = registry.remove(ContractorId(999)).await;
        assert_eq!(records.len(), 24);
        assert_eq!(slots.raw(KEY), before);
    }

    #[tokio::test]
    async fn test_update_replaces_content_only() {
        let slots = MockSlots::default();
        let mut registry = ContractorRegistry::open(slots.clone(), KEY).await.unwrap();

        registry
            .update(ContractorId(5), ContractorInput::new("Eng Haroon", "+880 18 1938 1120", " Uttara ", "Roads"))
            .await
            .unwrap();

        let record = registry.get(ContractorId(5)).unwrap();
        assert_eq!(record.serial, 5);
        assert_eq!(record.name, "Eng Haroon");
        assert_eq!(record.address, "Uttara");
        assert_eq!(slots.persisted(KEY)[4].remarks, "Roads");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (mut registry, _) = empty_registry().await;
        let err = registry.update(ContractorId(7), input("X")).await.unwrap_err();
        assert!(matches!(err, ContractorError::NotFound(ContractorId(7))));
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let slots = MockSlots::default();
        let mut registry = ContractorRegistry::open(slots, KEY).await.unwrap();
        registry.remove(ContractorId(1)).await;
        registry.add(input("Late Addition")).await.unwrap();

        let first = registry.load().await.unwrap().to_vec();
        let second = registry.load().await.unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.last().unwrap().name, "Late Addition");
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_and_retries() {
        let (mut registry, slots) = empty_registry().await;
        slots.set_failing(true);

        let records = registry.add(input("Kept")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(registry.is_dirty());
        assert_eq!(slots.raw(KEY).unwrap(), "[]");

        slots.set_failing(false);
        registry.add(input("Second")).await.unwrap();
        assert!(!registry.is_dirty());
        assert_eq!(slots.persisted(KEY).len(), 2);
    }

    #[tokio::test]
    async fn test_flush_surfaces_write_error() {
        let (mut registry, slots) = empty_registry().await;
        slots.set_failing(true);
        assert!(matches!(registry.flush().await, Err(ContractorError::Storage(_))));
        assert!(registry.is_dirty());
    }
}
