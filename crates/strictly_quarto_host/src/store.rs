//! Key-value storage for table records.

use crate::error::StoreError;
use crate::record::TableRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Key-value store of table records.
///
/// Implementations return owned copies; mutating a fetched record never
/// affects what is stored until it is written back with [`GameStore::set`].
pub trait GameStore {
    /// Fetches a record, `None` if absent.
    fn get(&self, id: &str) -> Result<Option<TableRecord>, StoreError>;

    /// Stores a record, replacing any previous one.
    fn set(&self, id: &str, record: TableRecord) -> Result<(), StoreError>;

    /// Removes a record. Removing an absent id is not an error.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory store shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, TableRecord>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating memory store");
        Self::default()
    }

    /// Ids of all stored records.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Result<Vec<String>, StoreError> {
        let records = self.records.lock()?;
        Ok(records.keys().cloned().collect())
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self))]
    fn get(&self, id: &str) -> Result<Option<TableRecord>, StoreError> {
        let records = self.records.lock()?;
        let record = records.get(id).cloned();
        if record.is_none() {
            debug!(id, "Record not found");
        }
        Ok(record)
    }

    #[instrument(skip(self, record))]
    fn set(&self, id: &str, record: TableRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock()?;
        records.insert(id.to_string(), record);
        debug!(id, "Record stored");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock()?;
        records.remove(id);
        debug!(id, "Record deleted");
        Ok(())
    }
}
