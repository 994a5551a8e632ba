//! Read-only repositories over reference data

use super::types::Identified;
use super::CatalogError;
use std::collections::BTreeMap;

/// Read model over one kind of reference entity
///
/// Scoring and pricing code only talks to this trait, so the in-memory
/// tables can later be swapped for a real datastore.
pub trait ReferenceRepository<T>: Send + Sync {
    /// Look up an entity by id
    fn get(&self, id: &str) -> Option<T>;
    /// All entities, ordered by id
    fn get_all(&self) -> Vec<T>;
    /// Number of registered entities
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository backed by an ordered map built once at startup
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entries: BTreeMap<String, T>,
}

impl<T: Identified> InMemoryRepository<T> {
    /// Build from records, rejecting duplicate ids
    pub fn from_records(
        kind: &'static str,
        records: impl IntoIterator<Item = T>,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        for record in records {
            let id = record.id().to_string();
            if entries.contains_key(&id) {
                return Err(CatalogError::DuplicateId { kind, id });
            }
            entries.insert(id, record);
        }
        Ok(Self { entries })
    }
}

impl<T> ReferenceRepository<T> for InMemoryRepository<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
