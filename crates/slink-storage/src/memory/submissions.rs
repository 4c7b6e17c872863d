use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use slink_core::repository::{Result, SubmissionRepository};
use slink_core::{StorageError, SubmissionRecord};

/// In-memory implementation of [`SubmissionRepository`] using DashMap.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    storage: DashMap<String, SubmissionRecord>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, record: SubmissionRecord) -> Result<()> {
        match self.storage.entry(record.token.clone()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateToken(record.token)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, token: &str) -> Result<Option<SubmissionRecord>> {
        Ok(self.storage.get(token).map(|entry| entry.value().clone()))
    }
}
