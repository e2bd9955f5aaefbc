//! Store Gateway: the capability set every backend offers over a named collection.

pub mod memory;
pub mod mongo;

use crate::{Collection, StoreError};
use async_trait::async_trait;
use mongodb::bson::Bson;

pub use mongodb::bson::Document;

/// Direction for one key of a [`DocumentStore::find_sorted`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub order: SortOrder,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Descending,
        }
    }
}

/// Acknowledgment returned by both insert operations.
///
/// `inserted_ids` is in the same order as the documents that were passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_ids: Vec<Bson>,
}

impl InsertResult {
    pub fn inserted_count(&self) -> usize {
        self.inserted_ids.len()
    }

    /// The identifier of the first (for `insert_one`, the only) inserted document.
    pub fn inserted_id(&self) -> Option<&Bson> {
        self.inserted_ids.first()
    }
}

/// A document collection gateway scoped to one logical database.
///
/// Implementations hold at most one live connection and reuse it across calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertResult, StoreError>;

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<InsertResult, StoreError>;

    /// Every document in the collection, in store-native order.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Every document ordered by `sort`. Tie order is unspecified.
    async fn find_sorted(
        &self,
        collection: Collection,
        sort: &[SortKey],
    ) -> Result<Vec<Document>, StoreError>;

    /// Removes every document in the collection and returns how many were removed.
    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError>;
}
