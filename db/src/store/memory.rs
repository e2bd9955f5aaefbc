//! In-process document store.
//!
//! Keeps each collection as an insertion-ordered `Vec` behind a mutex. Used by
//! the test suites and for running the API without a database. It can be
//! flipped into failure modes and counts every call so tests can assert that
//! a handler never reached the store.

use super::{Document, DocumentStore, InsertResult, SortKey, SortOrder};
use crate::{Collection, StoreError};
use async_trait::async_trait;
use mongodb::bson::{Bson, oid::ObjectId};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    unavailable: AtomicBool,
    reject_inserts: AtomicBool,
    operations: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Inserts fail with [`StoreError::OperationFailed`]; reads and deletes still work.
    pub fn set_reject_inserts(&self, reject: bool) {
        self.reject_inserts.store(reject, AtomicOrdering::SeqCst);
    }

    /// Number of gateway calls made so far, including failed ones.
    pub fn operation_count(&self) -> usize {
        self.operations.load(AtomicOrdering::SeqCst)
    }

    /// Snapshot of a collection in insertion order, without counting as an operation.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.lock().get(&collection).cloned().unwrap_or_default()
    }

    /// Seeds a collection directly, bypassing the gateway and its counters.
    pub fn seed(&self, collection: Collection, documents: Vec<Document>) {
        let mut guard = self.lock();
        let stored = guard.entry(collection).or_default();
        stored.extend(documents.into_iter().map(with_object_id).map(|(doc, _)| doc));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Collection, Vec<Document>>> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.operations.fetch_add(1, AtomicOrdering::SeqCst);
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store is marked unavailable".into(),
            ));
        }
        Ok(())
    }

    fn begin_insert(&self) -> Result<(), StoreError> {
        self.begin()?;
        if self.reject_inserts.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::OperationFailed(
                "in-memory store is rejecting inserts".into(),
            ));
        }
        Ok(())
    }
}

/// Places a fresh `_id` at the front of the document unless the caller supplied one.
fn with_object_id(document: Document) -> (Document, Bson) {
    if let Some(id) = document.get("_id") {
        let id = id.clone();
        return (document, id);
    }

    let id = Bson::ObjectId(ObjectId::new());
    let mut stored = Document::new();
    stored.insert("_id", id.clone());
    for (key, value) in document {
        stored.insert(key, value);
    }
    (stored, id)
}

/// Orders values by type class first, then by value within the class.
fn type_rank(value: &Bson) -> u8 {
    match value {
        Bson::Null | Bson::Undefined => 0,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) | Bson::Decimal128(_) => 1,
        Bson::String(_) | Bson::Symbol(_) => 2,
        Bson::Document(_) => 3,
        Bson::Array(_) => 4,
        Bson::Binary(_) => 5,
        Bson::ObjectId(_) => 6,
        Bson::Boolean(_) => 7,
        Bson::DateTime(_) => 8,
        Bson::Timestamp(_) => 9,
        _ => 10,
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn compare_values(a: &Bson, b: &Bson) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Bson::String(x), Bson::String(y)) => x.cmp(y),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => x.bytes().cmp(&y.bytes()),
        (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
        (Bson::DateTime(x), Bson::DateTime(y)) => x.cmp(y),
        _ => match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

fn compare_documents(a: &Document, b: &Document, sort: &[SortKey]) -> Ordering {
    for key in sort {
        let left = a.get(&key.field).unwrap_or(&Bson::Null);
        let right = b.get(&key.field).unwrap_or(&Bson::Null);
        let ordering = match key.order {
            SortOrder::Ascending => compare_values(left, right),
            SortOrder::Descending => compare_values(right, left),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        self.begin_insert()?;
        let (stored, id) = with_object_id(document);
        self.lock().entry(collection).or_default().push(stored);

        Ok(InsertResult {
            acknowledged: true,
            inserted_ids: vec![id],
        })
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<InsertResult, StoreError> {
        self.begin_insert()?;
        let mut guard = self.lock();
        let stored = guard.entry(collection).or_default();

        let mut inserted_ids = Vec::with_capacity(documents.len());
        for document in documents {
            let (doc, id) = with_object_id(document);
            stored.push(doc);
            inserted_ids.push(id);
        }

        Ok(InsertResult {
            acknowledged: true,
            inserted_ids,
        })
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.begin()?;
        Ok(self.documents(collection))
    }

    async fn find_sorted(
        &self,
        collection: Collection,
        sort: &[SortKey],
    ) -> Result<Vec<Document>, StoreError> {
        self.begin()?;
        let mut documents = self.documents(collection);
        // Stable: ties keep insertion order.
        documents.sort_by(|a, b| compare_documents(a, b, sort));
        Ok(documents)
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError> {
        self.begin()?;
        let removed = self.lock().remove(&collection).unwrap_or_default();
        Ok(removed.len() as u64)
    }
}
