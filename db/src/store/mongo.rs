use super::{Document, DocumentStore, InsertResult, SortKey, SortOrder};
use crate::{Collection, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Database, bson::doc};
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// MongoDB-backed gateway.
///
/// The client is created lazily by the first operation and cached for the
/// lifetime of the store. Later calls never reconnect or close it.
pub struct MongoStore {
    uri: String,
    database_name: String,
    database: OnceCell<Database>,
}

impl MongoStore {
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
            database: OnceCell::new(),
        }
    }

    async fn database(&self) -> Result<&Database, StoreError> {
        self.database
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri)
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                info!(database = %self.database_name, "MongoDB client initialized");
                Ok(client.database(&self.database_name))
            })
            .await
    }

    async fn collection(
        &self,
        collection: Collection,
    ) -> Result<mongodb::Collection<Document>, StoreError> {
        Ok(self.database().await?.collection(collection.name()))
    }
}

fn sort_document(sort: &[SortKey]) -> Document {
    let mut order = Document::new();
    for key in sort {
        let direction = match key.order {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        };
        order.insert(key.field.clone(), direction);
    }
    order
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        let result = self.collection(collection).await?.insert_one(document).await?;
        debug!(%collection, "insert_one acknowledged");

        Ok(InsertResult {
            acknowledged: true,
            inserted_ids: vec![result.inserted_id],
        })
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<InsertResult, StoreError> {
        // The driver rejects an empty batch outright.
        if documents.is_empty() {
            return Ok(InsertResult {
                acknowledged: true,
                inserted_ids: Vec::new(),
            });
        }

        let result = self
            .collection(collection)
            .await?
            .insert_many(documents)
            .await?;

        let mut ids: Vec<_> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);
        debug!(%collection, count = ids.len(), "insert_many acknowledged");

        Ok(InsertResult {
            acknowledged: true,
            inserted_ids: ids.into_iter().map(|(_, id)| id).collect(),
        })
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).await?.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_sorted(
        &self,
        collection: Collection,
        sort: &[SortKey],
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)
            .await?
            .find(doc! {})
            .sort(sort_document(sort))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, StoreError> {
        let result = self
            .collection(collection)
            .await?
            .delete_many(doc! {})
            .await?;
        Ok(result.deleted_count)
    }
}
