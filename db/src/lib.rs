//! Persistence layer for the attendance backend.
//!
//! Handlers talk to the document store only through [`store::DocumentStore`].
//! [`connect`] builds the production MongoDB gateway from the loaded
//! configuration. Tests substitute [`store::memory::MemoryStore`].

pub mod collection;
pub mod error;
pub mod json;
pub mod models;
pub mod store;

pub use collection::Collection;
pub use mongodb::bson;
pub use error::StoreError;
pub use store::{Document, DocumentStore, InsertResult, SortKey};

use std::sync::Arc;
use store::mongo::MongoStore;
use util::config;

/// Builds the shared store handle for the process.
///
/// No network traffic happens here. The MongoDB client is created on first
/// use and then reused for every later call.
pub fn connect() -> Arc<dyn DocumentStore> {
    Arc::new(MongoStore::new(config::mongodb_uri(), config::database_name()))
}
