mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use crate::types::DatabaseConfig;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{future::Future, sync::Arc, time::Duration};
use ulid::Ulid;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A schemaless document as it is persisted by the store.
pub type Document = serde_json::Map<String, Value>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Foods,
    Menus,
    Tables,
    Orders,
    OrderItems,
    Invoices,
    Users,
    Notes,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Self::Foods,
        Self::Menus,
        Self::Tables,
        Self::Orders,
        Self::OrderItems,
        Self::Invoices,
        Self::Users,
        Self::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Foods => "food",
            Self::Menus => "menu",
            Self::Tables => "table",
            Self::Orders => "order",
            Self::OrderItems => "order_item",
            Self::Invoices => "invoice",
            Self::Users => "user",
            Self::Notes => "note",
        }
    }

    /// The field holding the external key clients use to address a document.
    pub fn key_field(&self) -> &'static str {
        match self {
            Self::Foods => "food_id",
            Self::Menus => "menu_id",
            Self::Tables => "table_id",
            Self::Orders => "order_id",
            Self::OrderItems => "order_item_id",
            Self::Invoices => "invoice_id",
            Self::Users => "user_id",
            Self::Notes => "note_id",
        }
    }

    pub fn unique_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Foods => &["food_id"],
            Self::Menus => &["menu_id"],
            Self::Tables => &["table_id"],
            Self::Orders => &["order_id"],
            Self::OrderItems => &["order_item_id"],
            Self::Invoices => &["invoice_id"],
            Self::Users => &["user_id", "email", "phone"],
            Self::Notes => &["note_id"],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    All,
    Eq(String, Value),
    In(String, Vec<Value>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn key(collection: Collection, key: impl Into<String>) -> Self {
        Self::eq(collection.key_field(), key.into())
    }

    pub fn any_of(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::In(field.into(), values)
    }

    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Eq(field, value) => document.get(field) == Some(value),
            Self::In(field, values) => document
                .get(field)
                .map(|found| values.contains(found))
                .unwrap_or(false),
            Self::Or(filters) => filters.iter().any(|filter| filter.matches(document)),
        }
    }

    /// Field/value pairs a document must carry to match, used to seed upserts.
    pub fn equalities(&self) -> Document {
        let mut seed = Document::new();
        if let Self::Eq(field, value) = self {
            seed.insert(field.clone(), value.clone());
        }
        seed
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sort {
    #[default]
    Newest,
    Oldest,
}

#[derive(Clone, Debug, Default)]
pub struct FindOptions {
    pub skip: u64,
    pub limit: Option<u64>,
    pub sort: Sort,
}

impl FindOptions {
    pub fn oldest_first() -> Self {
        Self {
            sort: Sort::Oldest,
            ..Default::default()
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("a document with the same unique value already exists")]
    Conflict,
    #[error("failed to encode or decode document: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Keyed document store. Implementations only need single-document atomicity.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Document>, Error>;

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, Error>;

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, Error>;

    async fn insert_one(&self, collection: Collection, document: Document) -> Result<(), Error>;

    /// Sets the given fields on the first matching document and returns the
    /// number of matched documents.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, Error>;

    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<(), Error>;

    async fn close(&self);
}

/// Shared handle to the document store. Every operation is bounded by `timeout`.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
    timeout: Duration,
}

impl Database {
    pub fn new(store: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDocumentStore::default()), DEFAULT_TIMEOUT)
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| Error::Timeout(self.timeout))?
    }

    pub async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Document>, Error> {
        self.bounded(self.store.find_many(collection, filter, options))
            .await
    }

    pub async fn find_many_as<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<T>, Error> {
        self.find_many(collection, filter, options)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    pub async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, Error> {
        self.bounded(self.store.count(collection, filter)).await
    }

    pub async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, Error> {
        self.bounded(self.store.find_one(collection, filter)).await
    }

    pub async fn find_one_as<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<T>, Error> {
        self.find_one(collection, filter)
            .await?
            .map(from_document)
            .transpose()
    }

    pub async fn insert<T: Serialize>(&self, collection: Collection, value: &T) -> Result<(), Error> {
        let document = to_document(value)?;
        self.bounded(self.store.insert_one(collection, document))
            .await
    }

    pub async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, Error> {
        self.bounded(self.store.update_one(collection, filter, set))
            .await
    }

    pub async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<(), Error> {
        self.bounded(self.store.upsert_one(collection, filter, set))
            .await
    }

    pub async fn close(&self) {
        self.store.close().await
    }
}

pub fn generate_id() -> String {
    Ulid::new().to_string()
}

pub fn to_document<T: Serialize>(value: &T) -> Result<Document, Error> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        other => Err(Error::Serde(<serde_json::Error as serde::ser::Error>::custom(
            format!("expected an object, found {other}"),
        ))),
    }
}

pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, Error> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

pub async fn connect(config: &DatabaseConfig) -> Result<Database, Error> {
    if config.url.starts_with("memory://") {
        tracing::warn!("Using the in-memory document store, data will not survive a restart");
        return Ok(Database::new(
            Arc::new(MemoryDocumentStore::default()),
            config.timeout,
        ));
    }

    let store = PgDocumentStore::connect(&config.url, config.max_connections)
        .await
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            err
        })?;
    store.migrate().await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })?;

    Ok(Database::new(Arc::new(store), config.timeout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(document) => document,
            _ => unreachable!(),
        }
    }

    #[test]
    fn filter_matches_on_equality_membership_and_alternatives() {
        let doc = document(json!({ "email": "a@b.co", "phone": "+2341" }));

        assert!(Filter::All.matches(&doc));
        assert!(Filter::eq("email", "a@b.co").matches(&doc));
        assert!(!Filter::eq("email", "x@b.co").matches(&doc));
        assert!(Filter::any_of("phone", vec![json!("+1"), json!("+2341")]).matches(&doc));
        assert!(!Filter::any_of("missing", vec![json!(null)]).matches(&doc));
        assert!(Filter::Or(vec![
            Filter::eq("email", "nobody@b.co"),
            Filter::eq("phone", "+2341"),
        ])
        .matches(&doc));
        assert!(!Filter::Or(vec![]).matches(&doc));
    }

    #[test]
    fn key_filter_uses_the_collection_key_field() {
        assert_eq!(
            Filter::key(Collection::OrderItems, "01J"),
            Filter::Eq("order_item_id".to_string(), json!("01J"))
        );
    }

    #[test]
    fn to_document_rejects_non_objects() {
        assert!(to_document(&json!([1, 2])).is_err());
        assert!(to_document(&json!({ "a": 1 })).is_ok());
    }

    #[tokio::test]
    async fn operations_are_bounded_by_the_timeout() {
        struct Stalled;

        #[async_trait]
        impl DocumentStore for Stalled {
            async fn find_many(
                &self,
                _: Collection,
                _: &Filter,
                _: &FindOptions,
            ) -> Result<Vec<Document>, Error> {
                std::future::pending().await
            }
            async fn count(&self, _: Collection, _: &Filter) -> Result<u64, Error> {
                std::future::pending().await
            }
            async fn find_one(&self, _: Collection, _: &Filter) -> Result<Option<Document>, Error> {
                std::future::pending().await
            }
            async fn insert_one(&self, _: Collection, _: Document) -> Result<(), Error> {
                std::future::pending().await
            }
            async fn update_one(&self, _: Collection, _: &Filter, _: Document) -> Result<u64, Error> {
                std::future::pending().await
            }
            async fn upsert_one(&self, _: Collection, _: &Filter, _: Document) -> Result<(), Error> {
                std::future::pending().await
            }
            async fn close(&self) {}
        }

        let db = Database::new(Arc::new(Stalled), Duration::from_millis(20));

        assert!(matches!(
            db.count(Collection::Foods, &Filter::All).await,
            Err(Error::Timeout(_))
        ));
    }
}
