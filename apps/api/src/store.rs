//! Document store collaborator.
//!
//! The scoring core only ever sees `Arc<dyn DocumentStore>`; the Postgres
//! implementation keeps every collection in one JSONB table.

use std::future::Future;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;
use uuid::Uuid;

use crate::db::ensure_schema;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Document fields must be a JSON object")]
    NotAnObject,
}

/// Outcome of a best-effort write. Callers decide what a failure means;
/// the assessment flow turns anything but `Stored` into an absent id.
#[derive(Debug)]
pub enum PersistOutcome {
    Stored(String),
    /// No store is configured.
    Skipped,
    Failed(StoreError),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Configured store name, as reported by diagnostics.
    fn name(&self) -> &str;

    /// Inserts `fields` into `collection` and returns the new document id.
    async fn create_document(&self, collection: &str, fields: Value) -> Result<String, StoreError>;

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Distinct collection names, sorted.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;
}

/// Stamps `created_at` / `updated_at` onto an object of fields.
fn stamp(fields: Value) -> Result<Value, StoreError> {
    let Value::Object(mut map) = fields else {
        return Err(StoreError::NotAnObject);
    };
    let now = json!(Utc::now());
    map.insert("created_at".to_string(), now.clone());
    map.insert("updated_at".to_string(), now);
    Ok(Value::Object(map))
}

/// One-time setup that is retried by later callers until it succeeds once.
/// A failed attempt leaves the guard unset.
#[derive(Default)]
pub struct SchemaGuard {
    ready: OnceCell<()>,
}

impl SchemaGuard {
    pub async fn ensure<F, Fut, E>(&self, init: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.ready.get_or_try_init(init).await.map(|_| ())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }
}

pub struct PgDocumentStore {
    pool: PgPool,
    name: String,
    schema: SchemaGuard,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
            schema: SchemaGuard::default(),
        }
    }

    /// Bootstraps the document table. Cheap once it has succeeded;
    /// until then every store call tries again.
    pub async fn prepare(&self) -> Result<(), StoreError> {
        if self.schema.is_ready() {
            return Ok(());
        }
        self.schema.ensure(|| ensure_schema(&self.pool)).await?;
        info!("Document schema ready");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, fields: Value) -> Result<String, StoreError> {
        let data = stamp(fields)?;
        self.prepare().await?;
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(&data)
            .execute(&self.pool)
            .await?;

        Ok(id.to_string())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        self.prepare().await?;

        let data: Option<Value> =
            sqlx::query_scalar("SELECT data FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(data.map(|mut doc| {
            if let Value::Object(map) = &mut doc {
                map.insert("id".to_string(), json!(id.to_string()));
            }
            doc
        }))
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.prepare().await?;
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }
}
