use super::{generate_id, Collection, Document, DocumentStore, Error, Filter, FindOptions, Sort};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Postgres, QueryBuilder};

/// Document store backed by the `documents` table: one JSONB row per document.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

fn map_error(err: sqlx::Error) -> Error {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => Error::Conflict,
        _ => Error::Backend(err),
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    match filter {
        Filter::All => {
            builder.push("TRUE");
        }
        Filter::Eq(field, value) => {
            builder
                .push("document -> ")
                .push_bind(field.clone())
                .push(" = ")
                .push_bind(Json(value.clone()));
        }
        Filter::In(field, values) => {
            let alternatives = values
                .iter()
                .map(|value| Filter::Eq(field.clone(), value.clone()))
                .collect();
            push_filter(builder, &Filter::Or(alternatives));
        }
        Filter::Or(filters) if filters.is_empty() => {
            builder.push("FALSE");
        }
        Filter::Or(filters) => {
            builder.push("(");
            for (index, filter) in filters.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                push_filter(builder, filter);
            }
            builder.push(")");
        }
    }
}

fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, collection: Collection, filter: &Filter) {
    builder
        .push(" WHERE collection = ")
        .push_bind(collection.name())
        .push(" AND ");
    push_filter(builder, filter);
}

/// Pushes a sub-select resolving the row id of the first matching document.
fn push_first_match(
    builder: &mut QueryBuilder<'_, Postgres>,
    collection: Collection,
    filter: &Filter,
) {
    builder.push("(SELECT id FROM documents");
    push_scope(builder, collection, filter);
    builder.push(" ORDER BY created_at ASC, id ASC LIMIT 1)");
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Document>, Error> {
        let mut builder = QueryBuilder::new("SELECT document FROM documents");
        push_scope(&mut builder, collection, filter);
        builder.push(match options.sort {
            Sort::Newest => " ORDER BY created_at DESC, id DESC",
            Sort::Oldest => " ORDER BY created_at ASC, id ASC",
        });
        if let Some(limit) = options.limit {
            builder.push(" LIMIT ").push_bind(limit as i64);
        }
        builder.push(" OFFSET ").push_bind(options.skip as i64);

        builder
            .build_query_scalar::<Json<Document>>()
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(|Json(document)| document).collect())
            .map_err(map_error)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, Error> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM documents");
        push_scope(&mut builder, collection, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_error)
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, Error> {
        let mut builder = QueryBuilder::new("SELECT document FROM documents");
        push_scope(&mut builder, collection, filter);
        builder.push(" ORDER BY created_at ASC, id ASC LIMIT 1");

        builder
            .build_query_scalar::<Json<Document>>()
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(|Json(document)| document))
            .map_err(map_error)
    }

    async fn insert_one(&self, collection: Collection, mut document: Document) -> Result<(), Error> {
        let id = match document.get("_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                let id = generate_id();
                document.insert("_id".to_string(), Value::String(id.clone()));
                id
            }
        };

        sqlx::query("INSERT INTO documents (id, collection, document) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection.name())
            .bind(Json(document))
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, Error> {
        let mut builder = QueryBuilder::new("UPDATE documents SET document = document || ");
        builder.push_bind(Json(set)).push(" WHERE id = ");
        push_first_match(&mut builder, collection, filter);

        builder
            .build()
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(map_error)
    }

    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<(), Error> {
        let id = generate_id();
        let mut seed = filter.equalities();
        seed.insert("_id".to_string(), Value::String(id.clone()));
        seed.extend(set.clone());

        let mut builder =
            QueryBuilder::new("WITH updated AS (UPDATE documents SET document = document || ");
        builder.push_bind(Json(set)).push(" WHERE id = ");
        push_first_match(&mut builder, collection, filter);
        builder
            .push(" RETURNING id) INSERT INTO documents (id, collection, document) SELECT ")
            .push_bind(id)
            .push(", ")
            .push_bind(collection.name())
            .push(", ")
            .push_bind(Json(seed))
            .push(" WHERE NOT EXISTS (SELECT 1 FROM updated)");

        builder
            .build()
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn close(&self) {
        self.pool.close().await
    }
}
