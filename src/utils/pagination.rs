use crate::utils::database::{self, Collection, Database, Filter, FindOptions};
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::convert::Infallible;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Serialize, Debug)]
pub struct Paginated<T> {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: pagination.total_pages(total),
            data,
        }
    }
}

#[derive(Deserialize, Default)]
struct RawPagination {
    page: Option<String>,
    limit: Option<String>,
}

/// Normalized `page`/`limit` query options. Invalid values fall back to the
/// defaults instead of rejecting the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map(|value| value as u64)
}

impl Pagination {
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit)
                .filter(|limit| *limit <= MAX_LIMIT)
                .unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn find_options(&self) -> FindOptions {
        FindOptions {
            skip: self.skip(),
            limit: Some(self.limit),
            ..Default::default()
        }
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit.max(1))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawPagination>::try_from_uri(&parts.uri)
            .map(|Query(raw)| raw)
            .unwrap_or_default();

        Ok(Self::from_raw(raw.page.as_deref(), raw.limit.as_deref()))
    }
}

/// Fetches one page of `collection` (newest first) together with the total
/// number of matching documents. A failing count degrades to the page size.
pub async fn paginate<T: DeserializeOwned>(
    db: &Database,
    collection: Collection,
    filter: &Filter,
    pagination: Pagination,
) -> Result<Paginated<T>, database::Error> {
    let data = db
        .find_many_as::<T>(collection, filter, &pagination.find_options())
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch many {} documents: {}",
                collection.name(),
                err
            );
            err
        })?;

    let total = match db.count(collection, filter).await {
        Ok(total) => total,
        Err(err) => {
            tracing::warn!(
                "Failed to count {} documents, falling back to page size: {}",
                collection.name(),
                err
            );
            data.len() as u64
        }
    };

    Ok(Paginated::new(data, total, pagination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::database::{Document, DocumentStore};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::{sync::Arc, time::Duration};

    #[test]
    fn normalizes_page_and_limit() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_raw(Some("3"), Some("25")),
            Pagination { page: 3, limit: 25 }
        );
        assert_eq!(
            Pagination::from_raw(Some("0"), Some("101")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(
            Pagination::from_raw(Some("-2"), Some("abc")),
            Pagination { page: 1, limit: 10 }
        );
        assert_eq!(Pagination::from_raw(Some("2"), Some("100")).limit, 100);
    }

    #[test]
    fn skip_and_total_pages() {
        let pagination = Pagination { page: 2, limit: 5 };

        assert_eq!(pagination.skip(), 5);
        assert_eq!(pagination.total_pages(12), 3);
        assert_eq!(pagination.total_pages(10), 2);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(Pagination::default().skip(), 0);
    }

    #[tokio::test]
    async fn extracts_from_the_query_string() {
        let request = axum::http::Request::builder()
            .uri("/foods?page=4&limit=nope")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let pagination = Pagination::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(pagination, Pagination { page: 4, limit: 10 });
    }

    #[tokio::test]
    async fn paginates_newest_first() {
        let db = Database::in_memory();
        for day in 1..=12 {
            db.insert(
                Collection::Notes,
                &json!({
                    "note_id": format!("n{day}"),
                    "created_at": format!("2024-01-{day:02}T00:00:00Z"),
                }),
            )
            .await
            .unwrap();
        }

        let page = paginate::<Value>(
            &db,
            Collection::Notes,
            &Filter::All,
            Pagination { page: 2, limit: 5 },
        )
        .await
        .unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
        let ids = page
            .data
            .iter()
            .map(|note| note["note_id"].as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["n7", "n6", "n5", "n4", "n3"]);
    }

    /// Serves three notes but fails every count.
    struct Uncountable;

    #[async_trait]
    impl DocumentStore for Uncountable {
        async fn find_many(
            &self,
            _: Collection,
            _: &Filter,
            _: &FindOptions,
        ) -> Result<Vec<Document>, database::Error> {
            Ok((1..=3)
                .map(|n| {
                    let mut document = Document::new();
                    document.insert("note_id".to_string(), json!(format!("n{n}")));
                    document
                })
                .collect())
        }
        async fn count(&self, _: Collection, _: &Filter) -> Result<u64, database::Error> {
            Err(database::Error::Timeout(Duration::from_secs(10)))
        }
        async fn find_one(
            &self,
            _: Collection,
            _: &Filter,
        ) -> Result<Option<Document>, database::Error> {
            Ok(None)
        }
        async fn insert_one(&self, _: Collection, _: Document) -> Result<(), database::Error> {
            Ok(())
        }
        async fn update_one(
            &self,
            _: Collection,
            _: &Filter,
            _: Document,
        ) -> Result<u64, database::Error> {
            Ok(0)
        }
        async fn upsert_one(
            &self,
            _: Collection,
            _: &Filter,
            _: Document,
        ) -> Result<(), database::Error> {
            Ok(())
        }
        async fn close(&self) {}
    }

    #[tokio::test]
    async fn failing_count_falls_back_to_the_page_size() {
        let db = Database::new(Arc::new(Uncountable), Duration::from_secs(1));

        let page = paginate::<Value>(
            &db,
            Collection::Notes,
            &Filter::All,
            Pagination { page: 1, limit: 5 },
        )
        .await
        .unwrap();

        assert_eq!(page.data.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }
}
