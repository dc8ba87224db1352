use super::{generate_id, Collection, Document, DocumentStore, Error, Filter, FindOptions, Sort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Document store kept in process memory. Documents of a collection are held
/// in insertion order.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

fn created_at(document: &Document) -> Option<DateTime<Utc>> {
    document
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.with_timezone(&Utc))
}

fn violates_unique_fields(
    collection: Collection,
    documents: &[Document],
    candidate: &Document,
    skip: Option<usize>,
) -> bool {
    collection.unique_fields().iter().any(|field| {
        match candidate.get(*field) {
            None | Some(Value::Null) => false,
            Some(value) => documents
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != skip)
                .any(|(_, existing)| existing.get(*field) == Some(value)),
        }
    })
}

impl MemoryDocumentStore {
    fn select<'a>(
        documents: &'a [Document],
        filter: &Filter,
        options: &FindOptions,
    ) -> Vec<&'a Document> {
        let mut selected = documents
            .iter()
            .enumerate()
            .filter(|(_, document)| filter.matches(document))
            .collect::<Vec<_>>();

        selected.sort_by(|(a_index, a), (b_index, b)| {
            let order = created_at(a)
                .cmp(&created_at(b))
                .then(a_index.cmp(b_index));
            match options.sort {
                Sort::Oldest => order,
                Sort::Newest => order.reverse(),
            }
        });

        let skip = usize::try_from(options.skip).unwrap_or(usize::MAX);
        let limit = options
            .limit
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        selected
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|(_, document)| document)
            .collect()
    }

    fn apply_set(
        collection: Collection,
        documents: &mut [Document],
        filter: &Filter,
        set: &Document,
    ) -> Result<u64, Error> {
        let Some(index) = documents.iter().position(|document| filter.matches(document)) else {
            return Ok(0);
        };

        let mut updated = documents[index].clone();
        for (field, value) in set {
            updated.insert(field.clone(), value.clone());
        }

        if violates_unique_fields(collection, documents, &updated, Some(index)) {
            return Err(Error::Conflict);
        }

        documents[index] = updated;
        Ok(1)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Document>, Error> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(Self::select(documents, filter, options)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, Error> {
        let collections = self.collections.read().await;
        let count = collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .count()
            })
            .unwrap_or(0);

        Ok(count as u64)
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, Error> {
        let collections = self.collections.read().await;

        Ok(collections.get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| filter.matches(document))
                .cloned()
        }))
    }

    async fn insert_one(&self, collection: Collection, mut document: Document) -> Result<(), Error> {
        if !document.contains_key("_id") {
            document.insert("_id".to_string(), Value::String(generate_id()));
        }

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if violates_unique_fields(collection, documents, &document, None) {
            return Err(Error::Conflict);
        }

        documents.push(document);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, Error> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        Self::apply_set(collection, documents, filter, &set)
    }

    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<(), Error> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if Self::apply_set(collection, documents, filter, &set)? > 0 {
            return Ok(());
        }

        let mut document = filter.equalities();
        document.insert("_id".to_string(), Value::String(generate_id()));
        document.extend(set);

        if violates_unique_fields(collection, documents, &document, None) {
            return Err(Error::Conflict);
        }

        documents.push(document);
        Ok(())
    }

    async fn close(&self) {
        tracing::debug!("Closing the in-memory document store");
    }
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

    async fn seeded() -> MemoryDocumentStore {
        let store = MemoryDocumentStore::default();
        for (id, created_at) in [
            ("a", "2024-01-01T10:00:00Z"),
            ("b", "2024-01-03T10:00:00Z"),
            ("c", "2024-01-02T10:00:00Z"),
        ] {
            store
                .insert_one(
                    Collection::Notes,
                    document(json!({ "note_id": id, "created_at": created_at })),
                )
                .await
                .unwrap();
        }
        store
    }

    fn ids(documents: &[Document]) -> Vec<&str> {
        documents
            .iter()
            .map(|document| document["note_id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn find_many_sorts_and_pages() {
        let store = seeded().await;

        let newest = store
            .find_many(Collection::Notes, &Filter::All, &FindOptions::default())
            .await
            .unwrap();
        assert_eq!(ids(&newest), vec!["b", "c", "a"]);

        let page = store
            .find_many(
                Collection::Notes,
                &Filter::All,
                &FindOptions {
                    skip: 1,
                    limit: Some(1),
                    sort: Sort::Oldest,
                },
            )
            .await
            .unwrap();
        assert_eq!(ids(&page), vec!["c"]);
    }

    #[tokio::test]
    async fn insert_generates_a_primary_identity_and_enforces_unique_keys() {
        let store = seeded().await;

        let found = store
            .find_one(Collection::Notes, &Filter::eq("note_id", "a"))
            .await
            .unwrap()
            .unwrap();
        assert!(found["_id"].as_str().is_some());

        let duplicate = store
            .insert_one(Collection::Notes, document(json!({ "note_id": "a" })))
            .await;
        assert!(matches!(duplicate, Err(Error::Conflict)));
    }

    #[tokio::test]
    async fn update_one_sets_only_the_given_fields() {
        let store = seeded().await;

        let matched = store
            .update_one(
                Collection::Notes,
                &Filter::eq("note_id", "c"),
                document(json!({ "title": "Specials" })),
            )
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let found = store
            .find_one(Collection::Notes, &Filter::eq("note_id", "c"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["title"], json!("Specials"));
        assert_eq!(found["created_at"], json!("2024-01-02T10:00:00Z"));

        let missing = store
            .update_one(
                Collection::Notes,
                &Filter::eq("note_id", "zzz"),
                document(json!({ "title": "x" })),
            )
            .await
            .unwrap();
        assert_eq!(missing, 0);
    }

    #[tokio::test]
    async fn upsert_creates_the_document_when_nothing_matches() {
        let store = MemoryDocumentStore::default();
        let filter = Filter::eq("user_id", "u1");

        store
            .upsert_one(Collection::Users, &filter, document(json!({ "token": "t1" })))
            .await
            .unwrap();
        store
            .upsert_one(Collection::Users, &filter, document(json!({ "token": "t2" })))
            .await
            .unwrap();

        assert_eq!(store.count(Collection::Users, &Filter::All).await.unwrap(), 1);
        let found = store
            .find_one(Collection::Users, &filter)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["token"], json!("t2"));
    }
}
