//! Partial-update protocol shared by every entity.
//!
//! A sparse payload is validated, reduced to the fields it explicitly carries,
//! checked against the documents it references and applied as one atomic
//! "set named fields" operation on the document addressed by its external key.

use crate::utils::{
    database::{self, from_document, Collection, Database, Document, Filter},
    field::Field,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Default)]
pub struct FieldSet {
    fields: Document,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: Serialize>(
        &mut self,
        name: &str,
        field: Field<T>,
    ) -> Result<&mut Self, serde_json::Error> {
        match field {
            Field::Unset => {}
            Field::Null => {
                self.fields.insert(name.to_string(), serde_json::Value::Null);
            }
            Field::Value(value) => {
                self.fields
                    .insert(name.to_string(), serde_json::to_value(value)?);
            }
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn into_document(self) -> Document {
        self.fields
    }

    fn stamped(mut self, now: DateTime<Utc>) -> Result<Document, serde_json::Error> {
        self.set("updated_at", Field::Value(now))?;
        Ok(self.fields)
    }
}

/// A foreign key carried by a sparse payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// The referenced document must exist.
    Exists { collection: Collection, key: String },
    /// The referenced document must exist and its active window must contain
    /// the current time.
    Active { collection: Collection, key: String },
}

impl Reference {
    pub fn exists(collection: Collection, key: &str) -> Self {
        Self::Exists {
            collection,
            key: key.to_string(),
        }
    }

    pub fn active(collection: Collection, key: &str) -> Self {
        Self::Active {
            collection,
            key: key.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActiveWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl ActiveWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at <= self.end_date
    }

    pub fn is_ordered(&self) -> bool {
        self.start_date <= self.end_date
    }
}

pub trait SparseUpdate: Validate {
    const COLLECTION: Collection;

    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error>;
}

#[derive(Debug)]
pub enum Error {
    MissingKey,
    Validation(ValidationErrors),
    EmptyUpdate,
    NotFound,
    ReferenceNotFound(Collection),
    ReferenceNotActive(Collection),
    Database(database::Error),
}

impl From<database::Error> for Error {
    fn from(err: database::Error) -> Self {
        Self::Database(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Database(database::Error::Serde(err))
    }
}

async fn resolve(db: &Database, reference: Reference, now: DateTime<Utc>) -> Result<(), Error> {
    let (collection, key, require_active) = match reference {
        Reference::Exists { collection, key } => (collection, key, false),
        Reference::Active { collection, key } => (collection, key, true),
    };

    let document = db
        .find_one(collection, &Filter::key(collection, key.as_str()))
        .await?
        .ok_or(Error::ReferenceNotFound(collection))?;

    if require_active {
        let is_active = from_document::<ActiveWindow>(document)
            .map(|window| window.contains(now))
            .unwrap_or(false);
        if !is_active {
            return Err(Error::ReferenceNotActive(collection));
        }
    }

    Ok(())
}

pub async fn merge_update<P: SparseUpdate>(db: &Database, key: &str, payload: P) -> Result<(), Error> {
    merge_update_at(db, key, payload, Utc::now()).await
}

pub async fn merge_update_at<P: SparseUpdate>(
    db: &Database,
    key: &str,
    payload: P,
    now: DateTime<Utc>,
) -> Result<(), Error> {
    if key.trim().is_empty() {
        return Err(Error::MissingKey);
    }

    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        Error::Validation(errors)
    })?;

    let references = payload.references();
    let fields = payload.into_field_set()?;
    if fields.is_empty() {
        return Err(Error::EmptyUpdate);
    }

    for reference in references {
        resolve(db, reference, now).await?;
    }

    tracing::debug!(
        "Updating {} {} with fields {:?}",
        P::COLLECTION.name(),
        key,
        fields.names()
    );

    let matched = db
        .update_one(
            P::COLLECTION,
            &Filter::key(P::COLLECTION, key),
            fields.stamped(now)?,
        )
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update {} {}: {}",
                P::COLLECTION.name(),
                key,
                err
            );
            err
        })?;

    if matched == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use validator::ValidationError;

    #[derive(Default)]
    struct Rename {
        name: Field<String>,
        tag: Field<String>,
        menu_id: Field<String>,
    }

    impl Validate for Rename {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            if let Some(name) = self.name.as_value() {
                if name.len() < 2 {
                    errors.add("name", ValidationError::new("length"));
                }
            }
            if errors.is_empty() {
                Ok(())
            } else {
                Err(errors)
            }
        }
    }

    impl SparseUpdate for Rename {
        const COLLECTION: Collection = Collection::Foods;

        fn references(&self) -> Vec<Reference> {
            self.menu_id
                .as_value()
                .map(|menu_id| vec![Reference::active(Collection::Menus, menu_id)])
                .unwrap_or_default()
        }

        fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
            let mut fields = FieldSet::new();
            fields
                .set("name", self.name)?
                .set("tag", self.tag)?
                .set("menu_id", self.menu_id)?;
            Ok(fields)
        }
    }

    fn at(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    async fn seeded() -> Database {
        let db = Database::in_memory();
        db.insert(
            Collection::Foods,
            &json!({
                "food_id": "f1",
                "name": "Jollof",
                "tag": "rice",
                "menu_id": "m1",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
            }),
        )
        .await
        .unwrap();
        db.insert(
            Collection::Menus,
            &json!({
                "menu_id": "m2",
                "start_date": "2024-01-01T00:00:00Z",
                "end_date": "2024-01-08T00:00:00Z",
            }),
        )
        .await
        .unwrap();
        db
    }

    async fn food(db: &Database) -> Document {
        db.find_one(Collection::Foods, &Filter::key(Collection::Foods, "f1"))
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn sets_only_the_supplied_field_and_refreshes_updated_at() {
        let db = seeded().await;
        let before = food(&db).await;

        merge_update_at(
            &db,
            "f1",
            Rename {
                name: Field::Value("Fried rice".to_string()),
                ..Default::default()
            },
            at("2024-01-02T00:00:00Z"),
        )
        .await
        .unwrap();

        let after = food(&db).await;
        assert_eq!(after["name"], json!("Fried rice"));
        for field in ["_id", "food_id", "tag", "menu_id", "created_at"] {
            assert_eq!(after[field], before[field], "{field} changed");
        }
        let updated_at = |doc: &Document| at(doc["updated_at"].as_str().unwrap());
        assert!(updated_at(&after) > updated_at(&before));
    }

    #[tokio::test]
    async fn an_explicit_null_clears_the_field() {
        let db = seeded().await;

        merge_update_at(
            &db,
            "f1",
            Rename {
                tag: Field::Null,
                ..Default::default()
            },
            at("2024-01-02T00:00:00Z"),
        )
        .await
        .unwrap();

        assert_eq!(food(&db).await["tag"], json!(null));
    }

    #[tokio::test]
    async fn rejects_an_empty_update_without_touching_the_store() {
        let db = seeded().await;
        let before = food(&db).await;

        let result = merge_update(&db, "f1", Rename::default()).await;

        assert!(matches!(result, Err(Error::EmptyUpdate)));
        assert_eq!(food(&db).await, before);
    }

    #[tokio::test]
    async fn rejects_a_blank_key() {
        let db = seeded().await;

        let result = merge_update(
            &db,
            "  ",
            Rename {
                name: Field::Value("Fried rice".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(Error::MissingKey)));
    }

    #[tokio::test]
    async fn reports_validation_failures() {
        let db = seeded().await;

        let result = merge_update(
            &db,
            "f1",
            Rename {
                name: Field::Value("x".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn reports_an_unknown_key_as_not_found() {
        let db = seeded().await;

        let result = merge_update(
            &db,
            "nope",
            Rename {
                name: Field::Value("Fried rice".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn rejects_missing_and_inactive_references() {
        let db = seeded().await;
        let before = food(&db).await;
        let repoint = |menu_id: &str| Rename {
            menu_id: Field::Value(menu_id.to_string()),
            ..Default::default()
        };

        let missing = merge_update_at(&db, "f1", repoint("m9"), at("2024-01-02T00:00:00Z")).await;
        assert!(matches!(
            missing,
            Err(Error::ReferenceNotFound(Collection::Menus))
        ));

        let inactive = merge_update_at(&db, "f1", repoint("m2"), at("2024-02-01T00:00:00Z")).await;
        assert!(matches!(
            inactive,
            Err(Error::ReferenceNotActive(Collection::Menus))
        ));
        assert_eq!(food(&db).await, before);

        merge_update_at(&db, "f1", repoint("m2"), at("2024-01-02T00:00:00Z"))
            .await
            .unwrap();
        assert_eq!(food(&db).await["menu_id"], json!("m2"));
    }

    #[test]
    fn active_window_is_inclusive() {
        let start = at("2024-01-01T00:00:00Z");
        let window = ActiveWindow {
            start_date: start,
            end_date: start + Duration::days(7),
        };

        assert!(window.contains(start));
        assert!(window.contains(start + Duration::days(7)));
        assert!(!window.contains(start - Duration::seconds(1)));
        assert!(!window.contains(start + Duration::days(8)));
        assert!(window.is_ordered());
        assert!(!ActiveWindow {
            start_date: window.end_date,
            end_date: window.start_date,
        }
        .is_ordered());
    }
}
