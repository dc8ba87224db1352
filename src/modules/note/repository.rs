use crate::utils::{
    database::{self, Collection, Database, Filter},
    field::Field,
    pagination::{self, Paginated, Pagination},
    update::{self, FieldSet, SparseUpdate},
    validation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub note_id: String,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateNotePayload {
    pub title: String,
    pub text: String,
}

pub async fn create(db: &Database, payload: CreateNotePayload) -> Result<Note, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let note = Note {
        id: id.clone(),
        note_id: id,
        title: payload.title,
        text: payload.text,
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Notes, &note)
        .await
        .map(|_| note)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a note: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Note>, Error> {
    db.find_one_as::<Note>(Collection::Notes, &Filter::key(Collection::Notes, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a note by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Note>, Error> {
    pagination::paginate::<Note>(db, Collection::Notes, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_title(title: &Field<String>) -> Result<(), ValidationError> {
    validation::text_field(title, 2, 100)
}

fn validate_text(text: &Field<String>) -> Result<(), ValidationError> {
    validation::text_field(text, 2, 1000)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateNotePayload {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_text"))]
    pub text: Field<String>,
}

impl SparseUpdate for UpdateNotePayload {
    const COLLECTION: Collection = Collection::Notes;

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields.set("title", self.title)?.set("text", self.text)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateNotePayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}
