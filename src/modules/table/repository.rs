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
pub struct Table {
    #[serde(rename = "_id")]
    pub id: String,
    pub table_id: String,
    pub number_of_guests: i64,
    pub table_number: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateTablePayload {
    pub number_of_guests: i64,
    pub table_number: i64,
}

pub async fn create(db: &Database, payload: CreateTablePayload) -> Result<Table, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let table = Table {
        id: id.clone(),
        table_id: id,
        number_of_guests: payload.number_of_guests,
        table_number: payload.table_number,
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Tables, &table)
        .await
        .map(|_| table)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a table: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Table>, Error> {
    db.find_one_as::<Table>(Collection::Tables, &Filter::key(Collection::Tables, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a table by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Table>, Error> {
    pagination::paginate::<Table>(db, Collection::Tables, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_number_of_guests(number_of_guests: &Field<i64>) -> Result<(), ValidationError> {
    validation::count_field(number_of_guests, 1, 100)
}

fn validate_table_number(table_number: &Field<i64>) -> Result<(), ValidationError> {
    validation::count_field(table_number, 1, i64::MAX)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateTablePayload {
    #[serde(default)]
    #[validate(custom(function = "validate_number_of_guests"))]
    pub number_of_guests: Field<i64>,
    #[serde(default)]
    #[validate(custom(function = "validate_table_number"))]
    pub table_number: Field<i64>,
}

impl SparseUpdate for UpdateTablePayload {
    const COLLECTION: Collection = Collection::Tables;

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields
            .set("number_of_guests", self.number_of_guests)?
            .set("table_number", self.table_number)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateTablePayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}
