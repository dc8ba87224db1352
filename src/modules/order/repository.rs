use crate::utils::{
    database::{self, Collection, Database, Filter},
    field::Field,
    pagination::{self, Paginated, Pagination},
    update::{self, FieldSet, Reference, SparseUpdate},
    validation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub table_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateOrderPayload {
    pub table_id: Option<String>,
}

pub async fn create(db: &Database, payload: CreateOrderPayload) -> Result<Order, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let order = Order {
        id: id.clone(),
        order_id: id,
        order_date: now,
        table_id: payload.table_id,
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Orders, &order)
        .await
        .map(|_| order)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create an order: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Order>, Error> {
    db.find_one_as::<Order>(Collection::Orders, &Filter::key(Collection::Orders, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch an order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Order>, Error> {
    pagination::paginate::<Order>(db, Collection::Orders, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_order_date(order_date: &Field<DateTime<Utc>>) -> Result<(), ValidationError> {
    validation::present_field(order_date)
}

fn validate_table_id(table_id: &Field<String>) -> Result<(), ValidationError> {
    validation::nullable_id_field(table_id)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateOrderPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_order_date"))]
    pub order_date: Field<DateTime<Utc>>,
    /// `null` detaches the order from its table.
    #[serde(default)]
    #[validate(custom(function = "validate_table_id"))]
    pub table_id: Field<String>,
}

impl SparseUpdate for UpdateOrderPayload {
    const COLLECTION: Collection = Collection::Orders;

    fn references(&self) -> Vec<Reference> {
        self.table_id
            .as_value()
            .map(|table_id| vec![Reference::exists(Collection::Tables, table_id)])
            .unwrap_or_default()
    }

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields
            .set("order_date", self.order_date)?
            .set("table_id", self.table_id)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateOrderPayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}
