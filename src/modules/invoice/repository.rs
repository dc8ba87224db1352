use crate::{
    modules::order_item::repository::EnrichedOrderItem,
    utils::{
        database::{self, Collection, Database, Filter},
        field::Field,
        pagination::{self, Paginated, Pagination},
        update::{self, FieldSet, Reference, SparseUpdate},
        validation,
    },
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_id: String,
    pub order_id: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An invoice with the line items of its order and the amount they add up to.
#[derive(Serialize, Debug)]
pub struct InvoiceView {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub table_number: Option<i64>,
    pub payment_due: f64,
    pub order_details: Vec<EnrichedOrderItem>,
}

impl InvoiceView {
    pub fn new(
        invoice: Invoice,
        table_number: Option<i64>,
        order_details: Vec<EnrichedOrderItem>,
    ) -> Self {
        let total = order_details
            .iter()
            .map(|detail| detail.item.subtotal())
            .sum::<f64>();

        Self {
            invoice,
            table_number,
            payment_due: (total * 100.0).round() / 100.0,
            order_details,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateInvoicePayload {
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
}

pub async fn create(db: &Database, payload: CreateInvoicePayload) -> Result<Invoice, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let invoice = Invoice {
        id: id.clone(),
        invoice_id: id,
        order_id: payload.order_id,
        payment_method: payload.payment_method,
        payment_status: payload.payment_status.unwrap_or_default(),
        payment_due_date: now + Duration::days(1),
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Invoices, &invoice)
        .await
        .map(|_| invoice)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create an invoice: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Invoice>, Error> {
    db.find_one_as::<Invoice>(
        Collection::Invoices,
        &Filter::key(Collection::Invoices, id.clone()),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch an invoice by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Invoice>, Error> {
    pagination::paginate::<Invoice>(db, Collection::Invoices, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_order_id(order_id: &Field<String>) -> Result<(), ValidationError> {
    validation::id_field(order_id)
}

fn validate_payment_status(payment_status: &Field<PaymentStatus>) -> Result<(), ValidationError> {
    validation::present_field(payment_status)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateInvoicePayload {
    #[serde(default)]
    #[validate(custom(function = "validate_order_id"))]
    pub order_id: Field<String>,
    #[serde(default)]
    pub payment_method: Field<PaymentMethod>,
    #[serde(default)]
    #[validate(custom(function = "validate_payment_status"))]
    pub payment_status: Field<PaymentStatus>,
}

impl SparseUpdate for UpdateInvoicePayload {
    const COLLECTION: Collection = Collection::Invoices;

    fn references(&self) -> Vec<Reference> {
        self.order_id
            .as_value()
            .map(|order_id| vec![Reference::exists(Collection::Orders, order_id)])
            .unwrap_or_default()
    }

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields
            .set("order_id", self.order_id)?
            .set("payment_method", self.payment_method)?
            .set("payment_status", self.payment_status)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateInvoicePayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}
