use crate::utils::{
    database::{self, Collection, Database, Filter},
    field::Field,
    pagination::{self, Paginated, Pagination},
    update::{self, FieldSet, Reference, SparseUpdate},
    validation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: String,
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Prices are kept with two decimal places.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateFoodPayload {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
}

pub async fn create(db: &Database, payload: CreateFoodPayload) -> Result<Food, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let food = Food {
        id: id.clone(),
        food_id: id,
        name: payload.name,
        price: round_price(payload.price),
        food_image: payload.food_image,
        menu_id: payload.menu_id,
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Foods, &food)
        .await
        .map(|_| food)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a food: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Food>, Error> {
    db.find_one_as::<Food>(Collection::Foods, &Filter::key(Collection::Foods, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a food by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

/// Looks up every food whose key is in `ids` with a single query.
pub async fn find_many_by_ids(db: &Database, ids: Vec<String>) -> Result<Vec<Food>, Error> {
    let keys = ids.into_iter().map(Value::String).collect::<Vec<_>>();

    db.find_many_as::<Food>(
        Collection::Foods,
        &Filter::any_of(Collection::Foods.key_field(), keys),
        &database::FindOptions::default(),
    )
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch foods by ids: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Food>, Error> {
    pagination::paginate::<Food>(db, Collection::Foods, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_name(name: &Field<String>) -> Result<(), ValidationError> {
    validation::text_field(name, 2, 100)
}

fn validate_price(price: &Field<f64>) -> Result<(), ValidationError> {
    validation::amount_field(price, 0.0)
}

fn validate_food_image(food_image: &Field<String>) -> Result<(), ValidationError> {
    validation::text_field(food_image, 1, 500)
}

fn validate_menu_id(menu_id: &Field<String>) -> Result<(), ValidationError> {
    validation::id_field(menu_id)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateFoodPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    pub price: Field<f64>,
    #[serde(default)]
    #[validate(custom(function = "validate_food_image"))]
    pub food_image: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_menu_id"))]
    pub menu_id: Field<String>,
}

impl SparseUpdate for UpdateFoodPayload {
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
            .set("price", self.price.map(round_price))?
            .set("food_image", self.food_image)?
            .set("menu_id", self.menu_id)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateFoodPayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rounds_prices_to_two_decimals() {
        assert_eq!(round_price(12.346), 12.35);
        assert_eq!(round_price(3.0), 3.0);
        assert_eq!(round_price(0.004), 0.0);
    }

    #[test]
    fn field_set_carries_the_rounded_price_only() {
        let payload: UpdateFoodPayload = serde_json::from_value(json!({ "price": 9.999 })).unwrap();

        let fields = payload.into_field_set().unwrap().into_document();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["price"], json!(10.0));
    }

    #[test]
    fn menu_reference_must_be_active() {
        let payload: UpdateFoodPayload = serde_json::from_value(json!({ "menu_id": "m1" })).unwrap();

        assert_eq!(
            payload.references(),
            vec![Reference::active(Collection::Menus, "m1")]
        );
    }
}
