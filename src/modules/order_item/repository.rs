use crate::{
    modules::food::{self, repository::Food},
    utils::{
        database::{self, Collection, Database, Filter, FindOptions},
        field::Field,
        pagination::{self, Paginated, Pagination},
        update::{self, FieldSet, Reference, SparseUpdate},
        validation,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// An order item together with the food it references, or `None` when the
/// food no longer exists.
#[derive(Serialize, Clone, Debug)]
pub struct EnrichedOrderItem {
    #[serde(flatten)]
    pub item: OrderItem,
    pub food_details: Option<Food>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateOrderItemPayload {
    pub order_id: String,
    pub food_id: String,
    pub quantity: i64,
    pub unit_price: f64,
}

pub async fn create(db: &Database, payload: CreateOrderItemPayload) -> Result<OrderItem, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let order_item = OrderItem {
        id: id.clone(),
        order_item_id: id,
        order_id: payload.order_id,
        food_id: payload.food_id,
        quantity: payload.quantity,
        unit_price: food::repository::round_price(payload.unit_price),
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::OrderItems, &order_item)
        .await
        .map(|_| order_item)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create an order item: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<OrderItem>, Error> {
    db.find_one_as::<OrderItem>(
        Collection::OrderItems,
        &Filter::key(Collection::OrderItems, id.clone()),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch an order item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many(
    db: &Database,
    pagination: Pagination,
) -> Result<Paginated<OrderItem>, Error> {
    pagination::paginate::<OrderItem>(db, Collection::OrderItems, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

/// Items of an order, oldest first.
pub async fn find_by_order_id(db: &Database, order_id: String) -> Result<Vec<OrderItem>, Error> {
    db.find_many_as::<OrderItem>(
        Collection::OrderItems,
        &Filter::eq("order_id", order_id.clone()),
        &FindOptions::oldest_first(),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch the items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Pairs every item with the foods matching its `food_id`, looked up in one
/// batch. Each pair carries zero or one food.
async fn left_join_foods(
    db: &Database,
    items: Vec<OrderItem>,
) -> Result<Vec<(OrderItem, Vec<Food>)>, Error> {
    let food_ids = items
        .iter()
        .map(|item| item.food_id.clone())
        .collect::<BTreeSet<_>>();
    if food_ids.is_empty() {
        return Ok(Vec::new());
    }

    let foods = food::repository::find_many_by_ids(db, food_ids.into_iter().collect())
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok(items
        .into_iter()
        .map(|item| {
            let matches = foods
                .iter()
                .filter(|food| food.food_id == item.food_id)
                .take(1)
                .cloned()
                .collect();
            (item, matches)
        })
        .collect())
}

fn flatten(joined: Vec<(OrderItem, Vec<Food>)>) -> Vec<EnrichedOrderItem> {
    joined
        .into_iter()
        .map(|(item, matches)| EnrichedOrderItem {
            item,
            food_details: matches.into_iter().next(),
        })
        .collect()
}

pub async fn find_enriched_by_order_id(
    db: &Database,
    order_id: String,
) -> Result<Vec<EnrichedOrderItem>, Error> {
    let items = find_by_order_id(db, order_id).await?;
    let joined = left_join_foods(db, items).await?;
    Ok(flatten(joined))
}

fn validate_id(id: &Field<String>) -> Result<(), ValidationError> {
    validation::id_field(id)
}

fn validate_quantity(quantity: &Field<i64>) -> Result<(), ValidationError> {
    validation::count_field(quantity, 1, i64::MAX)
}

fn validate_unit_price(unit_price: &Field<f64>) -> Result<(), ValidationError> {
    validation::amount_field(unit_price, 0.0)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateOrderItemPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub order_id: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub food_id: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_quantity"))]
    pub quantity: Field<i64>,
    #[serde(default)]
    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Field<f64>,
}

impl SparseUpdate for UpdateOrderItemPayload {
    const COLLECTION: Collection = Collection::OrderItems;

    fn references(&self) -> Vec<Reference> {
        let mut references = Vec::new();
        if let Some(order_id) = self.order_id.as_value() {
            references.push(Reference::exists(Collection::Orders, order_id));
        }
        if let Some(food_id) = self.food_id.as_value() {
            references.push(Reference::exists(Collection::Foods, food_id));
        }
        references
    }

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields
            .set("order_id", self.order_id)?
            .set("food_id", self.food_id)?
            .set("quantity", self.quantity)?
            .set("unit_price", self.unit_price.map(food::repository::round_price))?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateOrderItemPayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_food(db: &Database, name: &str) -> Food {
        food::repository::create(
            db,
            food::repository::CreateFoodPayload {
                name: name.to_string(),
                price: 1500.0,
                food_image: "https://cdn.example.com/food.png".to_string(),
                menu_id: "m1".to_string(),
            },
        )
        .await
        .unwrap()
    }

    async fn seed_item(db: &Database, order_id: &str, food_id: &str) -> OrderItem {
        create(
            db,
            CreateOrderItemPayload {
                order_id: order_id.to_string(),
                food_id: food_id.to_string(),
                quantity: 2,
                unit_price: 1500.0,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn enrichment_keeps_items_whose_food_is_gone() {
        let db = Database::in_memory();
        let jollof = seed_food(&db, "Jollof").await;
        let plantain = seed_food(&db, "Plantain").await;
        seed_item(&db, "o1", &jollof.food_id).await;
        seed_item(&db, "o1", "deleted-food").await;
        seed_item(&db, "o1", &plantain.food_id).await;
        seed_item(&db, "o1", &jollof.food_id).await;
        seed_item(&db, "o2", &jollof.food_id).await;

        let plain = find_by_order_id(&db, "o1".to_string()).await.unwrap();
        let enriched = find_enriched_by_order_id(&db, "o1".to_string())
            .await
            .unwrap();

        assert_eq!(enriched.len(), plain.len());
        assert_eq!(enriched.len(), 4);
        let details = enriched
            .iter()
            .map(|item| item.food_details.as_ref().map(|food| food.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            details,
            vec![Some("Jollof"), None, Some("Plantain"), Some("Jollof")]
        );
        assert!(enriched
            .iter()
            .zip(plain.iter())
            .all(|(enriched, plain)| &enriched.item == plain));
    }

    #[tokio::test]
    async fn enrichment_of_an_empty_order_is_empty() {
        let db = Database::in_memory();

        let enriched = find_enriched_by_order_id(&db, "o1".to_string())
            .await
            .unwrap();

        assert!(enriched.is_empty());
    }

    #[test]
    fn enriched_items_serialize_flat() {
        let now = Utc::now();
        let item = EnrichedOrderItem {
            item: OrderItem {
                id: "i1".to_string(),
                order_item_id: "i1".to_string(),
                order_id: "o1".to_string(),
                food_id: "f1".to_string(),
                quantity: 1,
                unit_price: 10.0,
                created_at: now,
                updated_at: now,
            },
            food_details: None,
        };

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["order_item_id"], "i1");
        assert!(value["food_details"].is_null());
    }
}
