use crate::utils::{
    database::{self, Collection, Database, Filter},
    field::Field,
    pagination::{self, Paginated, Pagination},
    update::{self, ActiveWindow, FieldSet, SparseUpdate},
    validation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Menu {
    #[serde(rename = "_id")]
    pub id: String,
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    pub fn window(&self) -> ActiveWindow {
        ActiveWindow {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateMenuPayload {
    pub name: String,
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

pub async fn create(db: &Database, payload: CreateMenuPayload) -> Result<Menu, Error> {
    let id = database::generate_id();
    let now = Utc::now();
    let menu = Menu {
        id: id.clone(),
        menu_id: id,
        name: payload.name,
        category: payload.category,
        start_date: payload.start_date,
        end_date: payload.end_date,
        created_at: now,
        updated_at: now,
    };

    db.insert(Collection::Menus, &menu)
        .await
        .map(|_| menu)
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a menu: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<Menu>, Error> {
    db.find_one_as::<Menu>(Collection::Menus, &Filter::key(Collection::Menus, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a menu by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<Menu>, Error> {
    pagination::paginate::<Menu>(db, Collection::Menus, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

fn validate_name(name: &Field<String>) -> Result<(), ValidationError> {
    validation::text_field(name, 2, 100)
}

fn validate_date(date: &Field<DateTime<Utc>>) -> Result<(), ValidationError> {
    validation::present_field(date)
}

#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateMenuPayload {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub category: Field<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_date"))]
    pub start_date: Field<DateTime<Utc>>,
    #[serde(default)]
    #[validate(custom(function = "validate_date"))]
    pub end_date: Field<DateTime<Utc>>,
}

impl UpdateMenuPayload {
    /// The new active window, when the payload replaces both of its bounds.
    pub fn window(&self) -> Option<ActiveWindow> {
        match (&self.start_date, &self.end_date) {
            (Field::Value(start_date), Field::Value(end_date)) => Some(ActiveWindow {
                start_date: *start_date,
                end_date: *end_date,
            }),
            _ => None,
        }
    }

    pub fn touches_window(&self) -> bool {
        !(self.start_date.is_unset() && self.end_date.is_unset())
    }

    /// The window `menu` would have once the payload is applied, when the
    /// payload touches either bound.
    pub fn merged_window(&self, menu: &Menu) -> Option<ActiveWindow> {
        if !self.touches_window() {
            return None;
        }

        Some(ActiveWindow {
            start_date: self.start_date.as_value().copied().unwrap_or(menu.start_date),
            end_date: self.end_date.as_value().copied().unwrap_or(menu.end_date),
        })
    }
}

impl SparseUpdate for UpdateMenuPayload {
    const COLLECTION: Collection = Collection::Menus;

    fn into_field_set(self) -> Result<FieldSet, serde_json::Error> {
        let mut fields = FieldSet::new();
        fields
            .set("name", self.name)?
            .set("category", self.category)?
            .set("start_date", self.start_date)?
            .set("end_date", self.end_date)?;
        Ok(fields)
    }
}

pub async fn update_by_id(
    db: &Database,
    id: String,
    payload: UpdateMenuPayload,
) -> Result<(), update::Error> {
    update::merge_update(db, &id, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn window_requires_both_bounds() {
        let now = Utc::now();
        let partial = UpdateMenuPayload {
            start_date: Field::Value(now),
            ..Default::default()
        };
        assert!(partial.window().is_none());

        let full = UpdateMenuPayload {
            start_date: Field::Value(now - Duration::days(1)),
            end_date: Field::Value(now + Duration::days(1)),
            ..Default::default()
        };
        assert!(full.window().is_some_and(|window| window.contains(now)));
    }

    #[test]
    fn merged_window_keeps_the_stored_bound() {
        let now = Utc::now();
        let menu = Menu {
            id: "m1".to_string(),
            menu_id: "m1".to_string(),
            name: "Lunch".to_string(),
            category: "Main".to_string(),
            start_date: now - Duration::days(1),
            end_date: now + Duration::days(1),
            created_at: now,
            updated_at: now,
        };

        assert!(UpdateMenuPayload::default().merged_window(&menu).is_none());

        let late_start = UpdateMenuPayload {
            start_date: Field::Value(now + Duration::days(30)),
            ..Default::default()
        };
        let window = late_start.merged_window(&menu).unwrap();
        assert_eq!(window.end_date, menu.end_date);
        assert!(!window.is_ordered());

        let later_end = UpdateMenuPayload {
            end_date: Field::Value(now + Duration::days(30)),
            ..Default::default()
        };
        assert!(later_end.merged_window(&menu).unwrap().is_ordered());
    }

    #[test]
    fn rejects_clearing_required_fields() {
        let payload: UpdateMenuPayload =
            serde_json::from_value(serde_json::json!({ "name": null })).unwrap();

        assert!(payload.validate().is_err());
    }
}
