use crate::utils::{
    database::{self, Collection, Database, Filter},
    pagination::{self, Paginated, Pagination},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as exposed to clients. Credentials and issued tokens live on the
/// same document but are never read into this type.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserCredentials {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct UserDocument<'a> {
    #[serde(flatten)]
    user: &'a User,
    password: &'a str,
    token: &'a str,
    refresh_token: &'a str,
}

#[derive(Debug)]
pub enum Error {
    AlreadyExists,
    UnexpectedError,
}

pub struct CreateUserPayload {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub password_hash: String,
    pub token: String,
    pub refresh_token: String,
}

pub fn generate_id() -> String {
    database::generate_id()
}

pub async fn create(db: &Database, payload: CreateUserPayload) -> Result<User, Error> {
    let now = Utc::now();
    let user = User {
        id: payload.user_id.clone(),
        user_id: payload.user_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        avatar: payload.avatar,
        created_at: now,
        updated_at: now,
    };

    let document = UserDocument {
        user: &user,
        password: &payload.password_hash,
        token: &payload.token,
        refresh_token: &payload.refresh_token,
    };

    match db.insert(Collection::Users, &document).await {
        Ok(()) => Ok(user),
        Err(database::Error::Conflict) => Err(Error::AlreadyExists),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a user: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id(db: &Database, id: String) -> Result<Option<User>, Error> {
    db.find_one_as::<User>(Collection::Users, &Filter::key(Collection::Users, id.clone()))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub struct FindByEmailOrPhone {
    pub email: String,
    pub phone: String,
}

pub async fn find_by_email_or_phone(
    db: &Database,
    payload: FindByEmailOrPhone,
) -> Result<Option<User>, Error> {
    db.find_one_as::<User>(
        Collection::Users,
        &Filter::Or(vec![
            Filter::eq("email", payload.email),
            Filter::eq("phone", payload.phone),
        ]),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch a user by email or phone: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_credentials_by_email(
    db: &Database,
    email: String,
) -> Result<Option<UserCredentials>, Error> {
    db.find_one_as::<UserCredentials>(Collection::Users, &Filter::eq("email", email))
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch user credentials: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many(db: &Database, pagination: Pagination) -> Result<Paginated<User>, Error> {
    pagination::paginate::<User>(db, Collection::Users, &Filter::All, pagination)
        .await
        .map_err(|_| Error::UnexpectedError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, phone: &str) -> CreateUserPayload {
        CreateUserPayload {
            user_id: generate_id(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            avatar: None,
            password_hash: "$argon2id$hash".to_string(),
            token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[tokio::test]
    async fn stored_credentials_stay_out_of_the_public_user() {
        let db = Database::in_memory();
        let user = create(&db, payload("ada@example.com", "+2348000000001"))
            .await
            .unwrap();

        let public = serde_json::to_value(find_by_id(&db, user.user_id.clone()).await.unwrap())
            .unwrap();
        assert!(public.get("password").is_none());
        assert!(public.get("token").is_none());

        let credentials = find_credentials_by_email(&db, "ada@example.com".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(credentials.user_id, user.user_id);
        assert_eq!(credentials.password, "$argon2id$hash");
    }

    #[tokio::test]
    async fn duplicate_emails_are_rejected_by_the_store() {
        let db = Database::in_memory();
        create(&db, payload("ada@example.com", "+2348000000001"))
            .await
            .unwrap();

        let duplicate = create(&db, payload("ada@example.com", "+2348000000002")).await;

        assert!(matches!(duplicate, Err(Error::AlreadyExists)));
    }
}
