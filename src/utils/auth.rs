use crate::utils::{
    database::{self, Collection, Database, Filter},
    field::Field,
    update::FieldSet,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_TTL_HOURS: i64 = 24;
pub const REFRESH_TOKEN_TTL_HOURS: i64 = 168;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    pub uid: String,
    pub exp: usize,
    pub iat: usize,
}

/// The user attributes embedded in an access token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token is invalid: {0}")]
    Invalid(String),
}

#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| {
            tracing::error!("Failed to sign token for {}: {}", claims.uid, err);
            TokenError::Invalid(err.to_string())
        })
    }

    pub fn issue_token_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        self.issue_token_pair_at(identity, Utc::now())
    }

    pub fn issue_token_pair_at(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let expires_at = |hours: i64| (now + Duration::hours(hours)).timestamp().max(0) as usize;
        let iat = now.timestamp().max(0) as usize;

        let access = self.sign(&Claims {
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            uid: identity.uid.clone(),
            exp: expires_at(ACCESS_TOKEN_TTL_HOURS),
            iat,
        })?;
        let refresh = self.sign(&Claims {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            uid: identity.uid.clone(),
            exp: expires_at(REFRESH_TOKEN_TTL_HOURS),
            iat,
        })?;

        Ok(TokenPair { access, refresh })
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => {
                tracing::debug!("Token validation failed: {}", err);
                TokenError::Invalid(err.to_string())
            }
        })
    }
}

pub fn hash_credential(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::rand_core::OsRng;
    use argon2::password_hash::SaltString;
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_credential(plaintext: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Stores a freshly issued pair on the user document, creating the document
/// when no user carries `user_id`.
pub async fn persist_token_pair(
    db: &Database,
    user_id: &str,
    tokens: &TokenPair,
) -> Result<(), database::Error> {
    let mut fields = FieldSet::new();
    fields
        .set("token", Field::Value(&tokens.access))?
        .set("refresh_token", Field::Value(&tokens.refresh))?
        .set("updated_at", Field::Value(Utc::now()))?;

    db.upsert_one(
        Collection::Users,
        &Filter::key(Collection::Users, user_id),
        fields.into_document(),
    )
    .await
    .map_err(|err| {
        tracing::error!("Failed to persist tokens for user {}: {}", user_id, err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> Identity {
        Identity {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            uid: "01HZX".to_string(),
        }
    }

    #[test]
    fn issued_tokens_validate_with_their_claims() {
        let tokens = TokenService::new("secret");
        let pair = tokens.issue_token_pair(&identity()).unwrap();

        let access = tokens.validate_token(&pair.access).unwrap();
        assert_eq!(access.email, "ada@example.com");
        assert_eq!(access.uid, "01HZX");
        assert_eq!(access.exp - access.iat, 24 * 3600);

        let refresh = tokens.validate_token(&pair.refresh).unwrap();
        assert_eq!(refresh.uid, "01HZX");
        assert!(refresh.email.is_empty());
        assert_eq!(refresh.exp - refresh.iat, 168 * 3600);
    }

    #[test]
    fn distinguishes_expired_from_invalid_tokens() {
        let tokens = TokenService::new("secret");
        let long_ago = Utc::now() - Duration::hours(400);
        let stale = tokens.issue_token_pair_at(&identity(), long_ago).unwrap();

        assert_eq!(tokens.validate_token(&stale.access), Err(TokenError::Expired));
        assert_eq!(tokens.validate_token(&stale.refresh), Err(TokenError::Expired));

        let foreign = TokenService::new("other")
            .issue_token_pair(&identity())
            .unwrap();
        assert!(matches!(
            tokens.validate_token(&foreign.access),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(
            tokens.validate_token("not-a-token"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn credentials_round_trip_through_argon2() {
        let hash = hash_credential("hunter22").unwrap();

        assert_ne!(hash, "hunter22");
        assert!(verify_credential("hunter22", &hash));
        assert!(!verify_credential("hunter23", &hash));
        assert!(!verify_credential("hunter22", "not-a-hash"));
    }

    #[tokio::test]
    async fn persisting_a_pair_overwrites_the_previous_one() {
        let db = Database::in_memory();
        db.insert(
            Collection::Users,
            &json!({ "user_id": "u1", "email": "ada@example.com", "token": "old" }),
        )
        .await
        .unwrap();

        let pair = TokenPair {
            access: "access".to_string(),
            refresh: "refresh".to_string(),
        };
        persist_token_pair(&db, "u1", &pair).await.unwrap();

        let user = db
            .find_one(Collection::Users, &Filter::key(Collection::Users, "u1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user["token"], json!("access"));
        assert_eq!(user["refresh_token"], json!("refresh"));
        assert_eq!(user["email"], json!("ada@example.com"));
        assert!(user["updated_at"].is_string());
    }
}
