use super::types::{request, response};
use crate::{
    modules::user::repository,
    types::Context,
    utils::auth::{self, Identity},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let body = payload.body;
    let email = body.email.to_lowercase();

    if let Some(conflict) = find_conflict(&ctx, &email, &body.phone).await? {
        return Err(conflict);
    }

    let password_hash = auth::hash_credential(&body.password).map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::FailedToHashPassword
    })?;

    let user_id = repository::generate_id();
    let tokens = ctx
        .tokens
        .issue_token_pair(&Identity {
            email: email.clone(),
            first_name: body.first_name.clone(),
            last_name: body.last_name.clone(),
            uid: user_id.clone(),
        })
        .map_err(|_| response::Error::FailedToIssueTokens)?;

    let created = repository::create(
        &ctx.db,
        repository::CreateUserPayload {
            user_id,
            first_name: body.first_name,
            last_name: body.last_name,
            email: email.clone(),
            phone: body.phone.clone(),
            avatar: body.avatar,
            password_hash,
            token: tokens.access.clone(),
            refresh_token: tokens.refresh.clone(),
        },
    )
    .await;

    let user = match created {
        Ok(user) => user,
        // Another sign-up took the email or phone after the check above.
        Err(repository::Error::AlreadyExists) => {
            return Err(find_conflict(&ctx, &email, &body.phone)
                .await?
                .unwrap_or(response::Error::SignupFailed));
        }
        Err(repository::Error::UnexpectedError) => return Err(response::Error::SignupFailed),
    };

    Ok(response::Success::SignedUp { user, tokens })
}

/// The 409 to report when a user already holds `email` or `phone`.
async fn find_conflict(
    ctx: &Context,
    email: &str,
    phone: &str,
) -> Result<Option<response::Error>, response::Error> {
    let existing = repository::find_by_email_or_phone(
        &ctx.db,
        repository::FindByEmailOrPhone {
            email: email.to_string(),
            phone: phone.to_string(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchUser)?;

    Ok(existing.map(|user| match user.email == email {
        true => response::Error::EmailAlreadyInUse,
        false => response::Error::PhoneNumberAlreadyInUse,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn conflicts_name_the_field_already_taken() {
        let ctx = Context::in_memory("secret");
        repository::create(
            &ctx.db,
            repository::CreateUserPayload {
                user_id: repository::generate_id(),
                first_name: "Ada".to_string(),
                last_name: "Obi".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+2348000000001".to_string(),
                avatar: None,
                password_hash: "hash".to_string(),
                token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            },
        )
        .await
        .unwrap();

        let by_email = find_conflict(&ctx, "ada@example.com", "+2348000000009")
            .await
            .unwrap();
        assert!(matches!(by_email, Some(response::Error::EmailAlreadyInUse)));

        let by_phone = find_conflict(&ctx, "obi@example.com", "+2348000000001")
            .await
            .unwrap();
        assert!(matches!(by_phone, Some(response::Error::PhoneNumberAlreadyInUse)));

        let free = find_conflict(&ctx, "obi@example.com", "+2348000000009")
            .await
            .unwrap();
        assert!(free.is_none());
    }
}
