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

    let credentials =
        repository::find_credentials_by_email(&ctx.db, payload.body.email.to_lowercase())
            .await
            .map_err(|_| response::Error::FailedToFetchUser)?
            .ok_or(response::Error::InvalidCredentials)?;

    if !auth::verify_credential(&payload.body.password, &credentials.password) {
        tracing::debug!("Password mismatch for user {}", credentials.user_id);
        return Err(response::Error::InvalidCredentials);
    }

    let tokens = ctx
        .tokens
        .issue_token_pair(&Identity {
            email: credentials.email,
            first_name: credentials.first_name,
            last_name: credentials.last_name,
            uid: credentials.user_id.clone(),
        })
        .map_err(|_| response::Error::FailedToIssueTokens)?;

    auth::persist_token_pair(&ctx.db, &credentials.user_id, &tokens)
        .await
        .map_err(|_| response::Error::FailedToIssueTokens)?;

    let user = repository::find_by_id(&ctx.db, credentials.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    Ok(response::Success::LoggedIn { user, tokens })
}
