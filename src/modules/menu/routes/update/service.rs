use super::types::{request, response};
use crate::{modules::menu::repository, types::Context};
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match payload.body.window() {
        Some(window) if !window.contains(Utc::now()) => {
            return Err(response::Error::InvalidTimeRange);
        }
        Some(_) => {}
        None if payload.body.touches_window() => {
            let merged = repository::find_by_id(&ctx.db, payload.menu_id.clone())
                .await
                .map_err(|_| response::Error::FailedToUpdateMenu)?
                .and_then(|menu| payload.body.merged_window(&menu));

            if merged.is_some_and(|window| !window.is_ordered()) {
                tracing::warn!("Rejected inverted time range for menu {}", payload.menu_id);
                return Err(response::Error::InvertedTimeRange);
            }
        }
        None => {}
    }

    repository::update_by_id(&ctx.db, payload.menu_id.clone(), payload.body).await?;

    repository::find_by_id(&ctx.db, payload.menu_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateMenu)?
        .ok_or(response::Error::MenuNotFound)
        .map(response::Success::MenuUpdated)
}
