use super::types::{request, response};
use crate::{
    modules::{application::repository, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let application = repository::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchApplication)?
        .ok_or(response::Error::ApplicationNotFound)?;

    if application.user_id != payload.auth.user.id
        && !user::repository::is_admin(&payload.auth.user)
    {
        return Err(response::Error::ApplicationNotFound);
    }

    Ok(response::Success::Application(application))
}
