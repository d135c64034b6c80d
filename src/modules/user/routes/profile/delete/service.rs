use super::types::{request, response};
use crate::{
    modules::{admin, application, storage, user::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;

    if !payload.body.confirm_email.trim().eq_ignore_ascii_case(&user.email) {
        return Err(response::Error::EmailMismatch);
    }

    if repository::is_admin(&user) {
        let has_logs = admin::repository::exists_by_admin_id(&ctx.db_conn.pool, &user.id)
            .await
            .map_err(|_| response::Error::FailedToDeleteAccount)?;

        if has_logs {
            return Err(response::Error::AdminHasHistory);
        }
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToDeleteAccount
    })?;

    let documents = application::repository::find_many_by_user_id(&mut *tx, &user.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAccount)?
        .into_iter()
        .flat_map(|application| application.documents.0)
        .collect::<Vec<_>>();

    repository::delete_account(&mut tx, &user.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAccount)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToDeleteAccount
    })?;

    storage::remove(&ctx.storage, &documents).await;

    tracing::info!("Deleted account of user {}", user.id);

    Ok(response::Success::AccountDeleted)
}
