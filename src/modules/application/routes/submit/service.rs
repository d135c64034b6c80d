use super::types::{request, response};
use crate::{
    modules::{
        application::repository,
        auth::repository::session::{self, Flash},
        storage::{self, StoredDocument},
    },
    types::Context,
};
use axum_typed_multipart::FieldData;
use std::sync::Arc;
use tempfile::NamedTempFile;
use validator::Validate;

async fn store(
    ctx: &Context,
    kind: &str,
    file: FieldData<NamedTempFile>,
) -> Result<StoredDocument, response::Error> {
    let buf = tokio::fs::read(file.contents.path()).await.map_err(|err| {
        tracing::error!("Failed to read the uploaded file {err:?}");
        response::Error::DocumentUploadFailed
    })?;

    let original_name = file.metadata.file_name.unwrap_or_default();

    storage::save(&ctx.storage, kind, &original_name, buf)
        .await
        .map_err(|err| match err {
            storage::Error::UnsupportedFileType => response::Error::UnsupportedDocument(kind.to_string()),
            storage::Error::TooLarge => response::Error::DocumentTooLarge(kind.to_string()),
            _ => response::Error::DocumentUploadFailed,
        })
}

async fn store_all(
    ctx: &Context,
    files: Vec<(&str, FieldData<NamedTempFile>)>,
) -> Result<Vec<StoredDocument>, response::Error> {
    let mut documents = vec![];

    for (kind, file) in files {
        match store(ctx, kind, file).await {
            Ok(document) => documents.push(document),
            Err(err) => {
                storage::remove(&ctx.storage, &documents).await;
                return Err(err);
            }
        }
    }

    Ok(documents)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = payload.body;
    body.validate().map_err(response::Error::FailedToValidate)?;

    let has_pending =
        repository::has_pending_by_user_id(&ctx.db_conn.pool, &payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToSubmitApplication)?;

    if has_pending {
        return Err(response::Error::AlreadyPending);
    }

    let mut files = vec![("business_permit", body.business_permit)];
    if let Some(file) = body.sanitary_permit {
        files.push(("sanitary_permit", file));
    }
    if let Some(file) = body.dti_certificate {
        files.push(("dti_certificate", file));
    }

    let documents = store_all(&ctx, files).await?;

    let session_id = payload.auth.session.id;
    let created = repository::create(
        &ctx.db_conn.pool,
        repository::CreateApplicationPayload {
            user_id: payload.auth.user.id,
            stall_name: body.stall_name.trim().to_string(),
            description: body.description.trim().to_string(),
            categories: body.categories,
            contact_number: body.contact_number,
            address: body.address.map(|address| address.trim().to_string()),
            latitude: body.latitude,
            longitude: body.longitude,
            documents: documents.clone(),
        },
    )
    .await;

    match created {
        Ok(application) => {
            tracing::info!("Application {} submitted", application.id);
            if let Err(err) = session::set_flash(
                &ctx.db_conn.pool,
                &session_id,
                Flash::info("Your application was received. We will email you once it is reviewed."),
            )
            .await
            {
                tracing::warn!(
                    "Failed to set the submission flash for application {}: {:?}",
                    application.id,
                    err
                );
            }
            Ok(response::Success::ApplicationSubmitted(application))
        }
        Err(err) => {
            storage::remove(&ctx.storage, &documents).await;
            match err {
                repository::Error::Duplicate => Err(response::Error::AlreadyPending),
                repository::Error::UnexpectedError => Err(response::Error::FailedToSubmitApplication),
            }
        }
    }
}
