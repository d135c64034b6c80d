use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::extract::Json};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: AdminAuth,
    Path(id): Path<String>,
    body: Option<Json<request::Body>>,
) -> impl IntoResponse {
    let body = body.map(|Json(body)| body).unwrap_or_default();
    service(ctx, request::Payload { auth, id, body }).await
}
