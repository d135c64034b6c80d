use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::Auth,
    types::{ApiResponse, Context},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_typed_multipart::{TypedMultipart, TypedMultipartError};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    body: Result<TypedMultipart<request::Body>, TypedMultipartError>,
) -> Response {
    let TypedMultipart(body) = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!("Rejected application form: {}", err);
            return ApiResponse::failure(err.get_status(), err.to_string()).into_response();
        }
    };

    service(ctx, request::Payload { auth, body })
        .await
        .into_response()
}
