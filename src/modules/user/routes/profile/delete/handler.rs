use super::{service::service, types::request};
use crate::{
    modules::auth::{middleware::Auth, service::auth},
    types::Context,
    utils::extract::Json,
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    jar: CookieJar,
    auth: Auth,
    Json(body): Json<request::Body>,
) -> Response {
    match service(ctx, request::Payload { auth, body }).await {
        Ok(success) => (jar.remove(auth::expired_session_cookie()), success).into_response(),
        Err(err) => err.into_response(),
    }
}
