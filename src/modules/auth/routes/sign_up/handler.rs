use super::{service::service, types::request};
use crate::{modules::auth::service::auth, types::Context, utils::extract::Json};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    jar: CookieJar,
    Json(payload): Json<request::Payload>,
) -> Response {
    match service(ctx.clone(), payload).await {
        Ok(success) => {
            let jar = jar.add(auth::session_cookie(&ctx, success.token()));
            (jar, success).into_response()
        }
        Err(err) => err.into_response(),
    }
}
