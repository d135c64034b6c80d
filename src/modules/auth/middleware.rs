use super::{repository::session::Session, service};
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::{ApiResponse, Context};
use axum::extract::{Extension, FromRequestParts};
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, RequestPartsExt};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

enum Error {
    InvalidSession,
    InvalidCsrfToken,
    ServerError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSession => {
                ApiResponse::failure(StatusCode::UNAUTHORIZED, "Invalid session token")
            }
            Self::InvalidCsrfToken => {
                ApiResponse::failure(StatusCode::FORBIDDEN, "Invalid CSRF token")
            }
            Self::ServerError => {
                ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load session")
            }
        }
        .into_response()
    }
}

enum Credential {
    Bearer(String),
    Cookie(String),
}

impl Credential {
    fn token(&self) -> &str {
        match self {
            Self::Bearer(token) | Self::Cookie(token) => token,
        }
    }
}

async fn get_credential(parts: &mut Parts) -> Option<Credential> {
    if let Ok(TypedHeader(Authorization(bearer))) =
        parts.extract::<TypedHeader<Authorization<Bearer>>>().await
    {
        return Some(Credential::Bearer(bearer.token().to_string()));
    }

    CookieJar::from_headers(&parts.headers)
        .get(service::auth::SESSION_COOKIE)
        .map(|cookie| Credential::Cookie(cookie.value().to_string()))
}

/// Cookie sessions travel automatically with cross-site requests, so their
/// mutating requests must echo the session's CSRF token.
fn check_csrf(parts: &Parts, credential: &Credential, session: &Session) -> Result<(), Error> {
    if !matches!(credential, Credential::Cookie(_))
        || !service::csrf::is_state_changing(&parts.method)
    {
        return Ok(());
    }

    let provided = parts
        .headers
        .get(service::csrf::CSRF_HEADER)
        .and_then(|header| header.to_str().ok());

    match service::csrf::verify(&session.csrf_token, provided) {
        true => Ok(()),
        false => {
            tracing::warn!("CSRF token validation failed for user {}", session.user_id);
            Err(Error::InvalidCsrfToken)
        }
    }
}

async fn get_user_from_request(parts: &mut Parts) -> Result<(User, Session), Error> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| {
            tracing::error!("Context extension missing from request: {}", err);
            Error::ServerError
        })?;

    let credential = get_credential(parts).await.ok_or(Error::InvalidSession)?;

    let session = service::auth::verify_session_token(&ctx.db_conn.pool, credential.token())
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => Error::ServerError,
            _ => Error::InvalidSession,
        })?;

    check_csrf(parts, &credential, &session)?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, &session.user_id)
        .await
        .map_err(|_| Error::ServerError)?
        .ok_or(Error::InvalidSession)?;

    Ok((user, session))
}

#[derive(Clone)]
pub struct Auth {
    pub user: User,
    pub session: Session,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_user_from_request(parts)
            .await
            .map(|(user, session)| Self { user, session })
            .map_err(IntoResponse::into_response)
    }
}

#[derive(Clone)]
pub struct AdminAuth {
    pub user: User,
    pub session: Session,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let (user, session) = get_user_from_request(parts)
            .await
            .map_err(IntoResponse::into_response)?;

        if !user::repository::is_admin(&user) {
            return Err(ApiResponse::failure(StatusCode::FORBIDDEN, "Forbidden").into_response());
        }

        Ok(Self { user, session })
    }
}
