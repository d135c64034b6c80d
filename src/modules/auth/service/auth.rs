use chrono::{Duration, Utc};

use super::super::repository::{
    self,
    session::{CreateSessionPayload, Flash, Session},
};
use crate::{
    modules::user::repository::User,
    types::{AppEnvironment, Context},
    utils::token::{self, CSRF_TOKEN_LENGTH, SESSION_TOKEN_LENGTH},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use sqlx::PgExecutor;

pub const SESSION_COOKIE: &str = "buzzarfeed_session";
pub const SESSION_LIFETIME_DAYS: i64 = 7;
pub const RESET_TOKEN_LIFETIME_MINUTES: i64 = 60;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

/// A freshly opened session. `token` is the only copy of the raw bearer token.
pub struct OpenedSession {
    pub token: String,
    pub session: Session,
}

pub async fn create_session<'e, E: PgExecutor<'e>>(
    e: E,
    user: &User,
    flash: Option<Flash>,
) -> Result<OpenedSession> {
    let raw_token = token::generate(SESSION_TOKEN_LENGTH);

    let session = repository::session::create(
        e,
        CreateSessionPayload {
            id: token::digest(&raw_token),
            user_id: user.id.clone(),
            user_type_id: user.user_type_id,
            csrf_token: token::generate(CSRF_TOKEN_LENGTH),
            flash,
            expires_at: (Utc::now() + Duration::days(SESSION_LIFETIME_DAYS)).naive_utc(),
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)?;

    Ok(OpenedSession {
        token: raw_token,
        session,
    })
}

pub async fn verify_session_token<'e, E: PgExecutor<'e>>(e: E, raw_token: &str) -> Result<Session> {
    let session = repository::session::find_by_id(e, &token::digest(raw_token))
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    }

    Ok(session)
}

pub fn session_cookie(ctx: &Context, raw_token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, raw_token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(ctx.app.environment == AppEnvironment::Production)
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
