use super::repository::{self, Stall};
use crate::modules::user::repository::User;
use sqlx::PgExecutor;

#[derive(Debug)]
pub enum Error {
    NotFound,
    NotOwner,
    UnexpectedError,
}

/// Loads a stall the user owns. Closed stalls count as missing.
pub async fn find_owned<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
    user: &User,
) -> Result<Stall, Error> {
    let stall = repository::find_by_id(e, stall_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .filter(Stall::is_active)
        .ok_or(Error::NotFound)?;

    if !repository::is_owner(user, &stall) {
        tracing::debug!("User {} does not own stall {}", user.id, stall.id);
        return Err(Error::NotOwner);
    }

    Ok(stall)
}

/// Loads a stall that is open to the public.
pub async fn find_active<'e, E: PgExecutor<'e>>(e: E, stall_id: &str) -> Result<Stall, Error> {
    repository::find_by_id(e, stall_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .filter(Stall::is_active)
        .ok_or(Error::NotFound)
}
