use super::repository::{reset_token, session};
use crate::types::{Context, SchedulableJob};
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

const HOURLY: &str = "0 0 * * * *";

async fn purge_tokens_job(ctx: Arc<Context>) -> Result<(), apalis::prelude::Error> {
    tracing::info!("Purging expired tokens");

    match session::delete_expired(&ctx.db_conn.pool).await {
        Ok(count) => tracing::info!("Removed {} expired session(s)", count),
        Err(_) => tracing::warn!("Skipping session purge this round"),
    }

    match reset_token::delete_stale(&ctx.db_conn.pool).await {
        Ok(count) => tracing::info!("Removed {} stale reset token(s)", count),
        Err(_) => tracing::warn!("Skipping reset token purge this round"),
    }

    Ok(())
}

fn setup_purge_tokens_job(
    ctx: Arc<Context>,
) -> Arc<
    dyn Fn()
            -> Pin<Box<dyn std::future::Future<Output = Result<(), apalis::prelude::Error>> + Send>>
        + Send
        + Sync,
> {
    Arc::new(move || {
        let ctx = ctx.clone();
        Box::pin(async move { purge_tokens_job(ctx).await })
    })
}

pub fn list(ctx: Arc<Context>) -> Vec<SchedulableJob> {
    match apalis::cron::Schedule::from_str(HOURLY) {
        Ok(schedule) => vec![SchedulableJob {
            name: "buzzarfeed::auth::purge_tokens",
            schedule,
            job: setup_purge_tokens_job(ctx),
        }],
        Err(err) => {
            tracing::error!("Invalid token purge schedule '{}': {}", HOURLY, err);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_runs_every_hour() {
        let schedule = apalis::cron::Schedule::from_str(HOURLY).unwrap();
        let mut upcoming = schedule.upcoming(chrono::Utc);
        let first = upcoming.next().unwrap();
        let second = upcoming.next().unwrap();

        assert_eq!((second - first).num_minutes(), 60);
    }
}
