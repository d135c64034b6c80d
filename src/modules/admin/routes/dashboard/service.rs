use super::types::response;
use crate::{
    modules::{
        amendment,
        application::{self, repository::status::ApprovalStatus},
        closure, review, stall, user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let pool = &ctx.db_conn.pool;

    let (users, active_stalls, applications, amendments, closures, reports) = tokio::try_join!(
        async { user::repository::count(pool).await.map_err(|_| ()) },
        async { stall::repository::count_active(pool).await.map_err(|_| ()) },
        async {
            application::repository::count_by_status(pool, ApprovalStatus::Pending)
                .await
                .map_err(|_| ())
        },
        async {
            amendment::repository::count_by_status(pool, ApprovalStatus::Pending)
                .await
                .map_err(|_| ())
        },
        async {
            closure::repository::count_by_status(pool, ApprovalStatus::Pending)
                .await
                .map_err(|_| ())
        },
        async {
            review::repository::report::count_unresolved(pool)
                .await
                .map_err(|_| ())
        },
    )
    .map_err(|_| response::Error::FailedToFetchDashboard)?;

    Ok(response::Success::Dashboard(response::Dashboard {
        users,
        active_stalls,
        pending_applications: applications,
        pending_amendments: amendments,
        pending_closures: closures,
        open_reports: reports,
    }))
}
