use apalis::cron::CronStream;
use apalis::prelude::*;
use apalis::utils::TokioExecutor;
use std::sync::Arc;

use crate::{modules::auth, types};

pub async fn monitor(ctx: Arc<types::Context>) -> Monitor<TokioExecutor> {
    let all_jobs = auth::job::list(ctx);

    let mut monitor = Monitor::<TokioExecutor>::new();

    for job in all_jobs {
        let run = job.job.clone();
        let worker = WorkerBuilder::new(job.name)
            .stream(CronStream::new(job.schedule).into_stream())
            .build_fn(move |_: types::Job| {
                let run = run.clone();
                async move { run().await }
            });
        tracing::debug!("Registered cron worker {}", job.name);
        monitor = monitor.register_with_count(1, worker);
    }

    monitor
}
