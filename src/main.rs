use buzzarfeed::{
    app::App,
    jobs,
    types::{Config, Context, ToContext},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let ctx: Arc<Context> = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to start: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(ctx.clone());
    let job_monitor = jobs::monitor(ctx).await;

    tokio::select! {
        res = app.serve() => {
            if let Err(err) = res {
                tracing::error!("HTTP server stopped: {}", err);
                return ExitCode::FAILURE;
            }
        }
        res = job_monitor.run() => {
            if let Err(err) = res {
                tracing::error!("Job monitor stopped: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
